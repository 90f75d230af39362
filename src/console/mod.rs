//! Terminal front-end: event bus and display rendering

pub mod display;
pub mod events;

pub use display::DemoDisplay;
pub use events::{DemoEvent, EventBus, MessageLevel};
