//! Frame playback cursor and demo clip library
//!
//! The same elapsed-versus-duration arithmetic as the processing
//! pipeline, at scrubber scale: a frame index over a fixed frame count
//! at a fixed rate, with clamped navigation.

use crate::errors::{DemoError, Result};
use serde::Serialize;

/// Frames per second of the demo clips
pub const DEMO_FPS: u32 = 30;

/// Frame count of the mock analysis clip (4 seconds at 30 FPS)
pub const DEMO_TOTAL_FRAMES: usize = 120;

/// One entry in the demo clip library
#[derive(Debug, Clone, Serialize)]
pub struct VideoClip {
    /// Display filename
    pub name: String,

    /// Clip length in seconds
    pub duration_secs: f64,
}

/// Scrubber over the frames of one clip
#[derive(Debug, Clone)]
pub struct PlaybackCursor {
    frame: usize,
    total_frames: usize,
    fps: u32,
    playing: bool,
}

impl PlaybackCursor {
    /// Create a cursor at frame zero
    ///
    /// Fails with `InvalidConfiguration` on a zero frame count or rate.
    pub fn new(total_frames: usize, fps: u32) -> Result<Self> {
        if total_frames == 0 || fps == 0 {
            return Err(DemoError::InvalidConfiguration {
                reason: "playback requires a positive frame count and rate".to_string(),
            });
        }
        Ok(Self {
            frame: 0,
            total_frames,
            fps,
            playing: false,
        })
    }

    /// Current frame index (zero-based)
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Total frame count
    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    /// True while playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Toggle play/pause
    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
    }

    /// Step back one frame, clamped at the first
    pub fn prev_frame(&mut self) {
        self.frame = self.frame.saturating_sub(1);
    }

    /// Step forward one frame, clamped at the last
    pub fn next_frame(&mut self) {
        self.frame = (self.frame + 1).min(self.total_frames - 1);
    }

    /// Jump to a position expressed as a fraction of the clip
    pub fn seek_fraction(&mut self, fraction: f64) {
        let clamped = fraction.clamp(0.0, 1.0);
        self.frame = (clamped * (self.total_frames - 1) as f64).round() as usize;
    }

    /// Advance one frame if playing; pauses on reaching the last frame
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        if self.frame + 1 >= self.total_frames {
            self.frame = self.total_frames - 1;
            self.playing = false;
        } else {
            self.frame += 1;
        }
    }

    /// Rewind to frame zero and pause
    pub fn reset(&mut self) {
        self.frame = 0;
        self.playing = false;
    }

    /// Playback position in [0, 1]
    pub fn fraction(&self) -> f64 {
        if self.total_frames <= 1 {
            return 0.0;
        }
        self.frame as f64 / (self.total_frames - 1) as f64
    }

    /// Seconds of clip time at the current frame
    pub fn elapsed_secs(&self) -> f64 {
        self.frame as f64 / self.fps as f64
    }

    /// Current position formatted as M:SS
    pub fn format_timestamp(&self) -> String {
        let seconds = self.elapsed_secs() as u64;
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }
}

/// Batch of demo clips with a navigation cursor
///
/// Switching clips rewinds the frame cursor and pauses, matching the
/// product demo's batch navigation.
#[derive(Debug, Clone)]
pub struct ClipLibrary {
    clips: Vec<VideoClip>,
    current: usize,
    cursor: PlaybackCursor,
}

impl ClipLibrary {
    /// Build a library over a non-empty clip list
    pub fn new(clips: Vec<VideoClip>) -> Result<Self> {
        if clips.is_empty() {
            return Err(DemoError::InvalidConfiguration {
                reason: "clip library is empty".to_string(),
            });
        }
        Ok(Self {
            clips,
            current: 0,
            cursor: PlaybackCursor::new(DEMO_TOTAL_FRAMES, DEMO_FPS)?,
        })
    }

    /// Clips in library order
    pub fn clips(&self) -> &[VideoClip] {
        &self.clips
    }

    /// Index of the clip being viewed
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The clip being viewed
    pub fn current_clip(&self) -> &VideoClip {
        &self.clips[self.current]
    }

    /// Frame cursor for the current clip
    pub fn cursor(&self) -> &PlaybackCursor {
        &self.cursor
    }

    /// Mutable frame cursor for the current clip
    pub fn cursor_mut(&mut self) -> &mut PlaybackCursor {
        &mut self.cursor
    }

    /// Move to the previous clip (clamped), rewinding playback
    pub fn prev_clip(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.cursor.reset();
        }
    }

    /// Move to the next clip (clamped), rewinding playback
    pub fn next_clip(&mut self) {
        if self.current + 1 < self.clips.len() {
            self.current += 1;
            self.cursor.reset();
        }
    }

    /// Jump directly to a clip index, rewinding playback
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.clips.len() {
            return Err(DemoError::ClipOutOfRange {
                index,
                len: self.clips.len(),
            });
        }
        self.current = index;
        self.cursor.reset();
        Ok(())
    }
}

/// The eight demo clips shown across the visualization and results screens
pub fn demo_library() -> ClipLibrary {
    let clips = vec![
        clip("hello_sign.mp4", 3.2),
        clip("goodbye_sign.mp4", 2.8),
        clip("welcome_sign.mp4", 4.0),
        clip("thank_you_sign.mp4", 3.5),
        clip("please_sign.mp4", 2.9),
        clip("yes_sign.mp4", 3.1),
        clip("no_sign.mp4", 2.7),
        clip("sorry_sign.mp4", 3.8),
    ];
    ClipLibrary::new(clips).expect("built-in clip library is valid")
}

fn clip(name: &str, duration_secs: f64) -> VideoClip {
    VideoClip {
        name: name.to_string(),
        duration_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_validation() {
        assert!(PlaybackCursor::new(0, 30).is_err());
        assert!(PlaybackCursor::new(120, 0).is_err());
        assert!(PlaybackCursor::new(120, 30).is_ok());
    }

    #[test]
    fn test_frame_navigation_clamps() {
        let mut cursor = PlaybackCursor::new(120, 30).unwrap();

        cursor.prev_frame();
        assert_eq!(cursor.frame(), 0);

        for _ in 0..200 {
            cursor.next_frame();
        }
        assert_eq!(cursor.frame(), 119);
    }

    #[test]
    fn test_seek_fraction() {
        let mut cursor = PlaybackCursor::new(120, 30).unwrap();

        cursor.seek_fraction(0.5);
        assert_eq!(cursor.frame(), 60);

        cursor.seek_fraction(2.0);
        assert_eq!(cursor.frame(), 119);

        cursor.seek_fraction(-1.0);
        assert_eq!(cursor.frame(), 0);
    }

    #[test]
    fn test_tick_advances_only_while_playing() {
        let mut cursor = PlaybackCursor::new(120, 30).unwrap();

        cursor.tick();
        assert_eq!(cursor.frame(), 0);

        cursor.toggle_playback();
        cursor.tick();
        assert_eq!(cursor.frame(), 1);
    }

    #[test]
    fn test_playback_pauses_at_end() {
        let mut cursor = PlaybackCursor::new(5, 30).unwrap();
        cursor.toggle_playback();

        for _ in 0..10 {
            cursor.tick();
        }
        assert_eq!(cursor.frame(), 4);
        assert!(!cursor.is_playing());
    }

    #[test]
    fn test_elapsed_and_timestamp() {
        let mut cursor = PlaybackCursor::new(120, 30).unwrap();
        cursor.seek_fraction(0.5);
        assert!((cursor.elapsed_secs() - 2.0).abs() < 1e-9);
        assert_eq!(cursor.format_timestamp(), "0:02");
    }

    #[test]
    fn test_library_navigation_resets_cursor() {
        let mut library = demo_library();
        library.cursor_mut().seek_fraction(0.9);
        library.cursor_mut().toggle_playback();

        library.next_clip();
        assert_eq!(library.current_index(), 1);
        assert_eq!(library.cursor().frame(), 0);
        assert!(!library.cursor().is_playing());
    }

    #[test]
    fn test_library_clamps_at_ends() {
        let mut library = demo_library();
        library.prev_clip();
        assert_eq!(library.current_index(), 0);

        for _ in 0..20 {
            library.next_clip();
        }
        assert_eq!(library.current_index(), 7);
    }

    #[test]
    fn test_jump_to_out_of_range() {
        let mut library = demo_library();
        assert!(library.jump_to(3).is_ok());
        assert_eq!(library.current_index(), 3);

        let err = library.jump_to(8);
        assert!(matches!(err, Err(DemoError::ClipOutOfRange { len: 8, .. })));
    }

    #[test]
    fn test_demo_library_contents() {
        let library = demo_library();
        assert_eq!(library.clips().len(), 8);
        assert_eq!(library.clips()[0].name, "hello_sign.mp4");
        assert!((library.clips()[2].duration_secs - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_library_rejected() {
        assert!(ClipLibrary::new(Vec::new()).is_err());
    }
}
