//! Command-line argument parsing for SignScope
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use crate::errors::Result;
use crate::pipeline::ModelKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SignScope - terminal demo of a sign-language video recognition product
#[derive(Parser, Debug)]
#[command(name = "signscope")]
#[command(version = "0.3.0")]
#[command(about = "Simulated sign language recognition demo", long_about = None)]
pub struct Args {
    /// Recognition model to simulate (iv3-gru or transformer)
    #[arg(short, long, default_value = "iv3-gru")]
    pub model: String,

    /// Override the simulation tick interval in milliseconds
    #[arg(long)]
    pub tick_interval: Option<u64>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress progress rendering)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full demo flow (upload, processing, visualization, results)
    Run {
        /// Upload a single file instead of the demo batch
        #[arg(long)]
        single: bool,
    },

    /// Print the stage plan for the selected model
    Stages,

    /// Print the batch recognition results
    Results {
        /// Emit the export report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose == 0 {
            Verbosity::Normal
        } else {
            Verbosity::Verbose
        }
    }

    /// Parse the selected model name
    pub fn model_kind(&self) -> Result<ModelKind> {
        ModelKind::parse(&self.model)
    }
}

impl Verbosity {
    /// Check if progress bars should render
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if per-event detail should print
    pub fn show_events(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> Args {
        Args {
            model: "iv3-gru".to_string(),
            tick_interval: None,
            config: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_verbosity_quiet() {
        assert_eq!(args_with(0, true).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        assert_eq!(args_with(0, false).verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose() {
        assert_eq!(args_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(args_with(3, false).verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn test_model_kind_parse() {
        let args = args_with(0, false);
        assert_eq!(args.model_kind().unwrap(), ModelKind::Iv3Gru);

        let mut transformer = args_with(0, false);
        transformer.model = "transformer".to_string();
        assert_eq!(transformer.model_kind().unwrap(), ModelKind::Transformer);

        let mut bad = args_with(0, false);
        bad.model = "resnet".to_string();
        assert!(bad.model_kind().is_err());
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());

        assert!(!Verbosity::Normal.show_events());
        assert!(Verbosity::Verbose.show_events());
    }

    #[test]
    fn test_clap_parses_run_subcommand() {
        let args = Args::try_parse_from(["signscope", "run", "--single"]).unwrap();
        match args.command {
            Some(Commands::Run { single }) => assert!(single),
            other => panic!("expected run subcommand, got {:?}", other),
        }
    }

    #[test]
    fn test_clap_parses_results_json() {
        let args =
            Args::try_parse_from(["signscope", "-m", "transformer", "results", "--json"]).unwrap();
        assert_eq!(args.model, "transformer");
        match args.command {
            Some(Commands::Results { json }) => assert!(json),
            other => panic!("expected results subcommand, got {:?}", other),
        }
    }
}
