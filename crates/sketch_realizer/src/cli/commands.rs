//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use sketch_core::StyleChoice;
use std::path::PathBuf;

/// Kid Sketch Realizer - turn a child's drawing into a styled photo-like image
#[derive(Parser, Debug)]
#[command(name = "sketch-realizer")]
#[command(about = "Turn a child's drawing into a styled photo-like image", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file, layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Export spans and request metrics to stdout
    #[arg(long, global = true)]
    pub telemetry: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the upload form server
    Serve {
        /// Listen address, overriding `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },

    /// Describe and re-render one drawing from disk
    Realize {
        /// Path to a png or jpeg drawing
        image: PathBuf,

        /// Rendering style
        #[arg(long, default_value_t = StyleChoice::default())]
        style: StyleChoice,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// List the available styles
    Styles,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
