//! Command-line interface module.

mod commands;
mod realize;
mod serve;

pub use commands::{Cli, Commands, OutputFormat};
pub use realize::run_realize;
pub use serve::handle_serve;
