//! Kid Sketch Realizer CLI binary.
//!
//! - `serve` runs the upload form
//! - `realize` runs one drawing from disk
//! - `styles` lists the rendering styles

use clap::Parser;
use sketch_core::StyleChoice;
use sketch_realizer::{
    ObservabilityConfig, RealizerConfig, init_observability_with_config, shutdown_observability,
};
use std::path::Path;
use std::process::ExitCode;

mod cli;

use cli::{Cli, Commands, handle_serve, run_realize};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability_with_config(
        ObservabilityConfig::new(env!("CARGO_PKG_NAME"))
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs)
            .with_span_export(cli.telemetry)
            .with_metrics_export(cli.telemetry),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    // Config errors come back here so exporters are flushed before exit
    let result = run(cli.command, cli.config.as_deref()).await;

    shutdown_observability();
    result
}

async fn run(command: Commands, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Styles => {
            for style in StyleChoice::all() {
                println!("{}", style);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Serve { bind } => {
            let config = RealizerConfig::load_from(config_path)?;
            handle_serve(config, bind).await?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Realize {
            image,
            style,
            format,
        } => {
            let config = RealizerConfig::load_from(config_path)?;
            let realized = run_realize(&config, &image, style, format).await?;
            Ok(if realized {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
