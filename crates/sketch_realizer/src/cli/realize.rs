//! One-shot `realize` command.

use super::OutputFormat;
use anyhow::Context;
use sketch_core::{RealizeOutcome, StyleChoice};
use sketch_realizer::{Realizer, RealizerConfig};
use std::path::Path;
use tracing::info;

/// Run the pipeline on a file and print the outcome.
///
/// Returns whether both outputs were produced.
pub async fn run_realize(
    config: &RealizerConfig,
    image: &Path,
    style: StyleChoice,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    let upload =
        tokio::fs::read(image)
            .await
            .with_context(|| format!("Failed to read {}", image.display()))?;

    let realizer = Realizer::from_config(config)?;
    info!(path = %image.display(), style = %style, "Realizing drawing");
    let outcome = realizer.realize(&upload, style).await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Human => match &outcome {
            RealizeOutcome::Realized { description, image } => {
                println!("Generated image: {}", image);
                println!();
                println!("{}", description);
            }
            RealizeOutcome::Failed { message } => eprintln!("Error: {}", message),
        },
    }

    Ok(outcome.is_realized())
}
