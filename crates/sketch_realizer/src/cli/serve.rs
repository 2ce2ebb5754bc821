//! `serve` command handler.

use sketch_realizer::{AppState, Realizer, RealizerConfig, serve};

/// Start the form server, optionally on a different address.
pub async fn handle_serve(config: RealizerConfig, bind: Option<String>) -> anyhow::Result<()> {
    let mut settings = config.server.clone();
    if let Some(bind) = bind {
        settings.bind = bind;
    }

    tracing::info!(model = %config.openai.vision_model, "Starting form server");

    let realizer = Realizer::from_config(&config)?;
    serve(AppState::new(realizer)?, &settings).await?;
    Ok(())
}
