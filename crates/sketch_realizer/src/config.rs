//! Layered application configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from sketch_realizer.toml)
//! - `~/.config/sketch_realizer/sketch_realizer.toml`
//! - `./sketch_realizer.toml`
//! - An explicit `--config` file, when given
//! - `SKETCH_` environment variables, e.g. `SKETCH_SERVER__BIND`
//!
//! `OPENAI_API_KEY` is applied last and overrides any configured key.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use sketch_error::{ConfigError, SketchError, SketchResult};
use sketch_models::OpenAiConfig;
use std::path::Path;
use tracing::{debug, instrument};

/// Environment variable holding the OpenAI API key.
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Form server settings from the `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Listen address
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Largest accepted request body in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind() -> String {
    "127.0.0.1:8501".to_string()
}

fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Complete application configuration.
///
/// # Example
///
/// ```toml
/// [openai]
/// base_url = "https://api.openai.com/v1"
/// vision_model = "gpt-4-vision-preview"
/// image_model = "dall-e-3"
///
/// [server]
/// bind = "127.0.0.1:8501"
/// max_upload_bytes = 20_971_520
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealizerConfig {
    /// OpenAI connection settings
    #[serde(default)]
    pub openai: OpenAiConfig,
    /// Form server settings
    #[serde(default)]
    pub server: ServerSettings,
}

impl RealizerConfig {
    /// Load configuration from a single TOML file.
    ///
    /// No other layer and no environment variable is consulted.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SketchResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                SketchError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SketchError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration from the default layers.
    pub fn load() -> SketchResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration from the default layers plus an optional explicit
    /// file, which takes precedence over every other file.
    pub fn load_from(explicit: Option<&Path>) -> SketchResult<Self> {
        let config = Self::layered(explicit, environment())?;
        Ok(config.with_credential(std::env::var(API_KEY_VAR).ok()))
    }

    #[instrument(skip_all)]
    fn layered(explicit: Option<&Path>, environment: Environment) -> SketchResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../sketch_realizer.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/sketch_realizer/sketch_realizer.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("sketch_realizer").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(environment);

        builder
            .build()
            .map_err(|e| {
                SketchError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SketchError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Replace the configured API key with `key` when it is present and
    /// not blank.
    pub fn with_credential(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from {}", API_KEY_VAR);
            self.openai.api_key = Some(key);
        }
        self
    }
}

/// `SKETCH_` variables, with `__` between section and key.
fn environment() -> Environment {
    Environment::with_prefix("SKETCH")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
