use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;

use crate::domain::SimplificationLevel;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub models: ModelsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    /// Level used when the caller does not pick one
    #[serde(default)]
    pub simplification_level: SimplificationLevel,
}

/// Inference endpoints backing the optional capabilities.
///
/// An endpoint left out runs that capability in degraded mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelsConfig {
    pub classifier: Option<ModelEndpointConfig>,
    pub paraphraser: Option<ModelEndpointConfig>,
    pub entities: Option<ModelEndpointConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelEndpointConfig {
    pub base_url: String,
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Send a one-token request when the capability is first loaded
    #[serde(default = "default_probe")]
    pub probe: bool,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_probe() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(
            config::Config::builder()
                .add_source(config::File::with_name("config/default").required(false))
                .add_source(config::File::with_name("config/local").required(false))
                .add_source(
                    config::Environment::with_prefix("APP")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    /// Load configuration, or defaults when it cannot be read.
    ///
    /// The error is handed back so it can be reported once logging is up.
    pub fn load_or_default() -> (Self, Option<config::ConfigError>) {
        Self::or_default(Self::load())
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }

    fn or_default(loaded: Result<Self, config::ConfigError>) -> (Self, Option<config::ConfigError>) {
        match loaded {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
