use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file {} does not exist", path.display())]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML configuration in {}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid JSON configuration in {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "failed to parse configuration {}: toml error: {toml_error}; json error: {json_error}",
        path.display()
    )]
    Unrecognized {
        path: PathBuf,
        toml_error: String,
        json_error: String,
    },
    #[error("invalid organization id in {key}")]
    InvalidOrgId {
        key: &'static str,
        #[source]
        source: arbor_model::ModelError,
    },
    #[error("invalid boolean '{value}' in {key}")]
    InvalidFlag { key: &'static str, value: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
