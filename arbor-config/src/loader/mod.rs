pub mod error;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::constants::{
    DEFAULT_CONFIG_LOCATIONS, ENV_CONFIG_JSON, ENV_CONFIG_PATH, ENV_DATA_FILE,
    ENV_DEFAULT_ORG, ENV_LOG_LEVEL, ENV_OUTPUT_FILE, ENV_STRICT,
};
use crate::models::ArborConfig;
use error::ConfigLoadError;

/// Where the base configuration (before environment overrides) came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    /// Configuration file named on the command line; must exist.
    pub config_path: Option<PathBuf>,
    /// `.env` file to read instead of `./.env`.
    pub env_file: Option<PathBuf>,
    /// Directory searched for the default configuration locations.
    pub search_dir: Option<PathBuf>,
}

/// Raw `ARBOR_*` environment values, captured once so resolution is
/// independent of the process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
    pub data_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub default_org: Option<String>,
    pub strict: Option<String>,
    pub log_level: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            config_path: get(ENV_CONFIG_PATH).map(PathBuf::from),
            config_json: get(ENV_CONFIG_JSON),
            data_file: get(ENV_DATA_FILE).map(PathBuf::from),
            output_file: get(ENV_OUTPUT_FILE).map(PathBuf::from),
            default_org: get(ENV_DEFAULT_ORG),
            strict: get(ENV_STRICT),
            log_level: get(ENV_LOG_LEVEL),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ArborConfig,
    pub source: ConfigSource,
    pub env_file_loaded: bool,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_search_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.options.search_dir = Some(dir.into());
        self
    }

    /// Load `.env` into the process environment, then resolve configuration
    /// from the environment and files.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?,
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve configuration from already captured environment values.
    ///
    /// Base configuration, first match wins:
    /// 1) the explicit config path from the options,
    /// 2) `$ARBOR_CONFIG_PATH` (TOML or JSON file),
    /// 3) `$ARBOR_CONFIG_JSON` (inline JSON),
    /// 4) the first existing default location,
    /// 5) defaults.
    ///
    /// Individual `ARBOR_*` variables are applied on top.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (mut config, source) = self.load_base(&env)?;
        apply_env_overrides(&mut config, &env)?;

        debug!(?source, "resolved configuration");
        Ok(ConfigLoad {
            config,
            source,
            env_file_loaded: false,
        })
    }

    fn load_base(
        &self,
        env: &EnvConfig,
    ) -> Result<(ArborConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            let mut config = load_required_file(path)?;
            anchor_relative_paths(&mut config, path);
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = &env.config_path {
            let mut config = load_required_file(path)?;
            anchor_relative_paths(&mut config, path);
            return Ok((config, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let config = serde_json::from_str(raw).map_err(|source| {
                ConfigLoadError::Json {
                    origin: ENV_CONFIG_JSON.to_string(),
                    source,
                }
            })?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let mut config = load_file(&path)?;
            anchor_relative_paths(&mut config, &path);
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((ArborConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let base = self.options.search_dir.as_deref().unwrap_or(Path::new(""));
        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| base.join(candidate))
            .find(|candidate| candidate.is_file())
    }
}

fn load_required_file(path: &Path) -> Result<ArborConfig, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    load_file(path)
}

/// Parse a configuration file by extension; unknown extensions try TOML
/// first, then JSON.
pub fn load_file(path: &Path) -> Result<ArborConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|source| {
            ConfigLoadError::Json {
                origin: path.display().to_string(),
                source,
            }
        }),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|source| ConfigLoadError::Toml {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => toml::from_str(&contents).or_else(|toml_err| {
            serde_json::from_str(&contents).map_err(|json_err| {
                ConfigLoadError::Unrecognized {
                    path: path.to_path_buf(),
                    toml_error: toml_err.to_string(),
                    json_error: json_err.to_string(),
                }
            })
        }),
    }
}

/// Relative file paths in a configuration file are taken relative to the
/// directory holding that file.
fn anchor_relative_paths(config: &mut ArborConfig, config_file: &Path) {
    let Some(base) = config_file.parent() else {
        return;
    };
    for slot in [&mut config.data_file, &mut config.output_file] {
        if let Some(path) = slot
            && path.is_relative()
        {
            *path = base.join(&*path);
        }
    }
}

fn apply_env_overrides(
    config: &mut ArborConfig,
    env: &EnvConfig,
) -> Result<(), ConfigLoadError> {
    if let Some(path) = &env.data_file {
        config.data_file = Some(path.clone());
    }
    if let Some(path) = &env.output_file {
        config.output_file = Some(path.clone());
    }
    if let Some(raw) = &env.default_org {
        config.default_org = raw.parse().map_err(|source| {
            ConfigLoadError::InvalidOrgId {
                key: ENV_DEFAULT_ORG,
                source,
            }
        })?;
    }
    if let Some(raw) = &env.strict {
        config.strict = parse_flag(ENV_STRICT, raw)?;
    }
    if let Some(level) = &env.log_level {
        config.log_level = level.clone();
    }
    Ok(())
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigLoadError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigLoadError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        for raw in ["1", "true", "YES", " on "] {
            assert!(parse_flag(ENV_STRICT, raw).unwrap());
        }
        for raw in ["0", "false", "No", "off"] {
            assert!(!parse_flag(ENV_STRICT, raw).unwrap());
        }
        assert!(parse_flag(ENV_STRICT, "maybe").is_err());
    }

    #[test]
    fn blank_env_values_are_unset() {
        let env = EnvConfig::from_lookup(|key| match key {
            ENV_DATA_FILE => Some("   ".to_string()),
            ENV_STRICT => Some("true".to_string()),
            _ => None,
        });
        assert!(env.data_file.is_none());
        assert_eq!(env.strict.as_deref(), Some("true"));
    }
}
