use std::path::PathBuf;

use arbor_core::sample::SampleSpec;
use arbor_model::OrgId;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_ORG_ID};
use crate::loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};

fn default_org() -> OrgId {
    DEFAULT_ORG_ID
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Resolved Arbor settings. Every field has a default, so a configuration
/// file only needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArborConfig {
    /// JSON folder collection loaded by commands that operate on a store.
    /// A relative path read from a configuration file is resolved against
    /// that file's directory; anywhere else it is relative to the working
    /// directory.
    pub data_file: Option<PathBuf>,
    /// Where commands write the resulting collection, if anywhere. Resolved
    /// like `data_file`.
    pub output_file: Option<PathBuf>,
    /// Organization assumed when a command is not given one.
    #[serde(default = "default_org")]
    pub default_org: OrgId,
    /// Reject collections with duplicate names, orphaned folders or
    /// inconsistent paths at load time.
    pub strict: bool,
    /// Fallback log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Shape of data produced by `arborctl generate`.
    pub sample: SampleSpec,
}

impl Default for ArborConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            output_file: None,
            default_org: DEFAULT_ORG_ID,
            strict: false,
            log_level: default_log_level(),
            sample: SampleSpec::default(),
        }
    }
}

impl ArborConfig {
    /// Resolve configuration the way `arborctl` does with no `--config`:
    /// `.env`, then `ARBOR_*` variables and default file locations.
    pub fn load_from_env() -> Result<ConfigLoad, ConfigLoadError> {
        ConfigLoader::new().load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ArborConfig = toml::from_str("strict = true\n").unwrap();
        assert!(config.strict);
        assert_eq!(config.default_org, DEFAULT_ORG_ID);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.sample, SampleSpec::default());
    }

    #[test]
    fn nested_sample_table() {
        let raw = "[sample]\norgs = 1\nmax_depth = 5\n";
        let config: ArborConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.sample.orgs, 1);
        assert_eq!(config.sample.max_depth, 5);
        assert_eq!(config.sample.roots_per_org, SampleSpec::default().roots_per_org);
    }
}
