//! Defaults and environment variable names.

use arbor_model::OrgId;
use uuid::uuid;

/// Organization used when neither configuration nor the command line
/// names one.
pub const DEFAULT_ORG_ID: OrgId =
    OrgId::from_uuid(uuid!("c1556e17-b7c0-45a3-a6ae-9546248fb17a"));

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Files probed, in order, when no explicit configuration is given.
pub const DEFAULT_CONFIG_LOCATIONS: &[&str] =
    &["arbor.toml", "arbor.json", "config/arbor.toml"];

pub const ENV_CONFIG_PATH: &str = "ARBOR_CONFIG_PATH";
pub const ENV_CONFIG_JSON: &str = "ARBOR_CONFIG_JSON";
pub const ENV_DATA_FILE: &str = "ARBOR_DATA_FILE";
pub const ENV_OUTPUT_FILE: &str = "ARBOR_OUTPUT_FILE";
pub const ENV_DEFAULT_ORG: &str = "ARBOR_DEFAULT_ORG";
pub const ENV_STRICT: &str = "ARBOR_STRICT";
pub const ENV_LOG_LEVEL: &str = "ARBOR_LOG";
