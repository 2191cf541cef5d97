//! Shared configuration library for Arbor.
//!
//! This crate centralizes config defaults, file discovery, `.env` loading
//! and environment overrides so the `arborctl` binary and any embedding
//! application resolve settings the same way.

pub mod constants;
pub mod loader;
pub mod models;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigSource, EnvConfig,
    error::ConfigLoadError,
};
pub use models::ArborConfig;
