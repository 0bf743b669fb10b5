//! # beacon-config
//!
//! Layered configuration loading for Beacon using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BEACON_*` prefix, `__` as separator)
//! 2. Project-level `.beacon/config.toml`
//! 3. User-level `~/.config/beacon/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BEACON_CAPTURE__OVERWRITE_POLICY` -> `capture.overwrite_policy`,
//! `BEACON_ANNOTATE__FIELD_PROFILE` -> `annotate.field_profile`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use beacon_config::BeaconConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = BeaconConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = BeaconConfig::load().expect("config");
//!
//! println!("overwrite policy: {}", config.capture.overwrite_policy);
//! ```

mod annotate;
mod capture;
mod error;

pub use annotate::AnnotateConfig;
pub use capture::CaptureConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BeaconConfig {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub annotate: AnnotateConfig,
}

impl BeaconConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`BEACON_*` prefix)
    /// 2. `.beacon/config.toml` (project-local)
    /// 3. `~/.config/beacon/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any layer fails to merge or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any layer fails to merge or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".beacon/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("BEACON_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("beacon").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 2 levels (crate -> crates/ -> workspace root)
            for _ in 0..2 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}
