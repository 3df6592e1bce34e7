//! Plugin options and their resolution.
//!
//! The host hands every hook a partial [`PluginOptions`] — whatever the user
//! wrote in their site configuration, which may be nothing at all. Each hook
//! resolves it to a full [`Config`] via [`PluginOptions::resolve`] before
//! doing any work, so defaults are applied in exactly one place and the
//! resolved values are immutable for the duration of the call.
//!
//! ## Recognized options
//!
//! ```toml
//! # docs.toml — all options are optional, defaults shown
//!
//! content_path = "docs"   # directory scanned for source documents,
//!                         # relative to the project root
//! base_path = ""          # URL prefix prepended to every derived page path
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! Options can also be loaded from a `docs.toml` at the project root via
//! [`PluginOptions::load`]; a missing file means "no overrides".

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Name of the options file looked up in the project root.
const OPTIONS_FILENAME: &str = "docs.toml";

/// Default content directory, relative to the project root.
pub const DEFAULT_CONTENT_PATH: &str = "docs";

/// Partial, user-supplied plugin options.
///
/// Every field is optional; absent fields fall back to defaults during
/// [`resolve`](PluginOptions::resolve). Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginOptions {
    /// Directory scanned for source documents, relative to the project root.
    pub content_path: Option<String>,
    /// URL path prefix prepended to all derived page paths.
    pub base_path: Option<String>,
}

/// Fully-resolved plugin configuration.
///
/// Produced by [`PluginOptions::resolve`]; never constructed with missing
/// fields, so downstream code carries no `Option` handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub content_path: String,
    pub base_path: String,
}

impl PluginOptions {
    /// Resolve partial options to a full [`Config`].
    ///
    /// Pure: same options in, same config out. Defaults are
    /// [`DEFAULT_CONTENT_PATH`] and an empty base path (site root).
    pub fn resolve(&self) -> Config {
        Config {
            content_path: self
                .content_path
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTENT_PATH.to_string()),
            base_path: self.base_path.clone().unwrap_or_default(),
        }
    }

    /// Load options from `docs.toml` in the given directory.
    ///
    /// Returns default (empty) options if the file doesn't exist.
    /// Returns `Err` if the file exists but contains invalid TOML or
    /// unrecognized keys.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let path = project_root.join(OPTIONS_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let options = toml::from_str(&content)?;
        Ok(options)
    }
}
