//! Site configuration module.
//!
//! Handles loading, validating, and merging the optional `config.toml` that
//! lives in the recipes directory. Stock defaults reproduce the tool's fixed
//! behaviour, so a recipes folder without a config file builds exactly as
//! before.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_title = "Recipes"          # Landing page heading and <title>
//! skip = ["All Tags.recipe"]      # Entry names ignored by the scanner
//!
//! [photos]
//! dir = "Photos"                  # Photo subdirectory inside a package
//! extension = "webp"              # Image references rewritten in packages
//!
//! [asset_build]
//! enabled = true                  # Run the search asset build first
//! command = ["npm", "run", "build"]
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [asset_build]
//! enabled = false
//! ```
//!
//! Unknown keys are rejected to catch typos early.

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
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Heading and document title of the landing page.
    pub site_title: String,
    /// Entry names in the recipes directory that are never treated as recipes.
    pub skip: Vec<String>,
    /// Photo conventions for recipe packages.
    pub photos: PhotosConfig,
    /// External build step producing the client-side search assets.
    pub asset_build: AssetBuildConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Recipes".to_string(),
            skip: vec!["All Tags.recipe".to_string()],
            photos: PhotosConfig::default(),
            asset_build: AssetBuildConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.asset_build.enabled && self.asset_build.command.is_empty() {
            return Err(ConfigError::Validation(
                "asset_build.command must not be empty when asset_build.enabled".into(),
            ));
        }
        if self.photos.dir.is_empty() || self.photos.dir.contains('/') {
            return Err(ConfigError::Validation(
                "photos.dir must be a single non-empty directory name".into(),
            ));
        }
        if self.photos.extension.is_empty()
            || self.photos.extension.contains('/')
            || self.photos.extension.starts_with('.')
        {
            return Err(ConfigError::Validation(
                "photos.extension must be a bare extension like \"webp\"".into(),
            ));
        }
        Ok(())
    }
}

/// Photo conventions inside a `.recipepackage` directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhotosConfig {
    /// Name of the photo subdirectory, both in the package and in the output.
    pub dir: String,
    /// Extension (without dot) of image references rewritten into `dir`.
    pub extension: String,
}

impl Default for PhotosConfig {
    fn default() -> Self {
        Self {
            dir: "Photos".to_string(),
            extension: "webp".to_string(),
        }
    }
}

/// External asset build invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetBuildConfig {
    /// Whether to run the command at all.
    pub enabled: bool,
    /// Program followed by its arguments.
    pub command: Vec<String>,
}

impl Default for AssetBuildConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: vec!["npm".to_string(), "run".to_string(), "build".to_string()],
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the recipes directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(stock_defaults_value()?, overlay),
        None => stock_defaults_value()?,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    log::debug!("loaded config from {}: {:?}", dir.display(), config);
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Recipe Site Configuration
# =========================
# Place this file in the recipes directory. All settings are optional;
# values shown below are the defaults. Unknown keys cause an error.

# Heading and <title> of the landing page.
site_title = "Recipes"

# Entries in the recipes directory that are never built as recipes.
skip = ["All Tags.recipe"]

# ---------------------------------------------------------------------------
# Recipe packages
# ---------------------------------------------------------------------------
[photos]
# Photo subdirectory inside a .recipepackage, copied next to the page.
dir = "Photos"

# Bare image references with this extension (e.g. ![](dish.webp)) are
# rewritten to point into the photo directory.
extension = "webp"

# ---------------------------------------------------------------------------
# Search asset build
# ---------------------------------------------------------------------------
[asset_build]
# Run the external build step before writing any output.
enabled = true

# Program and arguments. A non-zero exit aborts the build.
command = ["npm", "run", "build"]
"##
}
