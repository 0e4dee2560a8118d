//! Configuration schema types for `tilepaint.toml`
//!
//! Defines the structure and validation rules for editor configuration.

use serde::{Deserialize, Serialize};

use crate::catalog::AssetCatalog;
use crate::editor::DEFAULT_EXPORT_FILE_NAME;
use crate::models::{Asset, GridSize, Level, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Log levels accepted by `[log] level`
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Default map settings for new maps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Width of a new map in tiles
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height of a new map in tiles
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { width: default_width(), height: default_height() }
    }
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// File name offered for exported documents
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { file_name: default_file_name() }
    }
}

fn default_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// An extra (or overriding) catalog asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Asset id used in map documents
    pub id: String,
    /// Level number: 1 = ground, 2 = decoration
    pub level: u8,
    /// Palette label (defaults to the id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Image reference (defaults to `/assets/{id}.png`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl AssetConfig {
    /// Convert to a catalog asset. `None` if the level is invalid.
    pub fn to_asset(&self) -> Option<Asset> {
        let level = Level::from_number(self.level).ok()?;
        let label = self.label.clone().unwrap_or_else(|| self.id.clone());
        let image = self.image.clone().unwrap_or_else(|| format!("/assets/{}.png", self.id));
        Some(Asset::new(self.id.as_str(), level, label, image))
    }
}

/// Complete `tilepaint.toml` configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TilepaintConfig {
    /// New-map defaults
    #[serde(default)]
    pub map: MapConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
    /// Additional catalog assets, registered after the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<AssetConfig>,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "assets[0].level")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tilepaint.toml: '{}' {}", self.field, self.message)
    }
}

impl TilepaintConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.map.width == 0 {
            errors.push(ConfigValidationError {
                field: "map.width".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }
        if self.map.height == 0 {
            errors.push(ConfigValidationError {
                field: "map.height".to_string(),
                message: "must be a positive integer".to_string(),
            });
        }

        if self.export.file_name.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "export.file_name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.log.level.to_ascii_lowercase().as_str()) {
            errors.push(ConfigValidationError {
                field: "log.level".to_string(),
                message: format!("must be one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        for (i, asset) in self.assets.iter().enumerate() {
            if asset.id.trim().is_empty() {
                errors.push(ConfigValidationError {
                    field: format!("assets[{}].id", i),
                    message: "must be a non-empty string".to_string(),
                });
            }
            if Level::from_number(asset.level).is_err() {
                errors.push(ConfigValidationError {
                    field: format!("assets[{}].level", i),
                    message: "must be 1 (ground) or 2 (decoration)".to_string(),
                });
            }
        }

        errors
    }

    /// Size of newly created maps
    pub fn default_size(&self) -> GridSize {
        GridSize::new(self.map.width, self.map.height)
    }

    /// The built-in catalog extended with the configured assets
    pub fn catalog(&self) -> AssetCatalog {
        let mut catalog = AssetCatalog::builtin();
        for asset in self.assets.iter().filter_map(AssetConfig::to_asset) {
            catalog.register(asset);
        }
        catalog
    }
}
