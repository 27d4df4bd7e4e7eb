//! Configuration and settings management for VectorKit
//!
//! Provides the snap filter settings and the editor configuration file that
//! aggregates them. Supports JSON and TOML file formats stored in the
//! platform-specific configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Grid snapping (grid size, axes, guides)
//! - Line snapping (modes, targets, threshold, guides)
//! - History (undo depth)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use vectorkit_core::{DEFAULT_GRID_SIZE, DEFAULT_HISTORY_DEPTH, DEFAULT_SNAP_THRESHOLD};

use crate::error::{SettingsError, SettingsResult};
use crate::flags::{GridSnapMode, LineSnapMode, LineSnapTarget};

/// Stroke used to draw guide lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color as `#AARRGGBB` or `#RRGGBB`
    pub stroke: String,
    /// Stroke thickness in drawing units
    pub thickness: f64,
    /// Draw the stroke dashed
    pub dashed: bool,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            stroke: "#FF00FFFF".to_string(),
            thickness: 1.0,
            dashed: true,
        }
    }
}

/// Grid snap filter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSnapSettings {
    /// Snap to the grid at all
    pub is_enabled: bool,
    /// Emit guide lines through the snapped position
    pub enable_guides: bool,
    /// Axes to round
    pub mode: GridSnapMode,
    /// Horizontal grid cell size
    pub grid_size_x: f64,
    /// Vertical grid cell size
    pub grid_size_y: f64,
    /// Guide line style
    pub guide_style: StrokeStyle,
}

impl Default for GridSnapSettings {
    fn default() -> Self {
        Self {
            is_enabled: true,
            enable_guides: false,
            mode: GridSnapMode::ALL,
            grid_size_x: DEFAULT_GRID_SIZE,
            grid_size_y: DEFAULT_GRID_SIZE,
            guide_style: StrokeStyle::default(),
        }
    }
}

impl GridSnapSettings {
    /// Validate grid settings
    pub fn validate(&self) -> SettingsResult<()> {
        if self.grid_size_x.is_nan() || self.grid_size_x <= 0.0 {
            return Err(SettingsError::invalid("grid.grid_size_x", "must be > 0"));
        }
        if self.grid_size_y.is_nan() || self.grid_size_y <= 0.0 {
            return Err(SettingsError::invalid("grid.grid_size_y", "must be > 0"));
        }
        Ok(())
    }
}

/// Line snap filter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSnapSettings {
    /// Snap to lines at all
    pub is_enabled: bool,
    /// Emit guide lines through the snapped position
    pub enable_guides: bool,
    /// Strategies to try, in priority order
    pub mode: LineSnapMode,
    /// Line sets to consider
    pub target: LineSnapTarget,
    /// Maximum distance from the pointer for a candidate to match
    pub threshold: f64,
    /// Guide line style
    pub guide_style: StrokeStyle,
}

impl Default for LineSnapSettings {
    fn default() -> Self {
        Self {
            is_enabled: true,
            enable_guides: false,
            mode: LineSnapMode::ALL,
            target: LineSnapTarget::ALL,
            threshold: DEFAULT_SNAP_THRESHOLD,
            guide_style: StrokeStyle::default(),
        }
    }
}

impl LineSnapSettings {
    /// Validate line snap settings
    pub fn validate(&self) -> SettingsResult<()> {
        if self.threshold.is_nan() || self.threshold < 0.0 {
            return Err(SettingsError::invalid("line.threshold", "must be >= 0"));
        }
        Ok(())
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of undo steps kept
    pub history_depth: usize,
    /// Grid snapping
    pub grid: GridSnapSettings,
    /// Line snapping
    pub line: LineSnapSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_depth: DEFAULT_HISTORY_DEPTH,
            grid: GridSnapSettings::default(),
            line: LineSnapSettings::default(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vectorkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.grid.validate()?;
        self.line.validate()?;

        if self.history_depth == 0 {
            return Err(SettingsError::invalid("history_depth", "must be > 0"));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
