//! Layout configuration for terminal geometry
//!
//! The numbers here drive every derived shape of an [`IoTerminal`](crate::circuit::IoTerminal).
//! They default to [`constants::layout`](crate::constants::layout) and can be
//! overridden from a JSON file in the platform config directory.

use crate::constants;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Sizes used to lay out a terminal's body, connector line and outlet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Side length of the square body centered on the anchor
    pub body_size: f32,
    /// Side length of the square outlet
    pub outlet_size: f32,
    /// Gap between the body edge and the outlet edge
    pub outlet_line_length: f32,
    /// Stroke width of the connector line
    pub outlet_line_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            body_size: constants::layout::BODY_SIZE,
            outlet_size: constants::layout::OUTLET_SIZE,
            outlet_line_length: constants::layout::OUTLET_LINE_LENGTH,
            outlet_line_width: constants::layout::OUTLET_LINE_WIDTH,
        }
    }
}

impl LayoutConfig {
    /// Distance from the anchor to the outlet center
    pub fn outlet_offset(&self) -> f32 {
        self.outlet_line_length + self.body_size / 2.0 + self.outlet_size / 2.0
    }

    /// Distance from the anchor to the far edge of the outlet
    pub fn outlet_extent(&self) -> f32 {
        self.outlet_offset() + self.outlet_size / 2.0
    }

    /// Width of the terminal measured across its direction
    pub fn cross_extent(&self) -> f32 {
        self.body_size.max(self.outlet_size)
    }

    /// Check that every size is usable for geometry
    pub fn validate(&self) -> Result<(), String> {
        let positive = [("body_size", self.body_size), ("outlet_size", self.outlet_size)];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }

        let non_negative = [
            ("outlet_line_length", self.outlet_line_length),
            ("outlet_line_width", self.outlet_line_width),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be zero or positive, got {}", name, value));
            }
        }

        Ok(())
    }

    /// Parse a layout from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let config: LayoutConfig = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse layout config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a layout from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read layout config: {}", e))?;
        let config = Self::from_json_str(&content)?;
        debug!("Loaded layout config from {}", path.display());
        Ok(config)
    }

    /// Write this layout to a JSON file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize layout config: {}", e))?;

        std::fs::write(path, json).map_err(|e| format!("Failed to write layout config: {}", e))
    }

    /// Location of the user's layout file, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::config::APP_DIR_NAME)
                .join(constants::config::LAYOUT_FILE_NAME)
        })
    }

    /// Load the user's layout file, falling back to defaults when absent or invalid
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_config_path() else {
            return Self::default();
        };

        if !path.exists() {
            debug!("No layout config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }
}
