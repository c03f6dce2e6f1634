//! Grid configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! gives the stock 150dp grid.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::length::{Density, Dp, Padding};
use crate::layout::staggered::{ColumnSelection, StaggeredGrid};
use crate::scroll_state::{ScrollState, DEFAULT_WHEEL_LINE_HEIGHT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables for a scrolling staggered grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Upper bound on column width. Larger values mean fewer, wider columns.
    pub max_column_width: Dp,
    /// Space between the container edge and the columns.
    pub padding: Padding,
    /// Device pixels per dp.
    pub density: Density,
    /// Pixels scrolled per wheel line.
    pub wheel_line_height: i32,
    /// Column selection strategy.
    pub selection: ColumnSelection,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_column_width: Dp(150.0),
            padding: Padding::default(),
            density: Density::ONE,
            wheel_line_height: DEFAULT_WHEEL_LINE_HEIGHT,
            selection: ColumnSelection::Linear,
        }
    }
}

impl GridConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!("Loaded grid config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let width = self.max_column_width.0;
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_column_width must be positive, got {width}"
            )));
        }
        if !self.density.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "density must be positive, got {}",
                self.density.0
            )));
        }
        if !self.padding.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "padding sides must be non-negative, got {:?}",
                self.padding
            )));
        }
        if self.wheel_line_height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "wheel_line_height must be positive, got {}",
                self.wheel_line_height
            )));
        }
        Ok(())
    }

    /// Build the grid this config describes.
    pub fn grid(&self) -> StaggeredGrid {
        StaggeredGrid::new(self.max_column_width)
            .density(self.density)
            .padding(self.padding)
            .selection(self.selection)
    }

    /// A fresh scroll state using this config's wheel step.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState::new().with_wheel_line_height(self.wheel_line_height)
    }
}
