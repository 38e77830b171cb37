//! Configuration for diagram layout and SVG styling.
//!
//! Every type implements [`serde::Deserialize`] with per-field defaults, so
//! a TOML file only needs to name the values it overrides:
//!
//! ```
//! # use chordlib::config::AppConfig;
//! let config = AppConfig::from_toml_str("[layout]\nvisible_frets = 4\n").unwrap();
//! assert_eq!(config.layout().visible_frets, 4);
//! assert_eq!(config.layout().string_spacing, 30.0);
//! ```

use std::{fs, path::Path};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::error::ChordError;
use crate::model::STRING_COUNT;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

// ═══════════════════════════════════════════════════════════════════════
// AppConfig
// ═══════════════════════════════════════════════════════════════════════

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(source)?;
        config.layout.validate()?;
        Ok(config)
    }
}

/// Load an [`AppConfig`] from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// describes an unusable layout.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ChordError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading configuration");
    let source = fs::read_to_string(path)?;
    Ok(AppConfig::from_toml_str(&source)?)
}

// ═══════════════════════════════════════════════════════════════════════
// LayoutConfig
// ═══════════════════════════════════════════════════════════════════════

/// Geometry of the diagram viewport, in SVG user units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Viewport width
    pub width: f64,
    /// Viewport height
    pub height: f64,
    /// X of the lowest string
    pub margin_x: f64,
    /// Y of the top (nut) line
    pub margin_y: f64,
    /// Horizontal distance between adjacent strings
    pub string_spacing: f64,
    /// Vertical distance between adjacent fret lines
    pub fret_spacing: f64,
    /// Number of fret rows shown in the window
    pub visible_frets: u32,
    pub finger_radius: f64,
    pub open_radius: f64,
    /// How far above the nut line mute marks sit
    pub mute_offset: f64,
    /// How far above the nut line open marks sit
    pub open_offset: f64,
    pub barre_height: f64,
    pub nut_stroke: f64,
    pub fret_stroke: f64,
    /// X of the starting-fret label
    pub label_x: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 220.0,
            height: 280.0,
            margin_x: 35.0,
            margin_y: 40.0,
            string_spacing: 30.0,
            fret_spacing: 45.0,
            visible_frets: 5,
            finger_radius: 11.0,
            open_radius: 5.0,
            mute_offset: 10.0,
            open_offset: 15.0,
            barre_height: 24.0,
            nut_stroke: 6.0,
            fret_stroke: 2.0,
            label_x: 10.0,
        }
    }
}

/// Most fret rows a diagram may show.
pub const MAX_VISIBLE_FRETS: u32 = 24;

impl LayoutConfig {
    /// Reject settings that would break the coordinate mapping or push the
    /// grid outside the `width` x `height` viewport.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_VISIBLE_FRETS).contains(&self.visible_frets) {
            return Err(ConfigError::Validation(format!(
                "visible_frets must be between 1 and {MAX_VISIBLE_FRETS}, got {}",
                self.visible_frets
            )));
        }
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("string_spacing", self.string_spacing),
            ("fret_spacing", self.fret_spacing),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        let non_negative = [
            ("margin_x", self.margin_x),
            ("margin_y", self.margin_y),
            ("finger_radius", self.finger_radius),
            ("open_radius", self.open_radius),
            ("barre_height", self.barre_height),
            ("nut_stroke", self.nut_stroke),
            ("fret_stroke", self.fret_stroke),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Validation(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        let grid_right = self.margin_x + (STRING_COUNT - 1) as f64 * self.string_spacing;
        if grid_right > self.width {
            return Err(ConfigError::Validation(format!(
                "strings end at x = {grid_right}, past width {}",
                self.width
            )));
        }
        let grid_bottom = self.margin_y + f64::from(self.visible_frets) * self.fret_spacing;
        if grid_bottom > self.height {
            return Err(ConfigError::Validation(format!(
                "{} fret rows end at y = {grid_bottom}, past height {}",
                self.visible_frets, self.height
            )));
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// StyleConfig
// ═══════════════════════════════════════════════════════════════════════

/// Colours used by the SVG renderer. Any CSS colour string is accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub background: String,
    pub board: String,
    pub nut: String,
    pub fret: String,
    pub string: String,
    pub mute: String,
    pub open: String,
    pub finger: String,
    pub finger_outline: String,
    pub finger_label: String,
    pub barre: String,
    pub barre_opacity: f64,
    pub label: String,
    pub title: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "white".into(),
            board: "#fbf7f3".into(),
            nut: "#333333".into(),
            fret: "#aaaaaa".into(),
            string: "#555555".into(),
            mute: "#ef4444".into(),
            open: "#333333".into(),
            finger: "#222222".into(),
            finger_outline: "#ffffff".into(),
            finger_label: "#ffffff".into(),
            barre: "#c47f53".into(),
            barre_opacity: 0.9,
            label: "#475569".into(),
            title: "#1e293b".into(),
        }
    }
}
