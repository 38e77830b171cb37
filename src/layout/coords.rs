//! Logical string/fret positions → viewport coordinates.

use crate::config::LayoutConfig;
use crate::model::STRING_COUNT;

/// Affine mapping from string indices and window rows to coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    margin_x: f64,
    margin_y: f64,
    string_spacing: f64,
    fret_spacing: f64,
}

impl CoordinateMapper {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            margin_x: config.margin_x,
            margin_y: config.margin_y,
            string_spacing: config.string_spacing,
            fret_spacing: config.fret_spacing,
        }
    }

    /// X of a string; index 0 (lowest string) is leftmost.
    pub fn string_x(&self, string: usize) -> f64 {
        self.margin_x + string as f64 * self.string_spacing
    }

    /// Vertical centre of window row `relative_fret` (1 = top row).
    pub fn fret_y(&self, relative_fret: u32) -> f64 {
        self.margin_y + (relative_fret as f64 - 0.5) * self.fret_spacing
    }

    /// Y of horizontal line `line`; line 0 is the top of the window.
    pub fn fret_line_y(&self, line: u32) -> f64 {
        self.margin_y + line as f64 * self.fret_spacing
    }

    /// Left edge of the grid.
    pub fn left(&self) -> f64 {
        self.string_x(0)
    }

    /// Right edge of the grid.
    pub fn right(&self) -> f64 {
        self.string_x(STRING_COUNT - 1)
    }

    /// Y of the top line (the nut when the window starts at fret 1).
    pub fn top(&self) -> f64 {
        self.margin_y
    }
}
