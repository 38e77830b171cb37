//! Shared constants for the diagram renderer (all in SVG user units).

// ── Header ──────────────────────────────────────────────────────────
pub(super) const HEADER_HEIGHT: f64 = 64.0; // space for chord name + difficulty badge
pub(super) const TITLE_BASELINE: f64 = 26.0;
pub(super) const TITLE_SIZE: f64 = 22.0;
pub(super) const BADGE_TOP: f64 = 36.0;
pub(super) const BADGE_HEIGHT: f64 = 18.0;
pub(super) const BADGE_CHAR_WIDTH: f64 = 7.0; // rough advance per badge character
pub(super) const BADGE_PADDING: f64 = 10.0;
pub(super) const BADGE_TEXT_SIZE: f64 = 10.0;

// ── Marks ───────────────────────────────────────────────────────────
pub(super) const MUTE_TEXT_SIZE: f64 = 14.0;
pub(super) const OPEN_STROKE: f64 = 2.0;
pub(super) const FINGER_OUTLINE: f64 = 2.0;
pub(super) const FINGER_TEXT_SIZE: f64 = 12.0;
pub(super) const FINGER_TEXT_DROP: f64 = 4.0; // baseline offset to centre digits in the dot
pub(super) const LABEL_TEXT_SIZE: f64 = 14.0;

// ── Difficulty badge colours (fill, text) ───────────────────────────
pub(super) const BEGINNER_COLORS: (&str, &str) = ("#dcfce7", "#166534");
pub(super) const INTERMEDIATE_COLORS: (&str, &str) = ("#fef9c3", "#854d0e");
pub(super) const ADVANCED_COLORS: (&str, &str) = ("#fee2e2", "#991b1b");
