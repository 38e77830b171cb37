//! Nut vs. ordinary top line, and the starting-fret label.

use super::coords::CoordinateMapper;
use super::primitives::{LineKind, Point, StartingFretLabel};
use crate::config::LayoutConfig;

/// Baseline nudge so the label text centres on its row.
const LABEL_BASELINE_OFFSET: f64 = 5.0;

/// The top line is the nut only when the window starts at the first fret.
pub fn top_line_kind(starting_fret: u32) -> LineKind {
    if starting_fret == 1 {
        LineKind::Nut
    } else {
        LineKind::Fret
    }
}

pub fn stroke_width(kind: LineKind, config: &LayoutConfig) -> f64 {
    match kind {
        LineKind::Nut => config.nut_stroke,
        LineKind::Fret => config.fret_stroke,
    }
}

/// Label beside the first row naming the window's starting fret.
/// `None` when the top line is the nut.
pub fn starting_fret_label(
    starting_fret: u32,
    mapper: &CoordinateMapper,
    config: &LayoutConfig,
) -> Option<StartingFretLabel> {
    match top_line_kind(starting_fret) {
        LineKind::Nut => None,
        LineKind::Fret => Some(StartingFretLabel {
            fret: starting_fret,
            at: Point::new(config.label_x, mapper.fret_y(1) + LABEL_BASELINE_OFFSET),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nut_only_at_first_fret() {
        assert_eq!(top_line_kind(1), LineKind::Nut);
        assert_eq!(top_line_kind(2), LineKind::Fret);
        assert_eq!(top_line_kind(12), LineKind::Fret);
    }

    #[test]
    fn nut_is_heavier() {
        let config = LayoutConfig::default();
        assert!(stroke_width(LineKind::Nut, &config) > stroke_width(LineKind::Fret, &config));
    }

    #[test]
    fn label_only_away_from_nut() {
        let config = LayoutConfig::default();
        let mapper = CoordinateMapper::new(&config);
        assert!(starting_fret_label(1, &mapper, &config).is_none());

        let label = starting_fret_label(5, &mapper, &config).unwrap();
        assert_eq!(label.fret, 5);
        assert_eq!(label.at, Point::new(10.0, 67.5));
        assert!(label.at.x < mapper.left());
        assert!(label.at.y > mapper.fret_line_y(0) && label.at.y < mapper.fret_line_y(1));
    }
}
