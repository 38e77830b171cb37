//! Board background, fret lines and string lines.

use super::coords::CoordinateMapper;
use super::nut;
use super::primitives::{Board, FretLine, LineKind, StringLine};
use crate::config::LayoutConfig;
use crate::model::STRING_COUNT;

const BOARD_PADDING: f64 = 5.0;
const BOARD_CORNER_RADIUS: f64 = 4.0;

// Lower strings are drawn thicker.
const STRING_STROKE_BASE: f64 = 3.0;
const STRING_STROKE_STEP: f64 = 0.3;

pub(super) fn board(mapper: &CoordinateMapper, config: &LayoutConfig) -> Board {
    Board {
        x: mapper.left() - BOARD_PADDING,
        y: mapper.top(),
        width: mapper.right() - mapper.left() + 2.0 * BOARD_PADDING,
        height: mapper.fret_line_y(config.visible_frets) - mapper.top(),
        corner_radius: BOARD_CORNER_RADIUS,
    }
}

/// The `visible_frets + 1` horizontal lines, top first.
pub(super) fn fret_lines<'a>(
    starting_fret: u32,
    mapper: &CoordinateMapper,
    config: &'a LayoutConfig,
) -> impl Iterator<Item = FretLine> + 'a {
    let mapper = *mapper;
    (0..=config.visible_frets).map(move |index| {
        let kind = if index == 0 {
            nut::top_line_kind(starting_fret)
        } else {
            LineKind::Fret
        };
        FretLine {
            index,
            y: mapper.fret_line_y(index),
            x1: mapper.left(),
            x2: mapper.right(),
            kind,
            stroke_width: nut::stroke_width(kind, config),
        }
    })
}

pub(super) fn string_lines(
    mapper: &CoordinateMapper,
    config: &LayoutConfig,
) -> impl Iterator<Item = StringLine> {
    let mapper = *mapper;
    let bottom = mapper.fret_line_y(config.visible_frets);
    (0..STRING_COUNT).map(move |string| StringLine {
        string,
        x: mapper.string_x(string),
        y1: mapper.top(),
        y2: bottom,
        stroke_width: STRING_STROKE_BASE - string as f64 * STRING_STROKE_STEP,
    })
}
