//! Diagram renderer — draws a [`DiagramGeometry`] as SVG.
//!
//! This is a thin presentation adapter: every position comes from the
//! layout engine, the renderer only chooses colours, fonts and element
//! types. The output is a self-contained SVG string that can be shown in
//! any SVG-capable view.

mod constants;
mod svg_builder;

use crate::config::{AppConfig, StyleConfig};
use crate::layout::{layout_diagram, DiagramGeometry, LineKind, Primitive};
use crate::model::{ChordFingering, Difficulty};
use constants::*;
use svg_builder::{empty_svg, SvgBuilder};

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render bare diagram geometry (no title) to SVG.
///
/// `display_width` sets the SVG `width` attribute; the height follows the
/// viewport aspect ratio. Pass `None` to render at viewport size.
pub fn render_geometry_to_svg(
    geometry: &DiagramGeometry,
    style: &StyleConfig,
    display_width: Option<f64>,
) -> String {
    if geometry.primitives.is_empty() {
        return empty_svg("Empty diagram");
    }

    let mut svg =
        SvgBuilder::new(geometry.width, geometry.height).with_display_width(display_width);
    svg.rounded_rect(0.0, 0.0, geometry.width, geometry.height, 0.0, &style.background, 1.0);
    draw_geometry(&mut svg, geometry, style);
    svg.build()
}

/// Lay out `chord` and render it with its name and difficulty above the grid.
pub fn render_chord_to_svg(
    chord: &ChordFingering,
    config: &AppConfig,
    display_width: Option<f64>,
) -> String {
    let geometry = layout_diagram(chord, config.layout());
    render_diagram_to_svg(chord, &geometry, config, display_width)
}

/// Render already laid-out `geometry` for `chord` with its header.
pub fn render_diagram_to_svg(
    chord: &ChordFingering,
    geometry: &DiagramGeometry,
    config: &AppConfig,
    display_width: Option<f64>,
) -> String {
    let style = config.style();
    let total_height = geometry.height + HEADER_HEIGHT;

    let mut svg = SvgBuilder::new(geometry.width, total_height).with_display_width(display_width);
    svg.rounded_rect(0.0, 0.0, geometry.width, total_height, 0.0, &style.background, 1.0);

    render_header(&mut svg, chord, geometry.width, style);

    svg.open_group(0.0, HEADER_HEIGHT);
    draw_geometry(&mut svg, geometry, style);
    svg.close_group();

    svg.build()
}

// ═══════════════════════════════════════════════════════════════════════
// Header rendering
// ═══════════════════════════════════════════════════════════════════════

fn render_header(svg: &mut SvgBuilder, chord: &ChordFingering, width: f64, style: &StyleConfig) {
    let center_x = width / 2.0;
    svg.text(center_x, TITLE_BASELINE, chord.name(), TITLE_SIZE, "bold", &style.title, "middle");

    let label = chord.difficulty().to_string().to_uppercase();
    let (fill, text_color) = difficulty_colors(chord.difficulty());
    let badge_width = label.chars().count() as f64 * BADGE_CHAR_WIDTH + 2.0 * BADGE_PADDING;
    svg.rounded_rect(
        center_x - badge_width / 2.0,
        BADGE_TOP,
        badge_width,
        BADGE_HEIGHT,
        BADGE_HEIGHT / 2.0,
        fill,
        1.0,
    );
    svg.text(
        center_x,
        BADGE_TOP + BADGE_HEIGHT / 2.0 + BADGE_TEXT_SIZE / 2.0 - 1.0,
        &label,
        BADGE_TEXT_SIZE,
        "bold",
        text_color,
        "middle",
    );
}

fn difficulty_colors(difficulty: Difficulty) -> (&'static str, &'static str) {
    match difficulty {
        Difficulty::Beginner => BEGINNER_COLORS,
        Difficulty::Intermediate => INTERMEDIATE_COLORS,
        Difficulty::Advanced => ADVANCED_COLORS,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Primitive rendering
// ═══════════════════════════════════════════════════════════════════════

fn draw_geometry(svg: &mut SvgBuilder, geometry: &DiagramGeometry, style: &StyleConfig) {
    for primitive in &geometry.primitives {
        match primitive {
            Primitive::Board(board) => {
                svg.rounded_rect(
                    board.x,
                    board.y,
                    board.width,
                    board.height,
                    board.corner_radius,
                    &style.board,
                    1.0,
                );
            }
            Primitive::FretLine(line) => {
                let color = match line.kind {
                    LineKind::Nut => &style.nut,
                    LineKind::Fret => &style.fret,
                };
                svg.line(line.x1, line.y, line.x2, line.y, color, line.stroke_width);
            }
            Primitive::StringLine(line) => {
                svg.line(line.x, line.y1, line.x, line.y2, &style.string, line.stroke_width);
            }
            Primitive::StartingFretLabel(label) => {
                svg.text(
                    label.at.x,
                    label.at.y,
                    &label.text(),
                    LABEL_TEXT_SIZE,
                    "bold",
                    &style.label,
                    "start",
                );
            }
            Primitive::Barre(rect) => {
                svg.rounded_rect(
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    rect.corner_radius,
                    &style.barre,
                    style.barre_opacity,
                );
            }
            Primitive::MuteMark(mark) => {
                svg.text(mark.at.x, mark.at.y, "X", MUTE_TEXT_SIZE, "bold", &style.mute, "middle");
            }
            Primitive::OpenMark(mark) => {
                svg.circle(
                    mark.center.x,
                    mark.center.y,
                    mark.radius,
                    "none",
                    &style.open,
                    OPEN_STROKE,
                );
            }
            Primitive::FingerMark(mark) => {
                svg.circle(
                    mark.center.x,
                    mark.center.y,
                    mark.radius,
                    &style.finger,
                    &style.finger_outline,
                    FINGER_OUTLINE,
                );
                if !mark.label.is_empty() {
                    svg.text(
                        mark.center.x,
                        mark.center.y + FINGER_TEXT_DROP,
                        mark.label.text(),
                        FINGER_TEXT_SIZE,
                        "bold",
                        &style.finger_label,
                        "middle",
                    );
                }
            }
        }
    }
}
