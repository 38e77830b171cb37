//! Diagram layout — converts a validated chord into positioned primitives.
//!
//! The pipeline is a single pure pass: grid lines, the optional
//! starting-fret label and barre, then one mark per string. Nothing here
//! draws; [`crate::renderer`] turns the result into SVG.

pub mod annotations;
pub mod barre;
pub mod coords;
mod grid;
pub mod nut;
pub mod primitives;
pub mod window;

use log::trace;

use crate::config::LayoutConfig;
use crate::model::{ChordFingering, STRING_COUNT};
use coords::CoordinateMapper;
use window::FretWindow;

pub use primitives::*;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Lay out `chord` inside the viewport described by `config`.
///
/// Deterministic: the same chord and config always give the same geometry.
/// Fretted notes and barres outside the window are left out.
pub fn layout_diagram(chord: &ChordFingering, config: &LayoutConfig) -> DiagramGeometry {
    let mapper = CoordinateMapper::new(config);
    let window = FretWindow::new(chord.starting_fret(), config.visible_frets);

    let mut primitives =
        Vec::with_capacity(config.visible_frets as usize + 2 * STRING_COUNT + 4);

    primitives.push(Primitive::Board(grid::board(&mapper, config)));
    primitives.extend(
        grid::fret_lines(chord.starting_fret(), &mapper, config).map(Primitive::FretLine),
    );
    primitives.extend(grid::string_lines(&mapper, config).map(Primitive::StringLine));

    if let Some(label) = nut::starting_fret_label(chord.starting_fret(), &mapper, config) {
        primitives.push(Primitive::StartingFretLabel(label));
    }

    if let Some(rect) = chord
        .barre()
        .and_then(|b| barre::barre_rect(b, &window, &mapper, config))
    {
        primitives.push(Primitive::Barre(rect));
    }

    primitives.extend(annotations::annotate_strings(chord, &window, &mapper, config));

    trace!(
        chord = chord.name(),
        primitives = primitives.len();
        "Laid out chord diagram"
    );

    DiagramGeometry {
        width: config.width,
        height: config.height,
        primitives,
    }
}

/// [`layout_diagram`] with the default 5-fret, 220×280 viewport.
pub fn layout_default(chord: &ChordFingering) -> DiagramGeometry {
    layout_diagram(chord, &LayoutConfig::default())
}
