//! Barre bar geometry.

use log::debug;

use super::coords::CoordinateMapper;
use super::primitives::BarreRect;
use super::window::FretWindow;
use crate::config::LayoutConfig;
use crate::model::Barre;

/// Rectangle covering the barre's strings, centred on its window row.
///
/// Returns `None` when the barre fret is outside the window.
pub fn barre_rect(
    barre: &Barre,
    window: &FretWindow,
    mapper: &CoordinateMapper,
    config: &LayoutConfig,
) -> Option<BarreRect> {
    let Some(row) = window.resolve(barre.fret()) else {
        debug!(
            fret = barre.fret(),
            starting_fret = window.starting_fret();
            "Barre outside visible window, dropped"
        );
        return None;
    };

    let (low, high) = barre.index_span();
    let x_start = mapper.string_x(low);
    let x_end = mapper.string_x(high);
    let height = config.barre_height;

    Some(BarreRect {
        fret: barre.fret(),
        x: x_start,
        y: mapper.fret_y(row) - height / 2.0,
        width: x_end - x_start,
        height,
        corner_radius: height / 2.0,
    })
}
