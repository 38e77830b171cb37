//! Per-string marks: mute, open, or a fingered dot.

use log::debug;

use super::coords::CoordinateMapper;
use super::primitives::{FingerLabel, FingerMark, MuteMark, OpenMark, Point, Primitive};
use super::window::FretWindow;
use crate::config::LayoutConfig;
use crate::model::{ChordFingering, Finger, StringFret};

/// The single mark for one string, or `None` if its fret is off-window.
///
/// Muted and open strings are drawn above the top line regardless of the
/// window; fretted strings go through [`FretWindow::resolve`].
pub fn annotate_string(
    string: usize,
    fret: StringFret,
    finger: Finger,
    window: &FretWindow,
    mapper: &CoordinateMapper,
    config: &LayoutConfig,
) -> Option<Primitive> {
    let x = mapper.string_x(string);
    match fret {
        StringFret::Muted => Some(Primitive::MuteMark(MuteMark {
            string,
            at: Point::new(x, mapper.top() - config.mute_offset),
        })),
        StringFret::Open => Some(Primitive::OpenMark(OpenMark {
            string,
            center: Point::new(x, mapper.top() - config.open_offset),
            radius: config.open_radius,
        })),
        StringFret::Fretted(absolute) => match window.resolve(absolute) {
            Some(row) => Some(Primitive::FingerMark(FingerMark {
                string,
                center: Point::new(x, mapper.fret_y(row)),
                radius: config.finger_radius,
                relative_fret: row,
                label: FingerLabel::from(finger),
            })),
            None => {
                debug!(
                    string = string,
                    fret = absolute,
                    starting_fret = window.starting_fret();
                    "Fretted note outside visible window, dropped"
                );
                None
            }
        },
    }
}

/// Marks for all six strings in string order; at most one per string.
pub fn annotate_strings(
    chord: &ChordFingering,
    window: &FretWindow,
    mapper: &CoordinateMapper,
    config: &LayoutConfig,
) -> Vec<Primitive> {
    chord
        .strings()
        .filter_map(|(i, fret, finger)| annotate_string(i, fret, finger, window, mapper, config))
        .collect()
}
