//! Positioned drawing primitives produced by the layout engine.
//!
//! Coordinates are SVG user units with the origin at the top-left of the
//! diagram viewport and y growing downwards.

use serde::{Serialize, Serializer};

use crate::model::Finger;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whether a horizontal line is the nut or an ordinary fret wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Nut,
    Fret,
}

/// Text printed inside a finger mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerLabel {
    /// No finger given; the mark is drawn without text.
    None,
    /// 1 = index .. 4 = pinky.
    Digit(u8),
    Thumb,
}

impl FingerLabel {
    pub const THUMB_GLYPH: &'static str = "T";

    pub fn text(self) -> &'static str {
        match self {
            FingerLabel::None => "",
            FingerLabel::Digit(1) => "1",
            FingerLabel::Digit(2) => "2",
            FingerLabel::Digit(3) => "3",
            FingerLabel::Digit(4) => "4",
            FingerLabel::Digit(_) => "",
            FingerLabel::Thumb => Self::THUMB_GLYPH,
        }
    }

    pub fn is_empty(self) -> bool {
        self.text().is_empty()
    }
}

impl From<Finger> for FingerLabel {
    fn from(finger: Finger) -> Self {
        match finger {
            Finger::None => FingerLabel::None,
            Finger::Thumb => FingerLabel::Thumb,
            other => FingerLabel::Digit(other.to_raw() as u8),
        }
    }
}

impl Serialize for FingerLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Primitive payloads
// ═══════════════════════════════════════════════════════════════════════

/// Background panel behind the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

/// A horizontal line. `index` 0 is the top line of the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FretLine {
    pub index: u32,
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
    pub kind: LineKind,
    pub stroke_width: f64,
}

/// A vertical string line. `string` is the array index (0 = lowest).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringLine {
    pub string: usize,
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
    pub stroke_width: f64,
}

/// "X" above the nut for a string that is not played.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuteMark {
    pub string: usize,
    pub at: Point,
}

/// Hollow circle above the nut for a string played open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenMark {
    pub string: usize,
    pub center: Point,
    pub radius: f64,
}

/// Filled dot where a finger presses a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FingerMark {
    pub string: usize,
    pub center: Point,
    pub radius: f64,
    /// 1-based row inside the window
    pub relative_fret: u32,
    pub label: FingerLabel,
}

/// Rounded bar across the strings held by a barre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarreRect {
    /// Absolute fret of the barre
    pub fret: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl BarreRect {
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Fret number printed beside the window when it does not start at the nut.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartingFretLabel {
    pub fret: u32,
    pub at: Point,
}

impl StartingFretLabel {
    /// Display text, e.g. "5fr".
    pub fn text(&self) -> String {
        format!("{}fr", self.fret)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Primitive & DiagramGeometry
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Board(Board),
    FretLine(FretLine),
    StringLine(StringLine),
    MuteMark(MuteMark),
    OpenMark(OpenMark),
    FingerMark(FingerMark),
    Barre(BarreRect),
    StartingFretLabel(StartingFretLabel),
}

impl Primitive {
    /// The string an annotation belongs to; `None` for grid, barre and labels.
    pub fn annotated_string(&self) -> Option<usize> {
        match self {
            Primitive::MuteMark(m) => Some(m.string),
            Primitive::OpenMark(m) => Some(m.string),
            Primitive::FingerMark(m) => Some(m.string),
            _ => None,
        }
    }
}

/// The complete, positioned diagram for one chord.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramGeometry {
    pub width: f64,
    pub height: f64,
    /// Back-to-front drawing order
    pub primitives: Vec<Primitive>,
}

impl DiagramGeometry {
    pub fn fret_lines(&self) -> impl Iterator<Item = &FretLine> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::FretLine(line) => Some(line),
            _ => None,
        })
    }

    pub fn string_lines(&self) -> impl Iterator<Item = &StringLine> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::StringLine(line) => Some(line),
            _ => None,
        })
    }

    pub fn finger_marks(&self) -> impl Iterator<Item = &FingerMark> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::FingerMark(mark) => Some(mark),
            _ => None,
        })
    }

    pub fn mute_marks(&self) -> impl Iterator<Item = &MuteMark> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::MuteMark(mark) => Some(mark),
            _ => None,
        })
    }

    pub fn open_marks(&self) -> impl Iterator<Item = &OpenMark> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::OpenMark(mark) => Some(mark),
            _ => None,
        })
    }

    /// Every mark (mute, open or finger) placed on `string`.
    pub fn annotations_for(&self, string: usize) -> Vec<&Primitive> {
        self.primitives
            .iter()
            .filter(|p| p.annotated_string() == Some(string))
            .collect()
    }

    /// The top horizontal line of the window.
    pub fn top_line(&self) -> Option<&FretLine> {
        self.fret_lines().find(|line| line.index == 0)
    }

    pub fn barre(&self) -> Option<&BarreRect> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Barre(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn starting_fret_label(&self) -> Option<&StartingFretLabel> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::StartingFretLabel(label) => Some(label),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finger_labels() {
        assert_eq!(FingerLabel::from(Finger::None).text(), "");
        assert_eq!(FingerLabel::from(Finger::Index).text(), "1");
        assert_eq!(FingerLabel::from(Finger::Pinky).text(), "4");
        assert_eq!(FingerLabel::from(Finger::Thumb).text(), "T");
        assert!(FingerLabel::from(Finger::None).is_empty());
    }

    #[test]
    fn starting_fret_label_text() {
        let label = StartingFretLabel { fret: 7, at: Point::new(10.0, 67.5) };
        assert_eq!(label.text(), "7fr");
    }

    #[test]
    fn primitives_serialize_with_kind_tag() {
        let mark = Primitive::FingerMark(FingerMark {
            string: 2,
            center: Point::new(95.0, 107.5),
            radius: 11.0,
            relative_fret: 2,
            label: FingerLabel::Digit(2),
        });
        let json = serde_json::to_value(&mark).unwrap();
        assert_eq!(json["kind"], "finger_mark");
        assert_eq!(json["label"], "2");
        assert_eq!(json["relative_fret"], 2);
    }
}
