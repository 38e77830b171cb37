//! Data model for a chord fingering as returned by a chord source.
//!
//! A [`ChordFingering`] can only be obtained through validation: JSON is first
//! read into the plain wire record [`ChordRecord`] and then converted with
//! `TryFrom`, so every value handed to the layout engine already satisfies
//! the structural invariants (six strings, known finger numbers, a sane
//! starting fret and barre).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = 6;

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

/// A chord record that violates the structural invariants.
///
/// String positions in messages are array indices (0 = lowest string).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("chord name is empty")]
    EmptyName,

    #[error("expected {STRING_COUNT} fret values, got {0}")]
    FretCount(usize),

    #[error("expected {STRING_COUNT} finger values, got {0}")]
    FingerCount(usize),

    #[error("fret value {value} on string {string} is invalid (use -1, 0 or a positive fret)")]
    FretValue { string: usize, value: i32 },

    #[error("finger value {value} on string {string} is invalid (expected 0..=5)")]
    FingerValue { string: usize, value: i32 },

    #[error("starting fret must be at least 1, got {0}")]
    StartingFret(i32),

    #[error("barre fret must be at least 1, got {0}")]
    BarreFret(i32),

    #[error("barre string {0} is out of range (expected 1..=6)")]
    BarreString(i32),

    #[error("barre must span two different strings, got string {0} at both ends")]
    BarreSameString(i32),
}

// ═══════════════════════════════════════════════════════════════════════
// Per-string values
// ═══════════════════════════════════════════════════════════════════════

/// What a single string does in the chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFret {
    /// Not sounded (`-1` on the wire).
    Muted,
    /// Sounded without fretting (`0` on the wire).
    Open,
    /// Pressed at an absolute fret, counted from 1 at the nut.
    Fretted(u32),
}

impl StringFret {
    /// Decode a wire value. Anything below `-1` is rejected.
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            -1 => Some(StringFret::Muted),
            0 => Some(StringFret::Open),
            v if v > 0 => Some(StringFret::Fretted(v as u32)),
            _ => None,
        }
    }

    pub fn to_raw(self) -> i32 {
        match self {
            StringFret::Muted => -1,
            StringFret::Open => 0,
            // Only ever built from a positive i32, so this cannot wrap.
            StringFret::Fretted(fret) => fret as i32,
        }
    }
}

/// The fretting-hand finger assigned to a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    None,
    Index,
    Middle,
    Ring,
    Pinky,
    Thumb,
}

impl Finger {
    /// Decode a wire value: 0 = none, 1..=4 index..pinky, 5 = thumb.
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(Finger::None),
            1 => Some(Finger::Index),
            2 => Some(Finger::Middle),
            3 => Some(Finger::Ring),
            4 => Some(Finger::Pinky),
            5 => Some(Finger::Thumb),
            _ => None,
        }
    }

    pub fn to_raw(self) -> i32 {
        match self {
            Finger::None => 0,
            Finger::Index => 1,
            Finger::Middle => 2,
            Finger::Ring => 3,
            Finger::Pinky => 4,
            Finger::Thumb => 5,
        }
    }
}

/// A string as numbered by guitarists: 1 is the highest-pitched string,
/// 6 the lowest.
///
/// This is the reverse of the array order used for frets and fingers
/// (index 0 = lowest string). [`StringNumber::to_index`] is the one place
/// that converts between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringNumber(u8);

impl StringNumber {
    pub const HIGHEST: StringNumber = StringNumber(1);
    pub const LOWEST: StringNumber = StringNumber(STRING_COUNT as u8);

    pub fn new(number: i32) -> Result<Self, MalformedInput> {
        if (1..=STRING_COUNT as i32).contains(&number) {
            Ok(StringNumber(number as u8))
        } else {
            Err(MalformedInput::BarreString(number))
        }
    }

    /// Inverse of [`StringNumber::to_index`]; `None` for indices past the last string.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < STRING_COUNT).then(|| StringNumber((STRING_COUNT - index) as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Array index into `frets`/`fingers`: string 6 → 0, string 1 → 5.
    pub fn to_index(self) -> usize {
        STRING_COUNT - self.0 as usize
    }
}

impl fmt::Display for StringNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How hard the chord is to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Wire records
// ═══════════════════════════════════════════════════════════════════════

/// A chord exactly as it appears in JSON, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordRecord {
    /// Display name, e.g. "C Major"
    #[serde(alias = "name")]
    pub chord_name: String,
    /// Low string first; -1 muted, 0 open, >0 absolute fret
    pub frets: Vec<i32>,
    /// Low string first; 0 none, 1..=4 index..pinky, 5 thumb
    pub fingers: Vec<i32>,
    /// Absolute fret shown in the top row of the diagram
    pub starting_fret: i32,
    #[serde(default)]
    pub barre: Option<BarreRecord>,
    #[serde(default)]
    pub description: String,
    pub difficulty: Difficulty,
}

/// A barre as it appears in JSON. Strings use guitarist numbering (1 = high E).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarreRecord {
    pub fret: i32,
    pub start_string: i32,
    pub end_string: i32,
}

// ═══════════════════════════════════════════════════════════════════════
// Validated chord
// ═══════════════════════════════════════════════════════════════════════

/// One finger laid across a contiguous range of strings at a single fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Barre {
    fret: u32,
    start_string: StringNumber,
    end_string: StringNumber,
}

impl Barre {
    pub fn new(fret: i32, start_string: i32, end_string: i32) -> Result<Self, MalformedInput> {
        if fret < 1 {
            return Err(MalformedInput::BarreFret(fret));
        }
        let start = StringNumber::new(start_string)?;
        let end = StringNumber::new(end_string)?;
        if start == end {
            return Err(MalformedInput::BarreSameString(start_string));
        }
        Ok(Barre {
            fret: fret as u32,
            start_string: start,
            end_string: end,
        })
    }

    /// Absolute fret of the barre.
    pub fn fret(&self) -> u32 {
        self.fret
    }

    pub fn start_string(&self) -> StringNumber {
        self.start_string
    }

    pub fn end_string(&self) -> StringNumber {
        self.end_string
    }

    /// Array indices covered by the barre, lowest index first.
    pub fn index_span(&self) -> (usize, usize) {
        let a = self.start_string.to_index();
        let b = self.end_string.to_index();
        (a.min(b), a.max(b))
    }
}

impl TryFrom<BarreRecord> for Barre {
    type Error = MalformedInput;

    fn try_from(record: BarreRecord) -> Result<Self, Self::Error> {
        Barre::new(record.fret, record.start_string, record.end_string)
    }
}

impl From<Barre> for BarreRecord {
    fn from(barre: Barre) -> Self {
        BarreRecord {
            fret: barre.fret as i32,
            start_string: barre.start_string.get() as i32,
            end_string: barre.end_string.get() as i32,
        }
    }
}

/// A validated chord fingering. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChordRecord", into = "ChordRecord")]
pub struct ChordFingering {
    name: String,
    frets: [StringFret; STRING_COUNT],
    fingers: [Finger; STRING_COUNT],
    starting_fret: u32,
    barre: Option<Barre>,
    description: String,
    difficulty: Difficulty,
}

impl ChordFingering {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-string fret state, lowest string first.
    pub fn frets(&self) -> &[StringFret; STRING_COUNT] {
        &self.frets
    }

    /// Per-string finger, lowest string first.
    pub fn fingers(&self) -> &[Finger; STRING_COUNT] {
        &self.fingers
    }

    pub fn starting_fret(&self) -> u32 {
        self.starting_fret
    }

    pub fn barre(&self) -> Option<&Barre> {
        self.barre.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Iterate `(index, fret, finger)` for each string, lowest first.
    pub fn strings(&self) -> impl Iterator<Item = (usize, StringFret, Finger)> + '_ {
        self.frets
            .iter()
            .zip(self.fingers.iter())
            .enumerate()
            .map(|(i, (&fret, &finger))| (i, fret, finger))
    }
}

impl TryFrom<ChordRecord> for ChordFingering {
    type Error = MalformedInput;

    fn try_from(record: ChordRecord) -> Result<Self, Self::Error> {
        if record.chord_name.trim().is_empty() {
            return Err(MalformedInput::EmptyName);
        }
        if record.frets.len() != STRING_COUNT {
            return Err(MalformedInput::FretCount(record.frets.len()));
        }
        if record.fingers.len() != STRING_COUNT {
            return Err(MalformedInput::FingerCount(record.fingers.len()));
        }

        let mut frets = [StringFret::Muted; STRING_COUNT];
        for (string, (&value, slot)) in record.frets.iter().zip(frets.iter_mut()).enumerate() {
            *slot = StringFret::from_raw(value)
                .ok_or(MalformedInput::FretValue { string, value })?;
        }

        let mut fingers = [Finger::None; STRING_COUNT];
        for (string, (&value, slot)) in record.fingers.iter().zip(fingers.iter_mut()).enumerate() {
            *slot = Finger::from_raw(value)
                .ok_or(MalformedInput::FingerValue { string, value })?;
        }

        if record.starting_fret < 1 {
            return Err(MalformedInput::StartingFret(record.starting_fret));
        }

        let barre = record.barre.map(Barre::try_from).transpose()?;

        Ok(ChordFingering {
            name: record.chord_name,
            frets,
            fingers,
            starting_fret: record.starting_fret as u32,
            barre,
            description: record.description,
            difficulty: record.difficulty,
        })
    }
}

impl From<ChordFingering> for ChordRecord {
    fn from(chord: ChordFingering) -> Self {
        ChordRecord {
            chord_name: chord.name,
            frets: chord.frets.iter().map(|f| f.to_raw()).collect(),
            fingers: chord.fingers.iter().map(|f| f.to_raw()).collect(),
            starting_fret: chord.starting_fret as i32,
            barre: chord.barre.map(BarreRecord::from),
            description: chord.description,
            difficulty: chord.difficulty,
        }
    }
}
