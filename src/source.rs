//! Chord sources — where chord fingerings come from.
//!
//! The layout engine never fetches anything itself. Callers hand a
//! [`ChordSource`] to [`fetch_diagram`]; the bundled [`ChordBook`] serves
//! chords from a JSON catalogue, and tests substitute their own fakes.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::config::LayoutConfig;
use crate::error::ChordError;
use crate::layout::{layout_diagram, DiagramGeometry};
use crate::model::{ChordFingering, ChordRecord};

/// Failure to obtain a chord from a source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquisitionError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("no chord found for '{0}'")]
    NotFound(String),

    #[error("chord source unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can turn a free-text query into a chord.
pub trait ChordSource {
    fn fetch(&self, query: &str) -> Result<ChordFingering, AcquisitionError>;
}

impl<S: ChordSource + ?Sized> ChordSource for &S {
    fn fetch(&self, query: &str) -> Result<ChordFingering, AcquisitionError> {
        (**self).fetch(query)
    }
}

impl<S: ChordSource + ?Sized> ChordSource for Box<S> {
    fn fetch(&self, query: &str) -> Result<ChordFingering, AcquisitionError> {
        (**self).fetch(query)
    }
}

/// A chord together with its laid-out diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordDiagram {
    pub chord: ChordFingering,
    pub geometry: DiagramGeometry,
}

/// Look `query` up in `source` and lay the result out.
///
/// Blank queries are rejected without touching the source. When the source
/// fails, layout is never run.
pub fn fetch_diagram<S: ChordSource + ?Sized>(
    source: &S,
    query: &str,
    config: &LayoutConfig,
) -> Result<ChordDiagram, ChordError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AcquisitionError::EmptyQuery.into());
    }

    info!(query = query; "Fetching chord");
    let chord = source.fetch(query)?;
    let geometry = layout_diagram(&chord, config);
    Ok(ChordDiagram { chord, geometry })
}

// ═══════════════════════════════════════════════════════════════════════
// ChordBook
// ═══════════════════════════════════════════════════════════════════════

/// Lookup key for chord names: trimmed, lowercased, and with inner runs of
/// whitespace collapsed to one space, so "C Major" and "  c   MAJOR " are
/// the same chord while "A m" and "Am" stay distinct.
pub fn normalize_chord_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// An in-memory catalogue of chords keyed by normalised name.
#[derive(Debug, Clone, Default)]
pub struct ChordBook {
    chords: BTreeMap<String, ChordFingering>,
}

impl ChordBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from a JSON array of chord records.
    ///
    /// # Errors
    ///
    /// Fails on invalid JSON or on the first record that breaks a chord
    /// invariant; a partially valid catalogue is never returned.
    pub fn from_json(json: &str) -> Result<Self, ChordError> {
        let records: Vec<ChordRecord> = serde_json::from_str(json)?;
        let mut book = ChordBook::new();
        for record in records {
            let chord = ChordFingering::try_from(record)?;
            if let Some(previous) = book.insert(chord) {
                debug!(chord = previous.name(); "Duplicate chord in book, replaced");
            }
        }
        Ok(book)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let book = Self::from_json(&json)?;
        info!(path = path.display().to_string(), chords = book.len(); "Loaded chord book");
        Ok(book)
    }

    /// Add a chord, returning any chord it replaced under the same name.
    pub fn insert(&mut self, chord: ChordFingering) -> Option<ChordFingering> {
        self.chords.insert(normalize_chord_name(chord.name()), chord)
    }

    pub fn get(&self, name: &str) -> Option<&ChordFingering> {
        self.chords.get(&normalize_chord_name(name))
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

impl ChordSource for ChordBook {
    fn fetch(&self, query: &str) -> Result<ChordFingering, AcquisitionError> {
        self.get(query)
            .cloned()
            .ok_or_else(|| AcquisitionError::NotFound(query.to_string()))
    }
}
