//! Parsing tests — chord JSON accepted and rejected before any layout runs.

use chordlib::{
    chord_to_json, parse_chord_file, parse_chord_json, ChordError, Difficulty, Finger,
    MalformedInput, StringFret, StringNumber,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn chords_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("chords")
}

fn with(frets: &str, fingers: &str, starting_fret: i32, barre: &str) -> String {
    format!(
        r#"{{"chordName":"Test","frets":{frets},"fingers":{fingers},"startingFret":{starting_fret},"barre":{barre},"description":"","difficulty":"Beginner"}}"#
    )
}

fn malformed(json: &str) -> MalformedInput {
    match parse_chord_json(json) {
        Err(ChordError::Malformed(m)) => m,
        other => panic!("expected malformed input, got {other:?}"),
    }
}

// ─── Accepted input ─────────────────────────────────────────────────

#[test]
fn parse_f_major_sample() {
    let chord = parse_chord_file(chords_dir().join("f_major.json")).expect("Failed to parse f_major");

    assert_eq!(chord.name(), "F Major");
    assert_eq!(chord.difficulty(), Difficulty::Intermediate);
    assert_eq!(chord.starting_fret(), 1);
    assert_eq!(chord.frets()[0], StringFret::Fretted(1));
    assert_eq!(chord.frets()[2], StringFret::Fretted(3));
    assert_eq!(chord.fingers()[2], Finger::Pinky);

    let barre = chord.barre().expect("F major has a barre");
    assert_eq!(barre.fret(), 1);
    assert_eq!(barre.start_string(), StringNumber::HIGHEST);
    assert_eq!(barre.end_string(), StringNumber::LOWEST);
    assert_eq!(barre.index_span(), (0, 5));
}

#[test]
fn barre_may_be_absent_or_null() {
    let null = parse_chord_json(&with("[-1,0,2,2,1,0]", "[0,0,2,3,1,0]", 1, "null")).unwrap();
    assert!(null.barre().is_none());

    let absent = r#"{"name":"Am","frets":[-1,0,2,2,1,0],"fingers":[0,0,2,3,1,0],"startingFret":1,"difficulty":"Beginner"}"#;
    let chord = parse_chord_json(absent).unwrap();
    assert!(chord.barre().is_none());
    assert_eq!(chord.name(), "Am");
    assert_eq!(chord.description(), "");
}

#[test]
fn chord_json_round_trips() {
    let chord = parse_chord_file(chords_dir().join("a_minor_5th.json")).unwrap();
    let json = chord_to_json(&chord).unwrap();
    assert!(json.contains("\"startingFret\": 5"));
    assert_eq!(parse_chord_json(&json).unwrap(), chord);
}

// ─── Rejected input ─────────────────────────────────────────────────

#[test]
fn wrong_array_lengths() {
    assert_eq!(
        malformed(&with("[-1,0,2,2,1]", "[0,0,2,3,1,0]", 1, "null")),
        MalformedInput::FretCount(5)
    );
    assert_eq!(
        malformed(&with("[-1,0,2,2,1,0]", "[0,0,2,3,1,0,0]", 1, "null")),
        MalformedInput::FingerCount(7)
    );
}

#[test]
fn out_of_range_values() {
    assert_eq!(
        malformed(&with("[-1,0,2,-3,1,0]", "[0,0,2,3,1,0]", 1, "null")),
        MalformedInput::FretValue { string: 3, value: -3 }
    );
    assert_eq!(
        malformed(&with("[-1,0,2,2,1,0]", "[0,0,2,3,-1,0]", 1, "null")),
        MalformedInput::FingerValue { string: 4, value: -1 }
    );
    assert_eq!(
        malformed(&with("[-1,0,2,2,1,0]", "[0,0,2,3,1,0]", 0, "null")),
        MalformedInput::StartingFret(0)
    );
}

#[test]
fn invalid_barres() {
    let frets = "[1,3,3,2,1,1]";
    let fingers = "[1,3,4,2,1,1]";
    assert_eq!(
        malformed(&with(frets, fingers, 1, r#"{"fret":0,"startString":1,"endString":6}"#)),
        MalformedInput::BarreFret(0)
    );
    assert_eq!(
        malformed(&with(frets, fingers, 1, r#"{"fret":1,"startString":1,"endString":7}"#)),
        MalformedInput::BarreString(7)
    );
    assert_eq!(
        malformed(&with(frets, fingers, 1, r#"{"fret":1,"startString":3,"endString":3}"#)),
        MalformedInput::BarreSameString(3)
    );
}

#[test]
fn syntax_and_schema_errors_are_json_errors() {
    assert!(matches!(parse_chord_json("{not json"), Err(ChordError::Json(_))));
    assert!(matches!(
        parse_chord_json(r#"{"chordName":"X","frets":[0,0,0,0,0,0],"fingers":[0,0,0,0,0,0],"startingFret":1,"difficulty":"Expert"}"#),
        Err(ChordError::Json(_))
    ));
}
