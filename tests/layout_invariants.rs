//! Property-based invariant tests for the layout engine.
//!
//! 1. Layout is deterministic.
//! 2. Every string gets at most one mark, and exactly one unless its fret
//!    is outside the window.
//! 3. String x and row y are strictly increasing.
//! 4. Finger marks only appear for frets inside the window.
//! 5. The barre, when drawn, lines up with the strings it names.
//! 6. A layout config that validates keeps the grid inside the viewport.

use chordlib::layout::coords::CoordinateMapper;
use chordlib::layout::window::FretWindow;
use chordlib::{
    layout_default, layout_diagram, BarreRecord, ChordFingering, ChordRecord, Difficulty, LayoutConfig,
    StringFret, StringNumber,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn barre_strategy() -> impl Strategy<Value = Option<BarreRecord>> {
    prop::option::of(
        (1i32..=24, 1i32..=6, 1i32..=6)
            .prop_filter("barre ends must differ", |(_, a, b)| a != b)
            .prop_map(|(fret, start_string, end_string)| BarreRecord {
                fret,
                start_string,
                end_string,
            }),
    )
}

fn chord_strategy() -> impl Strategy<Value = ChordFingering> {
    (
        prop::collection::vec(-1i32..=24, 6),
        prop::collection::vec(0i32..=5, 6),
        1i32..=20,
        barre_strategy(),
    )
        .prop_map(|(frets, fingers, starting_fret, barre)| {
            ChordFingering::try_from(ChordRecord {
                chord_name: "Generated".into(),
                frets,
                fingers,
                starting_fret,
                barre,
                description: String::new(),
                difficulty: Difficulty::Intermediate,
            })
            .expect("strategy only produces valid chords")
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn layout_is_deterministic(chord in chord_strategy()) {
        prop_assert_eq!(layout_default(&chord), layout_default(&chord));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Completeness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn one_mark_per_string_unless_off_window(chord in chord_strategy()) {
        let geometry = layout_default(&chord);
        let window = FretWindow::new(chord.starting_fret(), 5);

        for (i, fret, _) in chord.strings() {
            let marks = geometry.annotations_for(i);
            let expected = match fret {
                StringFret::Muted | StringFret::Open => 1,
                StringFret::Fretted(f) => usize::from(window.contains(f)),
            };
            prop_assert_eq!(marks.len(), expected, "string {} fret {:?}", i, fret);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mapping_is_monotonic(
        margin_x in 0.0f64..100.0,
        margin_y in 0.0f64..100.0,
        string_spacing in 1.0f64..60.0,
        fret_spacing in 1.0f64..80.0,
        visible_frets in 2u32..12,
    ) {
        let config = LayoutConfig {
            margin_x,
            margin_y,
            string_spacing,
            fret_spacing,
            visible_frets,
            ..LayoutConfig::default()
        };
        let mapper = CoordinateMapper::new(&config);
        for i in 0..5 {
            prop_assert!(mapper.string_x(i) < mapper.string_x(i + 1));
        }
        for r in 1..visible_frets {
            prop_assert!(mapper.fret_y(r) < mapper.fret_y(r + 1));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Window clipping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn finger_marks_stay_inside_window(chord in chord_strategy()) {
        let geometry = layout_default(&chord);
        let start = chord.starting_fret();
        for mark in geometry.finger_marks() {
            prop_assert!((1..=5).contains(&mark.relative_fret));
            match chord.frets()[mark.string] {
                StringFret::Fretted(f) => {
                    prop_assert_eq!(i64::from(f) - i64::from(start) + 1, i64::from(mark.relative_fret));
                }
                other => prop_assert!(false, "finger mark on {:?} string", other),
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Barre alignment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn barre_matches_named_strings(chord in chord_strategy()) {
        let geometry = layout_default(&chord);
        let mapper = CoordinateMapper::new(&LayoutConfig::default());
        let window = FretWindow::new(chord.starting_fret(), 5);

        match (chord.barre(), geometry.barre()) {
            (Some(barre), Some(rect)) => {
                let a = mapper.string_x(barre.start_string().to_index());
                let b = mapper.string_x(barre.end_string().to_index());
                prop_assert_eq!(rect.x, a.min(b));
                prop_assert_eq!(rect.width, (a - b).abs());
                prop_assert!(window.contains(barre.fret()));
            }
            (Some(barre), None) => prop_assert!(!window.contains(barre.fret())),
            (None, Some(_)) => prop_assert!(false, "barre drawn for a chord without one"),
            (None, None) => {}
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Viewport containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn validated_config_keeps_grid_in_viewport(
        chord in chord_strategy(),
        visible_frets in 1u32..=12,
        fret_spacing in 5.0f64..60.0,
        string_spacing in 5.0f64..40.0,
    ) {
        let config = LayoutConfig {
            visible_frets,
            fret_spacing,
            string_spacing,
            ..LayoutConfig::default()
        };
        prop_assume!(config.validate().is_ok());

        let geometry = layout_diagram(&chord, &config);
        for line in geometry.fret_lines() {
            prop_assert!(line.y <= geometry.height, "fret line {} at y {}", line.index, line.y);
        }
        for line in geometry.string_lines() {
            prop_assert!(line.x <= geometry.width);
        }
        for mark in geometry.finger_marks() {
            prop_assert!(mark.center.y < geometry.height);
        }
    }
}

#[test]
fn oversized_window_fails_validation() {
    let config = LayoutConfig { visible_frets: 7, ..LayoutConfig::default() };
    assert!(config.validate().is_err());
    let config = LayoutConfig { visible_frets: 3_000_000, ..LayoutConfig::default() };
    assert!(config.validate().is_err());
}

proptest! {
    #[test]
    fn string_numbers_round_trip(n in 1i32..=6) {
        let sn = StringNumber::new(n).unwrap();
        prop_assert_eq!(sn.to_index() as i32, 6 - n);
        prop_assert_eq!(StringNumber::from_index(sn.to_index()), Some(sn));
    }
}
