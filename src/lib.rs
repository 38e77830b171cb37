//! chordlib — guitar chord diagram layout and rendering.
//!
//! A chord fingering (JSON, usually from a chord source) is validated into a
//! [`ChordFingering`], laid out into a [`DiagramGeometry`] of positioned
//! primitives, and optionally drawn as SVG.
//!
//! # Example
//! ```
//! use chordlib::{layout_default, parse_chord_json};
//!
//! let chord = parse_chord_json(r#"{
//!     "chordName": "A Minor",
//!     "frets": [-1, 0, 2, 2, 1, 0],
//!     "fingers": [0, 0, 2, 3, 1, 0],
//!     "startingFret": 1,
//!     "barre": null,
//!     "description": "",
//!     "difficulty": "Beginner"
//! }"#).unwrap();
//!
//! let geometry = layout_default(&chord);
//! assert_eq!(geometry.finger_marks().count(), 3);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod source;

#[cfg(target_os = "android")]
pub mod android;

use std::path::Path;

pub use config::{AppConfig, LayoutConfig, StyleConfig};
pub use error::ChordError;
pub use layout::{layout_default, layout_diagram, DiagramGeometry, Primitive};
pub use model::*;
pub use renderer::{render_chord_to_svg, render_diagram_to_svg, render_geometry_to_svg};
pub use source::{fetch_diagram, AcquisitionError, ChordBook, ChordDiagram, ChordSource};

/// Parse and validate a single chord record from JSON.
///
/// Structural problems (wrong array lengths, bad finger numbers, an invalid
/// barre) come back as [`ChordError::Malformed`]; syntax errors and missing
/// fields as [`ChordError::Json`].
pub fn parse_chord_json(json: &str) -> Result<ChordFingering, ChordError> {
    let record: ChordRecord = serde_json::from_str(json)?;
    Ok(ChordFingering::try_from(record)?)
}

/// Parse a chord JSON file from a path.
pub fn parse_chord_file<P: AsRef<Path>>(path: P) -> Result<ChordFingering, ChordError> {
    let json = std::fs::read_to_string(path)?;
    parse_chord_json(&json)
}

/// Convert a chord back to its JSON wire form.
pub fn chord_to_json(chord: &ChordFingering) -> Result<String, ChordError> {
    Ok(serde_json::to_string_pretty(chord)?)
}

/// Convert laid-out geometry to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn geometry_to_json(geometry: &DiagramGeometry) -> Result<String, ChordError> {
    Ok(serde_json::to_string_pretty(geometry)?)
}

/// Parse chord JSON and render it directly to SVG.
///
/// `display_width` sets the SVG width; pass `None` for the viewport size.
pub fn render_json_to_svg(
    json: &str,
    config: &AppConfig,
    display_width: Option<f64>,
) -> Result<String, ChordError> {
    let chord = parse_chord_json(json)?;
    Ok(render_chord_to_svg(&chord, config, display_width))
}

/// Parse chord JSON and return its laid-out geometry as JSON.
pub fn layout_json(json: &str, config: &LayoutConfig) -> Result<String, ChordError> {
    let chord = parse_chord_json(json)?;
    geometry_to_json(&layout_diagram(&chord, config))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

unsafe fn json_arg<'a>(json: *const c_char) -> Option<&'a str> {
    if json.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(json) }.to_str().ok()
}

fn into_c_string(result: Result<String, ChordError>) -> *mut c_char {
    match result {
        Ok(s) => CString::new(s).unwrap_or_default().into_raw(),
        Err(err) => {
            log::warn!(error = err.to_string(); "FFI call failed");
            std::ptr::null_mut()
        }
    }
}

/// Render chord JSON to SVG and return it as a C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// `display_width` sets the SVG width. Pass 0.0 to use the viewport size.
/// Returns null if the chord is invalid.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_json(
    json: *const c_char,
    display_width: f64,
) -> *mut c_char {
    let Some(json) = (unsafe { json_arg(json) }) else {
        return std::ptr::null_mut();
    };
    let dw = if display_width > 0.0 { Some(display_width) } else { None };
    into_c_string(render_json_to_svg(json, &AppConfig::default(), dw))
}

/// Lay out chord JSON and return the geometry as a JSON C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_layout_json(json: *const c_char) -> *mut c_char {
    let Some(json) = (unsafe { json_arg(json) }) else {
        return std::ptr::null_mut();
    };
    into_c_string(layout_json(json, &LayoutConfig::default()))
}

/// Free a string previously returned by chordlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A_MINOR: &str = r#"{"chordName":"A Minor","frets":[-1,0,2,2,1,0],"fingers":[0,0,2,3,1,0],"startingFret":1,"description":"","difficulty":"Beginner"}"#;

    #[test]
    fn ffi_render_round_trip() {
        let input = CString::new(A_MINOR).unwrap();
        unsafe {
            let out = chordlib_render_json(input.as_ptr(), 0.0);
            assert!(!out.is_null());
            let svg = CStr::from_ptr(out).to_str().unwrap().to_owned();
            chordlib_free_string(out);
            assert!(svg.starts_with("<svg"));
            assert!(svg.contains("A Minor"));
        }
    }

    #[test]
    fn ffi_rejects_invalid_input() {
        let input = CString::new(r#"{"chordName":"X","frets":[0],"fingers":[0],"startingFret":1,"difficulty":"Beginner"}"#).unwrap();
        unsafe {
            assert!(chordlib_render_json(input.as_ptr(), 0.0).is_null());
            assert!(chordlib_layout_json(input.as_ptr()).is_null());
            assert!(chordlib_render_json(std::ptr::null(), 0.0).is_null());
        }
    }

    #[test]
    fn ffi_layout_returns_geometry_json() {
        let input = CString::new(A_MINOR).unwrap();
        unsafe {
            let out = chordlib_layout_json(input.as_ptr());
            assert!(!out.is_null());
            let json = CStr::from_ptr(out).to_str().unwrap().to_owned();
            chordlib_free_string(out);
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["width"], 220.0);
            assert!(value["primitives"].as_array().unwrap().len() > 10);
        }
    }
}
