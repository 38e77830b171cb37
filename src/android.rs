//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{layout_json, render_json_to_svg, AppConfig, ChordError, LayoutConfig};

fn to_jstring(env: &mut JNIEnv, result: Result<String, ChordError>) -> jstring {
    match result {
        Ok(s) => match env.new_string(&s) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(err) => {
            log::warn!(error = err.to_string(); "JNI call failed");
            std::ptr::null_mut()
        }
    }
}

/// Render chord JSON to SVG.
///
/// Called from Kotlin as:
///   external fun renderJson(json: String, displayWidth: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_ChordLib_renderJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
    display_width: jfloat,
) -> jstring {
    let json: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let dw = if display_width > 0.0 { Some(display_width as f64) } else { None };

    let result = render_json_to_svg(&json, &AppConfig::default(), dw);
    to_jstring(&mut env, result)
}

/// Lay out chord JSON and return the geometry as JSON.
///
/// Called from Kotlin as:
///   external fun layoutJson(json: String): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_ChordLib_layoutJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
) -> jstring {
    let json: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let result = layout_json(&json, &LayoutConfig::default());
    to_jstring(&mut env, result)
}
