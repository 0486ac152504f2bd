// C entry points. Results cross the boundary as JSON strings that the caller
// must hand back to `keypad_free_string`.
use crate::core::generator::letter_combinations;
use serde::Serialize;
use std::ffi::{c_char, CStr, CString};
use std::panic::catch_unwind;
use std::ptr;

#[derive(Serialize)]
#[serde(untagged)]
enum Response {
    Combinations { ok: bool, count: usize, combinations: Vec<String> },
    Failure { ok: bool, error: String },
}

fn failure(error: impl Into<String>) -> Response {
    Response::Failure { ok: false, error: error.into() }
}

fn respond(digits: Option<&str>) -> Response {
    let Some(digits) = digits else {
        return failure("digits must be a non-null UTF-8 string");
    };
    match letter_combinations(digits) {
        Ok(combinations) => Response::Combinations {
            ok: true,
            count: combinations.len(),
            combinations,
        },
        Err(err) => failure(err.to_string()),
    }
}

fn into_c_string(json: String) -> *mut c_char {
    // serde_json escapes control characters, so interior NULs cannot appear.
    CString::new(json).map_or(ptr::null_mut(), CString::into_raw)
}

/// Expands `digits` and returns a JSON object:
/// `{"ok":true,"count":N,"combinations":[...]}` or `{"ok":false,"error":"..."}`.
///
/// # Safety
/// `digits` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn keypad_letter_combinations(digits: *const c_char) -> *mut c_char {
    let input = if digits.is_null() {
        None
    } else {
        CStr::from_ptr(digits).to_str().ok()
    };
    let json = catch_unwind(|| {
        serde_json::to_string(&respond(input))
            .unwrap_or_else(|_| r#"{"ok":false,"error":"serialization failed"}"#.to_string())
    })
    .unwrap_or_else(|_| {
        log::error!("event=panic_captured module=c_api status=error");
        r#"{"ok":false,"error":"internal error"}"#.to_string()
    });
    into_c_string(json)
}

/// # Safety
/// `s` must be null or a pointer returned by `keypad_letter_combinations`,
/// freed at most once.
#[no_mangle]
pub unsafe extern "C" fn keypad_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
