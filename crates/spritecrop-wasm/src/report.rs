//! Error conversion and fault reporting for the JavaScript side.
//!
//! Contract violations (bad sizes, zero targets) come back as thrown
//! strings for the caller to show. Internal faults from the flood fill are
//! also written to the browser console, so a skipped image in a batch
//! leaves a trace even when the caller only counts failures.

use spritecrop_core::{RegionError, TransformError};
use wasm_bindgen::prelude::*;

/// Convert any core error into a thrown JS string.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Convert a transform error, logging internal faults first.
pub(crate) fn transform_error(err: TransformError) -> JsValue {
    if is_internal_fault(&err) {
        log_fault(&err);
    }
    to_js_error(err)
}

/// True for errors that indicate a bug rather than bad input.
pub(crate) fn is_internal_fault(err: &TransformError) -> bool {
    matches!(
        err,
        TransformError::Region(RegionError::AlgorithmOverrun { .. })
    )
}

#[cfg(target_arch = "wasm32")]
fn log_fault(err: &TransformError) {
    web_sys::console::error_1(&JsValue::from_str(&format!(
        "spritecrop: internal fault, image skipped: {err}"
    )));
}

#[cfg(not(target_arch = "wasm32"))]
fn log_fault(_err: &TransformError) {}
