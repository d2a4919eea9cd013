//! Shared helpers for WASM API operations
//!
//! Common patterns for serialization, deserialization and console
//! logging across the JavaScript-facing functions.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

// ============================================================================
// Console logging
// ============================================================================

pub fn log_info(msg: &str) {
    web_sys::console::info_1(&JsValue::from_str(&format!("[WASM] {}", msg)));
}

pub fn log_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(&format!("[WASM] {}", msg)));
}

// ============================================================================
// Serialization helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}
