//! Client Configuration
//!
//! Where the todo server lives. The compiled-in default suits local
//! development; deployments repoint the client by defining a
//! `TODO_API_URL` global before the app loads.

use wasm_bindgen::JsValue;

pub const DEFAULT_API_URL: &str = "http://localhost:4567/api/";

/// Base API URL, always `/`-terminated.
pub fn api_url() -> String {
    let mut url = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("TODO_API_URL"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
