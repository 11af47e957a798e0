//! Runtime configuration.
//!
//! The API base URL is resolved once per page load, in order:
//! 1. `window.__GATEKEEPER_ENV` (injected by `env.js` at deploy time)
//! 2. `window.__GATEKEEPER_CONFIG` (cached result of an earlier lookup)
//! 3. `./config.json` served next to the bundle
//! 4. the compiled-in default

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace and a trailing slash so joined paths never double up.
pub(crate) fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

fn cache_base_url(raw: &str) -> String {
    let normalized = normalize_base_url(raw);
    let _ = API_BASE_URL.set(normalized.clone());
    normalized
}

// Expect optional global object: window.__GATEKEEPER_ENV = { API_BASE_URL: "..." }
#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("__GATEKEEPER_ENV"))
        .ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }
    let value = js_sys::Reflect::get(&env, &wasm_bindgen::JsValue::from_str("API_BASE_URL"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .or_else(|| {
            js_sys::Reflect::get(&env, &wasm_bindgen::JsValue::from_str("api_base_url")).ok()
        })?;
    value.as_string()
}

// Cached result of an earlier resolution: window.__GATEKEEPER_CONFIG = { api_base_url: "..." }
#[cfg(target_arch = "wasm32")]
fn get_from_window_config() -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(
        &window,
        &wasm_bindgen::JsValue::from_str("__GATEKEEPER_CONFIG"),
    )
    .ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    js_sys::Reflect::get(&config, &wasm_bindgen::JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(base_url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let config = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &config,
        &wasm_bindgen::JsValue::from_str("api_base_url"),
        &wasm_bindgen::JsValue::from_str(base_url),
    );
    let _ = js_sys::Reflect::set(
        &window,
        &wasm_bindgen::JsValue::from_str("__GATEKEEPER_CONFIG"),
        &config,
    );
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let response = reqwest::get("./config.json").await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    response.json::<RuntimeConfig>().await.ok()
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(from_env) = get_from_env_js() {
        return cache_base_url(&from_env);
    }
    if let Some(from_window) = get_from_window_config() {
        return cache_base_url(&from_window);
    }
    if let Some(config) = fetch_runtime_config().await {
        if let Some(base_url) = config.api_base_url {
            let resolved = cache_base_url(&base_url);
            write_window_config(&resolved);
            return resolved;
        }
    }
    log::warn!(
        "no runtime config found, falling back to {}",
        DEFAULT_API_BASE_URL
    );
    cache_base_url(DEFAULT_API_BASE_URL)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    match API_BASE_URL.get() {
        Some(cached) => cached.clone(),
        None => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

/// Resolves the base URL ahead of the first request so API calls do not race
/// the `config.json` fetch.
pub async fn init() {
    let _ = await_api_base_url().await;
}
