//! Startup configuration for the playlist service endpoint.
//!
//! Resolved once by the root `App` component through `use_hook` and shared
//! through context. In the browser the page may set `window.__API_BASE__` /
//! `window.__PLAYLIST_LIMIT__` before the bundle loads; native builds read
//! `MOODBEATS_API_BASE` / `MOODBEATS_PLAYLIST_LIMIT` instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[cfg(target_arch = "wasm32")]
const API_BASE_GLOBAL: &str = "__API_BASE__";
#[cfg(target_arch = "wasm32")]
const PLAYLIST_LIMIT_GLOBAL: &str = "__PLAYLIST_LIMIT__";
#[cfg(not(target_arch = "wasm32"))]
const API_BASE_ENV: &str = "MOODBEATS_API_BASE";
#[cfg(not(target_arch = "wasm32"))]
const PLAYLIST_LIMIT_ENV: &str = "MOODBEATS_PLAYLIST_LIMIT";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub playlist_limit: Option<u32>,
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            playlist_limit: None,
        }
    }
}

impl AppConfig {
    pub fn new(api_base: Option<String>, playlist_limit: Option<String>) -> Self {
        let api_base = api_base
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let playlist_limit = playlist_limit
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|limit| *limit > 0);

        Self {
            api_base,
            playlist_limit,
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn resolve() -> Self {
        Self::new(
            window_global(API_BASE_GLOBAL),
            window_global(PLAYLIST_LIMIT_GLOBAL),
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve() -> Self {
        let _ = dotenv::dotenv();
        Self::new(
            std::env::var(API_BASE_ENV).ok(),
            std::env::var(PLAYLIST_LIMIT_ENV).ok(),
        )
    }
}

#[cfg(target_arch = "wasm32")]
fn window_global(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let value: JsValue = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))
}
