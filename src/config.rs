//! Runtime Configuration

use log::Level;

/// Path of the bin list endpoint, relative to the API base
pub const GET_BINS_PATH: &str = "/api/v1.0/getBins";
/// Path of the bin submission endpoint, relative to the API base
pub const NEW_BIN_PATH: &str = "/api/v1.0/newBin";
/// Deadline applied to every backend call
pub const DEFAULT_TIMEOUT_MS: u32 = 2000;
/// `<meta>` tag the host page can use to point the UI at another origin
pub const API_BASE_META: &str = "pastebin-api-base";

/// Frontend settings. Defaults talk to the serving origin.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin prefix for API paths; empty means same origin
    pub api_base: String,
    pub request_timeout_ms: u32,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: if cfg!(debug_assertions) { Level::Debug } else { Level::Info },
        }
    }
}

impl AppConfig {
    /// Defaults, with `api_base` taken from the host page's meta tag if present
    pub fn from_document() -> Self {
        let mut config = Self::default();
        if let Some(base) = read_meta(API_BASE_META) {
            config.api_base = base;
        }
        config
    }

    pub fn get_bins_url(&self) -> String {
        self.endpoint(GET_BINS_PATH)
    }

    pub fn new_bin_url(&self) -> String {
        self.endpoint(NEW_BIN_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    meta.get_attribute("content")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
