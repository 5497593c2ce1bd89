//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::{BinApi, FetchTransport};
use crate::config::AppConfig;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    api: BinApi<FetchTransport>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            api: BinApi::new(FetchTransport, config),
        }
    }

    /// Backend client bound to the page's config
    pub fn api(&self) -> BinApi<FetchTransport> {
        self.api.clone()
    }
}

/// Get the app context provided by `<App/>`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
