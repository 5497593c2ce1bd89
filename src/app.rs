//! Pastebin Frontend App
//!
//! Main application component: new bin form above the recent bins table.

use leptos::html;
use leptos::prelude::*;

use crate::components::{NewBinForm, RecentBins};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(config));

    // Shared by the loader and the submitter
    let table_ref = NodeRef::<html::Table>::new();

    view! {
        <main class="pastebin">
            <h1>"Pastebin"</h1>

            <NewBinForm table_ref=table_ref />

            <h2>"Recent bins"</h2>
            <RecentBins table_ref=table_ref />
        </main>
    }
}
