//! Recent Bins Table
//!
//! Renders the empty `recent-bins` table and fills it once on mount.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::dom::{AlertNotifier, DomTable, RECENT_BINS_ID};
use crate::handlers::BinListLoader;

#[component]
pub fn RecentBins(table_ref: NodeRef<html::Table>) -> impl IntoView {
    let ctx = use_app_context();

    // Rows are appended straight into the DOM, so this must run exactly once,
    // after the table element exists.
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        let Some(table) = table_ref.get() else {
            return false;
        };
        let loader = BinListLoader::new(ctx.api(), DomTable::new(table), AlertNotifier);
        spawn_local(async move {
            loader.run().await;
        });
        true
    });

    view! {
        <table id=RECENT_BINS_ID class="recent-bins" node_ref=table_ref>
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Content"</th>
                </tr>
            </thead>
            <tbody></tbody>
        </table>
    }
}
