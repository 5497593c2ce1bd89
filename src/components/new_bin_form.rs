//! New Bin Form Component
//!
//! Form for submitting a bin. Submission is handled in script and echoed
//! into the recent bins table.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::dom::{AlertNotifier, DomForm, DomTable, NEW_BIN_FORM_ID, RECENT_BINS_ID};
use crate::error::DomError;
use crate::handlers::{BinSubmitter, Notifier, SUBMIT_FAILED};

/// Form for creating new bins
#[component]
pub fn NewBinForm(table_ref: NodeRef<html::Table>) -> impl IntoView {
    let ctx = use_app_context();
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let handles = form_ref
            .get_untracked()
            .ok_or(DomError::Missing(NEW_BIN_FORM_ID))
            .and_then(|form| {
                table_ref
                    .get_untracked()
                    .map(|table| (form, table))
                    .ok_or(DomError::Missing(RECENT_BINS_ID))
            });

        match handles {
            Ok((form, table)) => {
                let submitter = BinSubmitter::new(
                    ctx.api(),
                    DomTable::new(table),
                    DomForm::new(form),
                    AlertNotifier,
                );
                spawn_local(async move {
                    submitter.run().await;
                });
            }
            Err(e) => {
                log::error!("[FORM] {}", e);
                AlertNotifier.notify(SUBMIT_FAILED);
            }
        }
    };

    // Length limits mirror what the backend accepts
    view! {
        <form id=NEW_BIN_FORM_ID class="new-bin-form" node_ref=form_ref on:submit=on_submit>
            <input type="text" name="title" placeholder="Title" maxlength="20" required=true />
            <textarea name="content" placeholder="Content" maxlength="256" required=true></textarea>
            <button type="submit">"Submit"</button>
        </form>
    }
}
