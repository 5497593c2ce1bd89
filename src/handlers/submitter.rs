//! Bin Submitter

use super::{BinForm, BinTable, Notifier, SUBMIT_FAILED};
use crate::commands::{BinApi, BinTransport};

/// Posts the form and, once the server accepts it, echoes the submitted
/// values into the table and resets the form. The server's response body is
/// not used, so server-side normalisation shows up only after a reload.
///
/// The caller must already have suppressed the browser's default submission.
pub struct BinSubmitter<T, B, F, N> {
    api: BinApi<T>,
    table: B,
    form: F,
    notifier: N,
}

impl<T: BinTransport, B: BinTable, F: BinForm, N: Notifier> BinSubmitter<T, B, F, N> {
    pub fn new(api: BinApi<T>, table: B, form: F, notifier: N) -> Self {
        Self { api, table, form, notifier }
    }

    /// Single attempt; on failure the form keeps what the user typed.
    pub async fn run(&self) {
        let fields = match self.form.fields() {
            Ok(fields) => fields,
            Err(e) => {
                log::warn!("[SUBMIT] Could not read form: {}", e);
                self.notifier.notify(SUBMIT_FAILED);
                return;
            }
        };

        if let Err(e) = self.api.new_bin(&fields).await {
            log::warn!("[SUBMIT] newBin failed: {}", e);
            self.notifier.notify(SUBMIT_FAILED);
            return;
        }

        let title = fields.get("title").unwrap_or_default();
        let content = fields.get("content").unwrap_or_default();
        if let Err(e) = self.table.append_row(title, content) {
            log::error!("[SUBMIT] Could not render new bin: {}", e);
        }
        self.form.reset();
    }
}
