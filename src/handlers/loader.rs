//! Bin List Loader

use super::{BinTable, Notifier, LOAD_FAILED};
use crate::commands::{BinApi, BinTransport};

/// Fills the table with the server's bins. Runs once per page load; running
/// it again appends the list again.
pub struct BinListLoader<T, B, N> {
    api: BinApi<T>,
    table: B,
    notifier: N,
}

impl<T: BinTransport, B: BinTable, N: Notifier> BinListLoader<T, B, N> {
    pub fn new(api: BinApi<T>, table: B, notifier: N) -> Self {
        Self { api, table, notifier }
    }

    pub async fn run(&self) {
        // The whole list is parsed before the first row goes in.
        let bins = match self.api.get_bins().await {
            Ok(bins) => bins,
            Err(e) => {
                log::error!("[LOADER] getBins failed: {}", e);
                self.notifier.notify(LOAD_FAILED);
                return;
            }
        };

        log::info!("[LOADER] Loaded {} bins", bins.len());
        for bin in &bins {
            if let Err(e) = self.table.append_row(&bin.title, &bin.content) {
                log::error!("[LOADER] Could not render bin {:?}: {}", bin.title, e);
            }
        }
    }
}
