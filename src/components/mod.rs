//! UI Components
//!
//! Leptos components hosting the bins table and the new bin form.

mod new_bin_form;
mod recent_bins;

pub use new_bin_form::NewBinForm;
pub use recent_bins::RecentBins;
