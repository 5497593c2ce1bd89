//! UI Handlers
//!
//! The page-load and form-submit flows, written against small handle traits
//! so they run the same over the real DOM and over test fakes.

mod loader;
mod submitter;

pub use loader::BinListLoader;
pub use submitter::BinSubmitter;

use crate::error::DomError;
use crate::form::FormFields;

/// Alert shown for any failure of the load flow
pub const LOAD_FAILED: &str = "Failed to get bins!";
/// Alert shown for any failure of the submit flow
pub const SUBMIT_FAILED: &str = "Submission failed!";

/// Append-only table of bins. Cell text is set as plain text, never markup.
pub trait BinTable {
    fn append_row(&self, title: &str, content: &str) -> Result<(), DomError>;
}

/// The new-bin form
pub trait BinForm {
    fn fields(&self) -> Result<FormFields, DomError>;
    /// Return every field to its default value
    fn reset(&self);
}

/// User-visible failure notification
pub trait Notifier {
    fn notify(&self, message: &str);
}
