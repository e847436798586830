//! Run summary types and helpers.

mod publication;
mod run_summary;

pub use publication::Publication;
pub use run_summary::RunSummary;
