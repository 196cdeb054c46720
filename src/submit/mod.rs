//! Outbound submission: the HTTP call and the toast dismiss timer.

pub mod manager;

pub use manager::SubmitManager;

use thiserror::Error;

/// Why a settled attempt was not accepted. Both variants fold into the same
/// `Error` status; the detail is kept for diagnostics only and never shown
/// beyond the generic error toast.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("endpoint rejected submission with status {status}")]
    Rejected { status: u16 },
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}
