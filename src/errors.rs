use thiserror::Error;

use crate::domain::listing::ListingStatus;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (store, export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Listing cannot move from {from} to {to}")]
    InvalidTransition {
        from: ListingStatus,
        to: ListingStatus,
    },
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}
