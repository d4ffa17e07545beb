// errors.rs
use crate::payload::DatasetError;
use thiserror::Error;

/// Misuse of the viewer API. Data-shape problems never end up here.
#[derive(Debug, Error, PartialEq)]
pub enum ViewerError {
    #[error("no dataset loaded")]
    NotLoaded,
    #[error("unknown sort key '{0}'")]
    InvalidSortKey(String),
    #[error("unknown sort direction '{0}'")]
    InvalidSortDirection(String),
    #[error("unknown amenity '{0}'")]
    InvalidAmenity(String),
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Errors originating from either the server logic
/// (routing, bad query strings) or downstream layers (dataset, export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Dataset Error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl From<ViewerError> for ServerError {
    fn from(err: ViewerError) -> Self {
        match err {
            // The server always loads before serving, so this is our bug.
            ViewerError::NotLoaded => ServerError::InternalError,
            other => ServerError::BadRequest(other.to_string()),
        }
    }
}
