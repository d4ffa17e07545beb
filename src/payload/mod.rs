mod dataset_error;
pub mod lenient;
mod loader;
pub mod models;

pub use dataset_error::DatasetError;
pub use loader::{load_file, parse_payload};
