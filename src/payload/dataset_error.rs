use std::path::PathBuf;
use thiserror::Error;

/// Failures that reject a payload as a whole. Individual bad records are
/// never reported here; they are skipped or coerced during ingestion.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
