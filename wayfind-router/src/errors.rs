use thiserror::Error;

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum RouterError {
    #[error("Unsupported metric {0:?}, expected \"distance\" or \"time\"")]
    InvalidMetric(String),
}

#[derive(Error, Debug)]
pub(crate) enum LoadError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot root must be a mapping from node to outgoing edges")]
    NotAMapping,
}
