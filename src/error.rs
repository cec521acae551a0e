use thiserror::Error;

/// Failures raised by a catalog store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid seed record '{name}': {reason}")]
    InvalidSeed { name: String, reason: String },

    #[error("Catalog lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum PlannerError {
    /// The catalog could not be read or seeded.
    #[error("Catalog storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PlannerError {
    /// True when the failure came from the catalog store rather than the caller.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, PlannerError::StorageUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
