use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkloadError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type WorkloadResult<T> = Result<T, WorkloadError>;
