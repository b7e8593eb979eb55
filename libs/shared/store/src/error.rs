use thiserror::Error;

use shared_models::AppError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access item data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed item data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("timed out accessing item data")]
    Timeout,
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Source(err.to_string())
    }
}
