use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating the temporary directory or writing the seed file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The seed config could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
