use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Object store rejected upload of '{key}': {reason}")]
    UploadError { key: String, reason: String },

    #[error("Object store could not delete '{key}': {reason}")]
    DeleteError { key: String, reason: String },

    #[error("Invalid storage configuration: {0}")]
    ConfigError(String),
}
