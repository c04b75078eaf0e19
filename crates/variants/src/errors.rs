use picstash_config::ConfigError;
use picstash_models::{StoredVariant, VariantFailure};
use picstash_storage::StorageError;
use picstash_utils::NamingError;
use thiserror::Error;

/// Construction failures; nothing has been touched when these occur
#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{} variant(s) of '{name}' failed: {}", .failures.len(), summarize(.failures))]
    Variants {
        name: String,
        stored: Vec<StoredVariant>,
        failures: Vec<VariantFailure>,
    },
}

#[derive(Error, Debug)]
pub enum RemoveError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] NamingError),

    #[error("{} variant(s) of '{name}' could not be removed: {}", .failures.len(), summarize(.failures))]
    Variants {
        name: String,
        failures: Vec<VariantFailure>,
    },
}

fn summarize(failures: &[VariantFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
