use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Could not read JSON config at {0}")]
    ConfigNotFound(String),

    #[error("Could not parse JSON config at {path}: {source}")]
    ConfigParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No storage defined in config: {0}")]
    MissingStorageConfig(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
