use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to decode '{0}': {1}")]
    Decode(String, String),

    #[error("Failed to encode '{0}': {1}")]
    Encode(String, String),

    #[error("{program} exited with code {code:?}: {stderr}")]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Cannot render to an empty size {0}")]
    InvalidSize(String),

    #[error("Image task aborted: {0}")]
    Join(String),
}
