use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("File name is empty")]
    EmptyName,

    #[error("Invalid name '{0}': path separators and '..' are not allowed")]
    InvalidName(String),
}
