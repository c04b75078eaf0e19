use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// An already-parsed upload: a local temp file plus its declared MIME type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub path: PathBuf,
    pub content_type: String,
}

impl UploadedFile {
    pub fn new(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: content_type.into(),
        }
    }
}

/// Which transform produces a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Resize,
    Crop,
}

impl VariantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::Crop => "crop",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A variant that made it to the storage backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredVariant {
    pub name: String,
    pub kind: VariantKind,
    pub url: String,
}

/// A variant that failed to render or store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantFailure {
    pub name: String,
    pub kind: VariantKind,
    pub error: String,
}

impl fmt::Display for VariantFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}': {}", self.kind, self.name, self.error)
    }
}
