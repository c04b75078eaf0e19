use crate::StorageError;
use picstash_config::StorageKind;
use std::path::Path;

/// Storage backend trait for variant storage abstraction
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Moves a rendered local file to `dest`, returns its public URL
    async fn store(
        &self,
        local_path: &Path,
        dest: &str,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Delete a stored file. Missing files are not an error.
    async fn remove(&self, dest: &str) -> Result<(), StorageError>;

    /// Get public URL for a stored name
    fn url_for(&self, dest: &str) -> String;

    /// Check if backend is local or remote
    fn is_remote(&self) -> bool;

    fn kind(&self) -> StorageKind;
}
