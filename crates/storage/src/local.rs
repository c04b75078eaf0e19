use crate::backend::StorageBackend;
use crate::StorageError;
use picstash_config::StorageKind;
use picstash_filesystem::FileSystem;
use std::path::{Path, PathBuf};

/// Local directory storage backend
pub struct DirectoryBackend {
    base: String,
    base_path: PathBuf,
}

impl DirectoryBackend {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        let base_path = PathBuf::from(if base.is_empty() { "/" } else { base.as_str() });
        Self { base, base_path }
    }

    fn resolve(&self, dest: &str) -> PathBuf {
        self.base_path.join(dest.trim_start_matches('/'))
    }
}

#[async_trait::async_trait]
impl StorageBackend for DirectoryBackend {
    async fn store(
        &self,
        local_path: &Path,
        dest: &str,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        let target = self.resolve(dest);
        FileSystem::move_file(local_path, &target).await?;
        tracing::debug!("Stored {} at {}", dest, target.display());
        Ok(self.url_for(dest))
    }

    async fn remove(&self, dest: &str) -> Result<(), StorageError> {
        let target = self.resolve(dest);
        if !FileSystem::remove_if_exists(&target).await? {
            tracing::debug!("Nothing to remove at {}", target.display());
        }
        Ok(())
    }

    fn url_for(&self, dest: &str) -> String {
        format!("{}{}", self.base, dest)
    }

    fn is_remote(&self) -> bool {
        false
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Dir
    }
}
