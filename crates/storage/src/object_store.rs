use crate::backend::StorageBackend;
use crate::StorageError;
use bytes::Bytes;
use picstash_config::StorageKind;
use picstash_filesystem::FileSystem;
use std::path::Path;

/// Minimal remote object-store client surface used by [`ObjectStoreBackend`]
#[async_trait::async_trait]
pub trait ObjectClient: Send + Sync {
    /// Upload `body` under `key`; implementations send content length and type
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError>;

    async fn delete_file(&self, key: &str) -> Result<(), StorageError>;

    /// Public URL of `key`
    fn url(&self, key: &str) -> String;
}

/// Remote object-store backend
///
/// Rendered variants are pushed from their local scratch file and the scratch
/// file is deleted once the store acknowledges the upload. A failed upload
/// leaves the scratch file in place so it can be recovered by hand.
pub struct ObjectStoreBackend<C> {
    client: C,
}

impl<C: ObjectClient> ObjectStoreBackend<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn key(dest: &str) -> &str {
        dest.trim_start_matches('/')
    }
}

#[async_trait::async_trait]
impl<C: ObjectClient> StorageBackend for ObjectStoreBackend<C> {
    async fn store(
        &self,
        local_path: &Path,
        dest: &str,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let key = Self::key(dest);
        let body = Bytes::from(tokio::fs::read(local_path).await?);

        tracing::debug!("Pushing {} ({} bytes, {})", key, body.len(), content_type);

        if let Err(e) = self.client.put(key, body, content_type).await {
            tracing::warn!(
                "Upload of {} failed, keeping local copy at {}: {}",
                key,
                local_path.display(),
                e
            );
            return Err(e);
        }

        if let Err(e) = FileSystem::remove_if_exists(local_path).await {
            tracing::warn!("Could not remove {}: {}", local_path.display(), e);
        }

        Ok(self.client.url(key))
    }

    async fn remove(&self, dest: &str) -> Result<(), StorageError> {
        self.client.delete_file(Self::key(dest)).await
    }

    fn url_for(&self, dest: &str) -> String {
        self.client.url(Self::key(dest))
    }

    fn is_remote(&self) -> bool {
        true
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Aws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryClient {
        objects: Mutex<HashMap<String, (Bytes, String)>>,
        fail_puts: bool,
    }

    #[async_trait::async_trait]
    impl ObjectClient for MemoryClient {
        async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError> {
            if self.fail_puts {
                return Err(StorageError::UploadError {
                    key: key.to_string(),
                    reason: "503 Service Unavailable".to_string(),
                });
            }
            self.objects
                .lock()
                .unwrap()
                .insert(key.to_string(), (body, content_type.to_string()));
            Ok(())
        }

        async fn delete_file(&self, key: &str) -> Result<(), StorageError> {
            self.objects.lock().unwrap().remove(key);
            Ok(())
        }

        fn url(&self, key: &str) -> String {
            format!("https://bucket.example/{}", key)
        }
    }

    #[tokio::test]
    async fn test_store_uploads_and_cleans_scratch() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("scratch.jpg");
        tokio::fs::write(&local, b"pixels").await.unwrap();

        let backend = ObjectStoreBackend::new(MemoryClient::default());
        let url = backend.store(&local, "/ab12/thumb_ab12.jpg", "image/jpeg").await.unwrap();

        assert_eq!(url, "https://bucket.example/ab12/thumb_ab12.jpg");
        assert!(!local.exists());

        let objects = backend.client().objects.lock().unwrap();
        let (body, content_type) = &objects["ab12/thumb_ab12.jpg"];
        assert_eq!(&body[..], b"pixels");
        assert_eq!(content_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_failed_upload_keeps_scratch_file() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("scratch.jpg");
        tokio::fs::write(&local, b"pixels").await.unwrap();

        let backend = ObjectStoreBackend::new(MemoryClient {
            fail_puts: true,
            ..Default::default()
        });
        let err = backend.store(&local, "/ab12/thumb_ab12.jpg", "image/jpeg").await.unwrap_err();

        assert!(matches!(err, StorageError::UploadError { .. }));
        assert!(local.exists());
    }

    #[tokio::test]
    async fn test_remove_deletes_remote_key() {
        let client = MemoryClient::default();
        client.objects.lock().unwrap().insert(
            "ab12/v_ab12.jpg".to_string(),
            (Bytes::from_static(b"x"), "image/jpeg".to_string()),
        );
        let backend = ObjectStoreBackend::new(client);

        backend.remove("/ab12/v_ab12.jpg").await.unwrap();
        backend.remove("/ab12/v_ab12.jpg").await.unwrap();
        assert!(backend.client().objects.lock().unwrap().is_empty());
        assert!(backend.is_remote());
        assert_eq!(backend.url_for("/ab12/v_ab12.jpg"), "https://bucket.example/ab12/v_ab12.jpg");
    }
}
