use crate::backend::StorageBackend;
use crate::local::DirectoryBackend;
use crate::StorageError;
use picstash_config::SelectedStorage;
use std::sync::Arc;

/// Builds the single backend a service instance writes to
pub async fn build_backend(
    selected: SelectedStorage<'_>,
) -> Result<Arc<dyn StorageBackend>, StorageError> {
    match selected {
        SelectedStorage::Dir(dir) => {
            tracing::info!("Initialized directory storage backend: path={}", dir.path);
            Ok(Arc::new(DirectoryBackend::new(dir.path.clone())) as Arc<dyn StorageBackend>)
        }
        #[cfg(feature = "s3")]
        SelectedStorage::Aws(aws) => {
            let client = crate::s3::S3Client::new(aws).await?;
            tracing::info!(
                "Initialized S3 storage backend: bucket={}, region={}",
                aws.bucket,
                aws.region
            );
            Ok(Arc::new(crate::object_store::ObjectStoreBackend::new(client))
                as Arc<dyn StorageBackend>)
        }
        #[cfg(not(feature = "s3"))]
        SelectedStorage::Aws(_) => Err(StorageError::ConfigError(
            "aws storage selected but not compiled. Rebuild with --features s3 to enable S3 support."
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picstash_config::{Config, StorageKind};

    #[tokio::test]
    async fn test_build_dir_backend() {
        let config = Config::from_json(
            r#"{ "storage": { "dir": { "path": "/tmp/up" } },
                 "variants": { "resize": {}, "crop": {} } }"#,
        )
        .unwrap();
        let backend = build_backend(config.storage_for(StorageKind::Dir).unwrap())
            .await
            .unwrap();
        assert_eq!(backend.kind(), StorageKind::Dir);
        assert_eq!(backend.url_for("/ab/c"), "/tmp/up/ab/c");
    }

    #[cfg(not(feature = "s3"))]
    #[tokio::test]
    async fn test_aws_without_feature_is_config_error() {
        let config = Config::from_json(
            r#"{ "storage": { "aws": { "key": "k", "secret": "s", "bucket": "b" } },
                 "variants": { "resize": {}, "crop": {} } }"#,
        )
        .unwrap();
        let result = build_backend(config.storage_for(StorageKind::Aws).unwrap()).await;
        assert!(matches!(result, Err(StorageError::ConfigError(_))));
    }
}
