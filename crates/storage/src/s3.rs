use crate::object_store::ObjectClient;
use crate::StorageError;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::{primitives::ByteStream, Client};
use bytes::Bytes;
use picstash_config::AwsSettings;

/// S3-compatible object client
/// Compatible with: AWS S3, Cloudflare R2, MinIO, DigitalOcean Spaces, etc.
pub struct S3Client {
    client: Client,
    bucket_name: String,
    endpoint: Option<String>,
}

impl S3Client {
    pub async fn new(settings: &AwsSettings) -> Result<Self, StorageError> {
        if settings.key.is_empty() || settings.secret.is_empty() {
            return Err(StorageError::ConfigError(
                "storage.aws.key and storage.aws.secret are required".to_string(),
            ));
        }

        let credentials = Credentials::new(
            settings.key.clone(),
            settings.secret.clone(),
            None,
            None,
            "picstash-s3",
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(settings.region.clone()));
        if let Some(endpoint) = &settings.endpoint {
            loader = loader.endpoint_url(endpoint.clone());
        }
        let sdk_config = loader.load().await;

        // Custom endpoints (MinIO and friends) generally need path-style addressing
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(settings.endpoint.is_some())
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket_name: settings.bucket.clone(),
            endpoint: settings.endpoint.as_ref().map(|e| e.trim_end_matches('/').to_string()),
        })
    }
}

#[async_trait::async_trait]
impl ObjectClient for S3Client {
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StorageError> {
        tracing::debug!("PUT s3://{}/{} ({})", self.bucket_name, key, content_type);

        let content_length = body.len() as i64;
        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .content_type(content_type)
            .content_length(content_length)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StorageError::UploadError {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }

    async fn delete_file(&self, key: &str) -> Result<(), StorageError> {
        tracing::debug!("DELETE s3://{}/{}", self.bucket_name, key);

        self.client
            .delete_object()
            .bucket(&self.bucket_name)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::DeleteError {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }

    fn url(&self, key: &str) -> String {
        match &self.endpoint {
            Some(endpoint) => format!("{}/{}/{}", endpoint, self.bucket_name, key),
            None => format!("https://{}.s3.amazonaws.com/{}", self.bucket_name, key),
        }
    }
}
