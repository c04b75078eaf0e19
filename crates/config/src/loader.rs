use super::models::Config;
use super::ConfigError;
use std::path::Path;

impl Config {
    /// Loads configuration from a JSON file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        if !tokio::fs::try_exists(path).await? {
            return Err(ConfigError::ConfigNotFound(origin));
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::parse(&content, &origin)?;

        tracing::debug!(
            "Loaded config from {} ({} resize, {} crop)",
            origin,
            config.variants.resize.len(),
            config.variants.crop.len()
        );

        Ok(config)
    }

    /// Parses configuration from an in-memory JSON document
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Config =
            serde_json::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                path: origin.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SelectedStorage, SizeSpec, StorageKind};

    const DIR_CONFIG: &str = r#"{
        "storage": { "dir": { "path": "/tmp/up" } },
        "variants": {
            "resize": { "thumb": "100x100" },
            "crop": { "square": "50x50" }
        }
    }"#;

    #[test]
    fn test_parse_dir_config() {
        let config = Config::from_json(DIR_CONFIG).unwrap();
        assert_eq!(config.variants.resize["thumb"], SizeSpec::new(100, 100));
        assert_eq!(config.variants.crop["square"], SizeSpec::new(50, 50));
        assert!(matches!(
            config.storage_for(StorageKind::Dir).unwrap(),
            SelectedStorage::Dir(d) if d.path == "/tmp/up"
        ));
        assert_eq!(config.variant_names().collect::<Vec<_>>(), vec!["thumb", "square"]);
    }

    #[test]
    fn test_aws_region_default() {
        let config = Config::from_json(
            r#"{
                "storage": { "aws": { "key": "k", "secret": "s", "bucket": "b" } },
                "variants": { "resize": {}, "crop": {} }
            }"#,
        )
        .unwrap();
        let aws = config.storage.aws.as_ref().unwrap();
        assert_eq!(aws.region, "us-east-1");
        assert!(aws.endpoint.is_none());
        assert!(!format!("{:?}", aws).contains("\"s\""));
    }

    #[test]
    fn test_missing_storage_section() {
        let err = Config::from_json(r#"{ "storage": {}, "variants": { "resize": {}, "crop": {} } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingStorageConfig(_)));
    }

    #[test]
    fn test_selected_backend_must_be_configured() {
        let config = Config::from_json(DIR_CONFIG).unwrap();
        assert!(matches!(
            config.storage_for(StorageKind::Aws),
            Err(ConfigError::MissingStorageConfig(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_malformed_size_spec() {
        let err = Config::from_json(
            r#"{ "storage": { "dir": { "path": "/x" } },
                 "variants": { "resize": { "thumb": "big" }, "crop": {} } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_variants_required() {
        let err = Config::from_json(r#"{ "storage": { "dir": { "path": "/x" } } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_variant_name_must_be_plain() {
        let err = Config::from_json(
            r#"{ "storage": { "dir": { "path": "/x" } },
                 "variants": { "resize": { "../up": "1x1" }, "crop": {} } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }

    #[test]
    fn test_name_shared_between_resize_and_crop_loads() {
        let config = Config::from_json(
            r#"{ "storage": { "dir": { "path": "/x" } },
                 "variants": { "resize": { "thumb": "10x10", "wide": "20x10" },
                               "crop": { "thumb": "5x5" } } }"#,
        )
        .unwrap();
        assert_eq!(config.shared_variant_names().collect::<Vec<_>>(), vec!["thumb"]);
        assert_eq!(config.variant_names().count(), 3);
    }

    #[test]
    fn test_storage_kind_from_str() {
        assert_eq!("dir".parse::<StorageKind>().unwrap(), StorageKind::Dir);
        assert_eq!("AWS".parse::<StorageKind>().unwrap(), StorageKind::Aws);
        assert!("ftp".parse::<StorageKind>().is_err());
    }

    #[tokio::test]
    async fn test_from_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("missing.json")).await.unwrap_err();
        assert!(matches!(err, ConfigError::ConfigNotFound(_)));
    }

    #[tokio::test]
    async fn test_from_file_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        tokio::fs::write(&path, "storage = 1").await.unwrap();
        let err = Config::from_file(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[tokio::test]
    async fn test_from_file_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picstash.json");
        tokio::fs::write(&path, DIR_CONFIG).await.unwrap();
        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.variants.resize.len(), 1);
    }

    #[test]
    fn test_default_template_is_valid() {
        let config = Config::from_json(crate::DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(config.storage.dir.is_some());
    }
}
