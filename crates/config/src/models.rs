use super::size::SizeSpec;
use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub storage: StorageSettings,
    pub variants: VariantSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<DirSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsSettings>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirSettings {
    pub path: String,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct AwsSettings {
    pub key: String,
    pub secret: String,
    pub bucket: String,
    #[serde(default = "super::defaults::aws_region")]
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

// Keep the secret out of logs
impl fmt::Debug for AwsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsSettings")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VariantSettings {
    pub resize: BTreeMap<String, SizeSpec>,
    pub crop: BTreeMap<String, SizeSpec>,
}

/// Which configured backend a process writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Dir,
    Aws,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dir => "dir",
            Self::Aws => "aws",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dir" => Ok(Self::Dir),
            "aws" => Ok(Self::Aws),
            other => Err(ConfigError::InvalidConfig(format!(
                "unknown storage type '{}', expected 'dir' or 'aws'",
                other
            ))),
        }
    }
}

/// Settings of the backend chosen for this process
#[derive(Debug, Clone, Copy)]
pub enum SelectedStorage<'a> {
    Dir(&'a DirSettings),
    Aws(&'a AwsSettings),
}

impl Config {
    /// Returns the settings for `kind`, failing if that section is absent
    pub fn storage_for(&self, kind: StorageKind) -> Result<SelectedStorage<'_>, ConfigError> {
        match kind {
            StorageKind::Dir => self
                .storage
                .dir
                .as_ref()
                .map(SelectedStorage::Dir)
                .ok_or_else(|| ConfigError::MissingStorageConfig("no 'dir' section".to_string())),
            StorageKind::Aws => self
                .storage
                .aws
                .as_ref()
                .map(SelectedStorage::Aws)
                .ok_or_else(|| ConfigError::MissingStorageConfig("no 'aws' section".to_string())),
        }
    }

    /// Every configured variant name, resize variants first
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants
            .resize
            .keys()
            .chain(self.variants.crop.keys())
            .map(String::as_str)
    }

    /// Names configured under both `resize` and `crop`
    pub fn shared_variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants
            .resize
            .keys()
            .filter(|name| self.variants.crop.contains_key(*name))
            .map(String::as_str)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.dir.is_none() && self.storage.aws.is_none() {
            return Err(ConfigError::MissingStorageConfig(
                "expected a 'dir' or 'aws' section".to_string(),
            ));
        }

        if let Some(dir) = &self.storage.dir {
            if dir.path.trim().is_empty() {
                return Err(ConfigError::InvalidConfig("storage.dir.path is empty".to_string()));
            }
        }

        if let Some(aws) = &self.storage.aws {
            if aws.bucket.trim().is_empty() {
                return Err(ConfigError::InvalidConfig("storage.aws.bucket is empty".to_string()));
            }
        }

        for name in self.variant_names() {
            if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
                return Err(ConfigError::InvalidConfig(format!(
                    "variant name '{}' must be a plain file name segment",
                    name
                )));
            }
        }

        for name in self.shared_variant_names() {
            tracing::warn!(
                "Variant '{}' is both a resize and a crop; they share one stored file and the crop replaces the resize",
                name
            );
        }

        Ok(())
    }
}
