use crate::pipeline::VariantPipeline;
use crate::{RemoveError, SetupError, UploadError};
use futures::future::join_all;
use picstash_config::{Config, StorageKind};
use picstash_events::{AppEvent, EventBus};
use picstash_imaging::{ImageTool, NativeTool};
use picstash_models::{UploadedFile, VariantFailure, VariantKind};
use picstash_storage::{build_backend, StorageBackend};
use picstash_utils::{naming, NamingError};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Upload, removal and URL entry points over one configured backend
pub struct Picstash {
    config: Arc<Config>,
    storage: Arc<dyn StorageBackend>,
    pipeline: VariantPipeline,
    events: Arc<EventBus>,
}

impl Picstash {
    /// Builds the service with the backend selected by `kind` and the
    /// in-process image tool
    pub async fn new(config: Config, kind: StorageKind) -> Result<Self, SetupError> {
        Self::with_events(config, kind, EventBus::silent()).await
    }

    pub async fn with_events(
        config: Config,
        kind: StorageKind,
        events: Arc<EventBus>,
    ) -> Result<Self, SetupError> {
        Self::with_tool(config, kind, Arc::new(NativeTool::new()), events).await
    }

    /// Builds the service with the backend selected by `kind` rendering
    /// through `tool`
    pub async fn with_tool(
        config: Config,
        kind: StorageKind,
        tool: Arc<dyn ImageTool>,
        events: Arc<EventBus>,
    ) -> Result<Self, SetupError> {
        let storage = build_backend(config.storage_for(kind)?).await?;

        events.emit(AppEvent::StorageReady {
            kind: kind.to_string(),
            location: storage.url_for("/"),
            remote: storage.is_remote(),
        });

        Ok(Self::with_parts(config, storage, tool, events))
    }

    /// Loads the JSON config at `path` and builds the service from it
    pub async fn from_config_file<P: AsRef<Path>>(
        path: P,
        kind: StorageKind,
    ) -> Result<Self, SetupError> {
        let config = Config::from_file(path).await?;
        Self::new(config, kind).await
    }

    pub fn with_parts(
        config: Config,
        storage: Arc<dyn StorageBackend>,
        tool: Arc<dyn ImageTool>,
        events: Arc<EventBus>,
    ) -> Self {
        tracing::debug!(
            "Using {} image tool with {} storage",
            tool.name(),
            storage.kind()
        );

        let config = Arc::new(config);
        let pipeline = VariantPipeline::new(
            Arc::clone(&config),
            Arc::clone(&storage),
            tool,
            Arc::clone(&events),
        );

        Self {
            config,
            storage,
            pipeline,
            events,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &Arc<dyn StorageBackend> {
        &self.storage
    }

    /// Generates and stores every variant of `file`, returning the base name
    pub async fn upload(&self, file: &UploadedFile) -> Result<String, UploadError> {
        if file.path.as_os_str().is_empty() {
            return Err(UploadError::InvalidArgument("upload has no file path".to_string()));
        }
        if !tokio::fs::try_exists(&file.path).await.unwrap_or(false) {
            return Err(UploadError::InvalidArgument(format!(
                "uploaded file {} does not exist",
                file.path.display()
            )));
        }

        self.pipeline.make_variants(file).await
    }

    /// Deletes every configured variant of `name` concurrently
    pub async fn remove(&self, name: &str) -> Result<(), RemoveError> {
        let targets = self
            .variants()
            .map(|(kind, variant)| naming::shard(name, variant).map(|dest| (kind, variant, dest)))
            .collect::<Result<Vec<_>, NamingError>>()?;

        let removals = targets
            .iter()
            .map(|(_, _, dest)| self.storage.remove(dest));
        let results = join_all(removals).await;

        let mut failures = Vec::new();
        for ((kind, variant, dest), result) in targets.iter().zip(results) {
            if let Err(e) = result {
                tracing::warn!("Failed to remove {}: {}", dest, e);
                failures.push(VariantFailure {
                    name: variant.to_string(),
                    kind: *kind,
                    error: e.to_string(),
                });
            }
        }

        self.events.emit(AppEvent::RemoveCompleted {
            name: name.to_string(),
            removed: targets.len() - failures.len(),
            failed: failures.len(),
        });

        if failures.is_empty() {
            Ok(())
        } else {
            Err(RemoveError::Variants {
                name: name.to_string(),
                failures,
            })
        }
    }

    /// Public URL of one variant of `name`
    pub fn url(&self, name: &str, variant: &str) -> Result<String, NamingError> {
        let dest = naming::shard(name, variant)?;
        Ok(self.storage.url_for(&dest))
    }

    /// Public URLs of every configured variant of `name`
    pub fn urls(&self, name: &str) -> Result<BTreeMap<String, String>, NamingError> {
        self.variants()
            .map(|(_, variant)| self.url(name, variant).map(|url| (variant.to_string(), url)))
            .collect()
    }

    fn variants(&self) -> impl Iterator<Item = (VariantKind, &str)> {
        let resize = self.config.variants.resize.keys().map(|v| (VariantKind::Resize, v.as_str()));
        let crop = self.config.variants.crop.keys().map(|v| (VariantKind::Crop, v.as_str()));
        resize.chain(crop)
    }
}
