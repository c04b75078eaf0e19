use crate::UploadError;
use futures::future::join_all;
use picstash_config::{Config, SizeSpec};
use picstash_events::{AppEvent, EventBus};
use picstash_filesystem::FileSystem;
use picstash_imaging::{ImageTool, TransformParams};
use picstash_models::{StoredVariant, UploadedFile, VariantFailure, VariantKind};
use picstash_storage::StorageBackend;
use picstash_utils::naming;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

/// Fans one upload out into every configured resize and crop variant
pub struct VariantPipeline {
    config: Arc<Config>,
    storage: Arc<dyn StorageBackend>,
    tool: Arc<dyn ImageTool>,
    events: Arc<EventBus>,
}

impl VariantPipeline {
    pub fn new(
        config: Arc<Config>,
        storage: Arc<dyn StorageBackend>,
        tool: Arc<dyn ImageTool>,
        events: Arc<EventBus>,
    ) -> Self {
        Self {
            config,
            storage,
            tool,
            events,
        }
    }

    /// Renders and stores every variant, then removes the source file.
    ///
    /// Resize variants run concurrently as one phase; crop variants start only
    /// once that phase has fully joined. A failing variant never stops its
    /// siblings, and every failure is reported in [`UploadError::Variants`].
    pub async fn make_variants(&self, file: &UploadedFile) -> Result<String, UploadError> {
        let started = Instant::now();
        let name = naming::base_name(naming::extension_for(&file.content_type));

        self.events.emit(AppEvent::UploadStarted {
            source: file.path.display().to_string(),
            name: name.clone(),
        });

        let mut stored = Vec::new();
        let mut failures = Vec::new();

        let phases: [(VariantKind, &BTreeMap<String, SizeSpec>); 2] = [
            (VariantKind::Resize, &self.config.variants.resize),
            (VariantKind::Crop, &self.config.variants.crop),
        ];

        for (kind, specs) in phases {
            let jobs = specs
                .iter()
                .map(|(variant, size)| self.run_job(file, &name, kind, variant, *size));

            for result in join_all(jobs).await {
                match result {
                    Ok(variant) => stored.push(variant),
                    Err(failure) => failures.push(failure),
                }
            }
            tracing::debug!("{} phase of {} joined", kind, name);
        }

        if let Err(e) = FileSystem::remove_if_exists(&file.path).await {
            tracing::warn!("Could not remove source {}: {}", file.path.display(), e);
        }

        self.events.emit(AppEvent::UploadCompleted {
            name: name.clone(),
            stored: stored.len(),
            failed: failures.len(),
            duration: started.elapsed(),
        });

        if failures.is_empty() {
            Ok(name)
        } else {
            Err(UploadError::Variants {
                name,
                stored,
                failures,
            })
        }
    }

    async fn run_job(
        &self,
        file: &UploadedFile,
        name: &str,
        kind: VariantKind,
        variant: &str,
        size: SizeSpec,
    ) -> Result<StoredVariant, VariantFailure> {
        let fail = |error: String| {
            self.events.emit(AppEvent::VariantFailed {
                variant: variant.to_string(),
                error: error.clone(),
            });
            VariantFailure {
                name: variant.to_string(),
                kind,
                error,
            }
        };

        let dest = naming::shard(name, variant).map_err(|e| fail(e.to_string()))?;
        let scratch = FileSystem::scratch_path(&file.path, kind.as_str(), &dest);
        let params = TransformParams::new(&file.path, &scratch, size);

        if let Err(e) = self.tool.apply(kind, &params).await {
            // Drop any partial output
            if let Err(io) = FileSystem::remove_if_exists(&scratch).await {
                tracing::debug!("Could not remove {}: {}", scratch.display(), io);
            }
            return Err(fail(e.to_string()));
        }

        let url = self
            .storage
            .store(&scratch, &dest, &file.content_type)
            .await
            .map_err(|e| fail(e.to_string()))?;

        self.events.emit(AppEvent::VariantStored {
            variant: variant.to_string(),
            url: url.clone(),
        });

        Ok(StoredVariant {
            name: variant.to_string(),
            kind,
            url,
        })
    }
}
