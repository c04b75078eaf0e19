use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { resize_count: usize, crop_count: usize },

    // Storage
    StorageReady { kind: String, location: String, remote: bool },

    // Uploads
    UploadStarted { source: String, name: String },
    VariantStored { variant: String, url: String },
    VariantFailed { variant: String, error: String },
    UploadCompleted { name: String, stored: usize, failed: usize, duration: Duration },

    // Removal
    RemoveCompleted { name: String, removed: usize, failed: usize },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
