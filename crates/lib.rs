// Re-export all public APIs from the workspace crates

pub use picstash_models::*;
pub use picstash_events::*;
pub use picstash_utils::*;
pub use picstash_filesystem::*;
pub use picstash_config::*;
pub use picstash_storage::*;
pub use picstash_imaging::*;
pub use picstash_variants::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Core models
    pub use picstash_models::{UploadedFile, VariantKind};

    // Configuration
    pub use picstash_config::{Config, SizeSpec, StorageKind};

    // Storage
    pub use picstash_storage::StorageBackend;

    // Imaging
    pub use picstash_imaging::{ImageTool, NativeTool};

    // Service
    pub use picstash_variants::Picstash;
}
