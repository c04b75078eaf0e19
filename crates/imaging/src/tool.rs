use crate::ImagingError;
use picstash_config::SizeSpec;
use picstash_models::VariantKind;
use std::path::PathBuf;

/// Output quality as a 0..1 factor
pub const DEFAULT_QUALITY: f32 = 0.7;

/// One render job: read `src`, write a `size` variant to `dst`
#[derive(Debug, Clone)]
pub struct TransformParams {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub size: SizeSpec,
    pub quality: f32,
}

impl TransformParams {
    pub fn new(src: impl Into<PathBuf>, dst: impl Into<PathBuf>, size: SizeSpec) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            size,
            quality: DEFAULT_QUALITY,
        }
    }

    /// Rejects sizes no tool can produce
    pub fn check(&self) -> Result<(), ImagingError> {
        if self.size.is_empty() {
            return Err(ImagingError::InvalidSize(self.size.to_string()));
        }
        Ok(())
    }

    /// Quality as the 1..=100 integer encoders expect
    pub fn quality_percent(&self) -> u8 {
        (self.quality * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

/// Executes resize and crop transforms
#[async_trait::async_trait]
pub trait ImageTool: Send + Sync {
    /// Renders `params.src` into `params.dst` at exactly `params.size`.
    /// Both operations fill the target box around the image center.
    async fn apply(&self, kind: VariantKind, params: &TransformParams) -> Result<(), ImagingError>;

    fn name(&self) -> &'static str;
}
