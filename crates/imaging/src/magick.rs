use crate::tool::{ImageTool, TransformParams};
use crate::ImagingError;
use picstash_models::VariantKind;
use tokio::process::Command;

/// Image tool that shells out to ImageMagick's `convert`
#[derive(Debug, Clone)]
pub struct MagickTool {
    program: String,
}

impl Default for MagickTool {
    fn default() -> Self {
        Self::new("convert")
    }
}

impl MagickTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command line for one transform, excluding the program name
    pub fn build_args(kind: VariantKind, params: &TransformParams) -> Vec<String> {
        let size = params.size.to_string();
        let fill = format!("{}^", size);
        let crop = format!("{}+0+0", size);
        let quality = params.quality_percent().to_string();
        let src = params.src.to_string_lossy();
        let dst = params.dst.to_string_lossy();

        let ops: Vec<&str> = match kind {
            VariantKind::Resize => vec![
                "-quality", quality.as_str(), "-gravity", "center", "-extent", size.as_str(),
            ],
            VariantKind::Crop => vec![
                "-gravity", "center", "-crop", crop.as_str(), "+repage", "-quality", quality.as_str(),
            ],
        };

        std::iter::once(&*src)
            .chain(["-resize", fill.as_str()])
            .chain(ops)
            .chain(std::iter::once(&*dst))
            .map(String::from)
            .collect()
    }
}

#[async_trait::async_trait]
impl ImageTool for MagickTool {
    async fn apply(&self, kind: VariantKind, params: &TransformParams) -> Result<(), ImagingError> {
        params.check()?;
        let args = Self::build_args(kind, params);
        tracing::debug!("Executing {} {:?}", self.program, args);

        let output = Command::new(&self.program).args(&args).output().await?;

        if !output.status.success() {
            return Err(ImagingError::CommandFailed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "imagemagick"
    }
}
