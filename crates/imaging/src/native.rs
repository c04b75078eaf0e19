use crate::tool::{ImageTool, TransformParams};
use crate::ImagingError;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use picstash_models::VariantKind;
use std::io::{BufWriter, Write};
use std::path::Path;

/// In-process image tool backed by the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTool;

impl NativeTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ImageTool for NativeTool {
    async fn apply(&self, kind: VariantKind, params: &TransformParams) -> Result<(), ImagingError> {
        params.check()?;
        let params = params.clone();
        tokio::task::spawn_blocking(move || render(kind, &params))
            .await
            .map_err(|e| ImagingError::Join(e.to_string()))?
    }

    fn name(&self) -> &'static str {
        "native"
    }
}

fn render(kind: VariantKind, params: &TransformParams) -> Result<(), ImagingError> {
    // Upload temp files rarely carry an extension, so sniff the content
    let bytes = std::fs::read(&params.src)?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| ImagingError::Decode(params.src.display().to_string(), e.to_string()))?;

    let (width, height) = (params.size.width, params.size.height);
    let output = match kind {
        VariantKind::Resize => img.resize_to_fill(width, height, FilterType::Lanczos3),
        VariantKind::Crop => center_crop(&img, width, height),
    };

    write_image(&output, &params.dst, params.quality_percent())?;
    tracing::debug!(
        "Rendered {} {} -> {}",
        kind,
        params.size,
        params.dst.display()
    );
    Ok(())
}

/// Cuts the largest centered region with the target aspect ratio, then scales it
fn center_crop(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (src_w, src_h) = (img.width() as u64, img.height() as u64);
    let (w, h) = (width as u64, height as u64);

    let (crop_w, crop_h) = if src_w * h > src_h * w {
        ((src_h * w / h).max(1), src_h)
    } else {
        (src_w, (src_w * h / w).max(1))
    };
    let x = (src_w - crop_w) / 2;
    let y = (src_h - crop_h) / 2;

    img.crop_imm(x as u32, y as u32, crop_w as u32, crop_h as u32)
        .resize_exact(width, height, FilterType::Triangle)
}

fn write_image(img: &DynamicImage, dst: &Path, quality: u8) -> Result<(), ImagingError> {
    let encode_err = |e: image::ImageError| ImagingError::Encode(dst.display().to_string(), e.to_string());
    let format = ImageFormat::from_path(dst).unwrap_or(ImageFormat::Jpeg);

    let mut writer = BufWriter::new(std::fs::File::create(dst)?);
    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
            DynamicImage::ImageRgb8(img.to_rgb8())
                .write_with_encoder(encoder)
                .map_err(encode_err)?;
        }
        other => img.write_to(&mut writer, other).map_err(encode_err)?,
    }
    writer.flush()?;
    Ok(())
}
