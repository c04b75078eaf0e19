mod errors;
mod magick;
mod native;
mod tool;

pub use errors::ImagingError;
pub use magick::MagickTool;
pub use native::NativeTool;
pub use tool::{ImageTool, TransformParams, DEFAULT_QUALITY};
