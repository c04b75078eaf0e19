mod errors;
mod pipeline;
mod service;

pub use errors::{RemoveError, SetupError, UploadError};
pub use pipeline::VariantPipeline;
pub use service::Picstash;
