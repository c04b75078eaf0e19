mod backend;
mod errors;
mod factory;
mod local;
mod object_store;

#[cfg(feature = "s3")]
mod s3;

pub use backend::StorageBackend;
pub use errors::*;
pub use factory::build_backend;
pub use local::DirectoryBackend;
pub use object_store::{ObjectClient, ObjectStoreBackend};

#[cfg(feature = "s3")]
pub use s3::S3Client;
