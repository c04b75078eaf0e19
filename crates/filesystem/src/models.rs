/// Namespace for the local file operations shared by the storage and pipeline crates
pub struct FileSystem;
