mod defaults;
mod errors;
mod loader;
mod models;
mod size;

pub use defaults::{DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE};
pub use errors::ConfigError;
pub use models::*;
pub use size::SizeSpec;
