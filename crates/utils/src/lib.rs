pub mod errors;
pub mod naming;

pub use errors::*;
pub use naming::*;
