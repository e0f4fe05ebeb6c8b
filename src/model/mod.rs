pub mod summary;
pub mod types;

pub use summary::*;
pub use types::*;
