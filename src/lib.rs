pub mod args;
pub mod controller;
pub mod error;
pub mod log;
pub mod model;
pub mod storage;

pub use error::CoreError;
pub use storage::{SqliteStorage, Storage, StorageError};
