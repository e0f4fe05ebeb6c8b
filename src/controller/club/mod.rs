pub mod data_service;
pub mod http_handlers;

pub use data_service::*;
