pub mod code;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;
pub mod types;

pub use error::{ApiError, ApiResult};
