pub mod cli;
pub mod journey;
pub mod metadata;
pub mod server;
pub mod service;

mod app_config;
mod app_error;

pub use app_config::{AppConfig, QueryConfig};
pub use app_error::AppError;
