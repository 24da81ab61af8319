//! Configuration domain module

mod app_config;

pub use app_config::{AppConfig, DEFAULT_API_KEY, DEFAULT_BASE_URL};
