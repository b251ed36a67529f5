//! Opens a window and draws a single triangle with wgpu.

pub mod app;
pub mod config;
pub mod engine;
pub mod logging;

pub use app::{run, App};
pub use config::AppConfig;
