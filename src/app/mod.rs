//! Application wiring: configuration and dependency injection.

pub mod config;
pub mod container;

pub use config::LearningConfig;
pub use container::{App, AppBuilder};
