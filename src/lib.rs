// Custom Tab Bar Library
// Host application for the animated underline tab bar widget

// Core infrastructure - app state, compiled settings, events
pub mod core;

// Runtime configuration loading and validation
pub mod config;
pub mod config_validation;

// File logging backend
pub mod logger;

// UI rendering functions
pub mod render;

// Re-export commonly used items for convenience
pub use core::{App, AppEvent, AppSettings, EventHandler};
pub use config::AppConfig;
pub use config_validation::load_and_validate_config;
pub use logger::FileLogger;
