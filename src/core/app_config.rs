// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level settings for custom-tab-bar
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// UI and display settings
    pub ui: UiSettings,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Enable mouse support
    pub mouse_enabled: bool,

    /// Frame interval while animating
    pub tick_rate: Duration,

    /// Event wait while idle
    pub idle_poll: Duration,

    /// Maximum level written to the log file
    pub log_level: LevelFilter,

    /// Log file path (the terminal belongs to the UI)
    pub log_file: PathBuf,

    /// Number of selection events kept for display
    pub event_log_capacity: usize,
}

/// Parse a level name, falling back to `Info`
pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
            tick_rate: Duration::from_millis(compiled::TICK_RATE_MS),
            idle_poll: Duration::from_millis(compiled::IDLE_POLL_MS),
            log_level: parse_level(compiled::LOG_LEVEL),
            log_file: PathBuf::from(compiled::LOG_FILE),
            event_log_capacity: compiled::EVENT_LOG_CAPACITY,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
    }
}
