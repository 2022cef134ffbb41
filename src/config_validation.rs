// Configuration validation module

use crate::config::{load_config, parse_config, AppConfig, BUNDLED_CONFIG};
use anyhow::{bail, Result};
use std::path::Path;

/// Check the settings the tab bar cannot recover from on its own
pub fn validate_config(config: &AppConfig) -> Result<()> {
    let tab_bar = config.tab_bar_config()?;

    if let Some(selected) = tab_bar.selected {
        if selected >= tab_bar.tabs.len() {
            bail!(
                "Tab bar '{}' selects tab {} but only has {} tab(s)",
                config.application.tab_bar,
                selected,
                tab_bar.tabs.len()
            );
        }
    }
    if tab_bar.tabs.len() > 9 {
        log::warn!(
            "Tab bar '{}' has {} tabs; only the first 9 have number keys",
            config.application.tab_bar,
            tab_bar.tabs.len()
        );
    }
    Ok(())
}

/// Load and validate configuration with error recovery
///
/// A missing or invalid file falls back to the configuration built into the binary.
pub fn load_and_validate_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loaded = load_config(config_path).and_then(|config| {
        validate_config(&config)?;
        Ok(config)
    });

    match loaded {
        Ok(config) => Ok(config),
        Err(e) => {
            log::warn!("Failed to load configuration: {e:#}");
            log::warn!("Using built-in configuration");
            let config = parse_config(BUNDLED_CONFIG)?;
            validate_config(&config)?;
            Ok(config)
        }
    }
}
