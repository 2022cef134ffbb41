// Configuration loading module

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tab_bar_components::TabBarConfigYaml;

/// Copy of src/config.yaml built into the binary as the fallback configuration
pub const BUNDLED_CONFIG: &str = include_str!("config.yaml");

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    #[serde(rename = "tab_bars")]
    pub tab_bars: HashMap<String, TabBarConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    /// Key into `tab_bars` naming the bar to show
    #[serde(default = "default_tab_bar")]
    pub tab_bar: String,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
}

fn default_tab_bar() -> String {
    "main".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
}

impl AppConfig {
    /// Look up the tab bar named by `application.tab_bar`
    pub fn tab_bar_config(&self) -> Result<&TabBarConfigYaml> {
        let name = &self.application.tab_bar;
        self.tab_bars.get(name).with_context(|| {
            let mut available: Vec<&str> = self.tab_bars.keys().map(String::as_str).collect();
            available.sort_unstable();
            format!(
                "Tab bar '{}' not found in config. Available tab bars: {}",
                name,
                available.join(", ")
            )
        })
    }
}

/// src/config.yaml next to the manifest
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    serde_yaml::from_str(contents).context("Failed to parse configuration YAML")
}

pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let path = config_path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid config file {}", path.display()))
}
