// Managers module
// Provides OOP-style manager wrappers for TUI components

pub mod tab_bar;

pub use tab_bar::TabBarManager;

// Re-export YAML configuration types from tab_bar module
pub use tab_bar::{
    TabBarConfigYaml,
    TabConfigYaml,
    convert_styling,
    create_descriptors,
    create_tab_bar_from_config,
    parse_title_font,
};
