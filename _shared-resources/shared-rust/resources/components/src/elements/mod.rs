// GUI Elements module
// Visual components that render the tab bar

pub mod tab_bar;
pub mod tab_button;

pub use tab_bar::*;
pub use tab_button::*;
