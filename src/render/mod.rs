// Render module - UI rendering functions

pub mod content;
pub mod layout;

pub use content::{content_lines, render_content};
pub use layout::{render_bindings, render_status_bar, render_title};
