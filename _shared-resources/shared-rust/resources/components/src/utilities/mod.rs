// Utilities module
// Helper functions and quality of life utilities

pub mod helpers;

pub use helpers::*;
