// Tab bar error types

/// Error type for tab bar operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TabBarError {
    /// Selection index is not within the current tab list
    #[error("selected index {index} is out of bounds for {count} tab(s)")]
    InvalidSelection { index: usize, count: usize },
}

/// Result alias for tab bar operations
pub type TabBarResult<T> = Result<T, TabBarError>;

/// Check `index` against a tab count
pub fn check_selection(index: usize, count: usize) -> TabBarResult<()> {
    if index < count {
        Ok(())
    } else {
        Err(TabBarError::InvalidSelection { index, count })
    }
}
