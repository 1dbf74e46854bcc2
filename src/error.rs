//! Error types
//!
//! Every fallible list operation addresses an item by position, so the crate
//! has exactly one failure mode.

/// Errors produced by [`TodoList`](crate::TodoList) operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoListError {
    #[error("index {index} out of range for list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Shorthand for results carrying a [`TodoListError`]
pub type Result<T, E = TodoListError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = TodoListError::IndexOutOfRange { index: 3, size: 3 };
        assert_eq!(err.to_string(), "index 3 out of range for list of size 3");
    }
}
