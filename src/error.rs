use std::result;
use thiserror::Error;

/// Errors surfaced by tree and node-handle operations.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum TreeError {
    /// An element was required but none was given.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A node that does not exist was requested.
    #[error("no such node: {0}")]
    NotFound(&'static str),
    /// The operation would break the balancing invariant of the tree.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::TreeError;

    #[test]
    fn test_display() {
        assert_eq!(
            TreeError::NotFound("node has no parent").to_string(),
            "no such node: node has no parent",
        );
        assert_eq!(
            TreeError::Unsupported("avl trees cannot be rotated by callers").to_string(),
            "unsupported operation: avl trees cannot be rotated by callers",
        );
    }
}
