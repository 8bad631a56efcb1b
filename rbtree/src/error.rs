//! Error handling and result types for RBTreeMap operations.
//!
//! Two recoverable error kinds cover the whole API surface: a missing key on
//! checked access, and misuse of a cursor (end position, foreign owner,
//! erased entry). Corruption reports exist only for the invariant-checking
//! machinery and are never produced by normal operations.

/// Error type for red-black tree map operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RBTreeError {
    /// Key not found in the map.
    KeyNotFound,
    /// A cursor was used in a way its owner cannot honor.
    InvalidCursor(String),
    /// Internal invariant violation detected by validation.
    CorruptedTree(String),
}

impl RBTreeError {
    /// Create an InvalidCursor error with operation context.
    pub fn invalid_cursor(operation: &str, details: &str) -> Self {
        Self::InvalidCursor(format!("{} failed: {}", operation, details))
    }

    /// Create a CorruptedTree error with context.
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is a missing-key error.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound)
    }

    /// Check if this error is a cursor-misuse error.
    pub fn is_invalid_cursor(&self) -> bool {
        matches!(self, Self::InvalidCursor(_))
    }
}

impl std::fmt::Display for RBTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RBTreeError::KeyNotFound => write!(f, "Key not found in map"),
            RBTreeError::InvalidCursor(msg) => write!(f, "Invalid cursor: {}", msg),
            RBTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for RBTreeError {}

/// Public result type for map operations that may fail
pub type TreeResult<T> = Result<T, RBTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, RBTreeError>;

/// Result type for cursor-driven operations
pub type CursorResult<T> = Result<T, RBTreeError>;
