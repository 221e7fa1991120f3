use std::fmt;

/// Error types for complex arithmetic
#[derive(Debug, PartialEq)]
pub enum ComplexError {
    InvalidArgument(String),
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexError::InvalidArgument(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ComplexError {}
