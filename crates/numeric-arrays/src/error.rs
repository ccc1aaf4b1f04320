use std::error::Error;
use std::fmt;

/// Errors raised at the fallible boundaries of the array types
/// (buffer/ndarray conversions and type-tagged deserialization).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    LengthMismatch { expected: usize, found: usize },
    TypeMismatch { expected: String, found: String },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArrayError::LengthMismatch { expected, found } => write!(
                f,
                "source length {} does not fit an array of {} elements",
                found, expected
            ),
            ArrayError::TypeMismatch { expected, found } => {
                write!(f, "type name mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl Error for ArrayError {}
