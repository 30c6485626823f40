use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expected exactly {expected} operands, got {actual}")]
    OperandCount { expected: usize, actual: usize },
}
