use thiserror::Error;

/// Why a single operation refused to produce a value.
///
/// A rejection prunes one candidate and nothing else.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("Difference would be negative")]
    NegativeDifference,
    #[error("Division by zero")]
    DivisionByZero,
}
