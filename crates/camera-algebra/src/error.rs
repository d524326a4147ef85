use thiserror::Error;

/// Error type for the checked constructors of the algebra types.
#[derive(Debug, Error, PartialEq)]
pub enum AlgebraError {
    /// The input slice does not hold exactly one value per matrix cell.
    #[error("slice has wrong length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// The projection parameters would produce non-finite matrix cells.
    #[error("degenerate projection: {0}")]
    DegenerateProjection(String),
}
