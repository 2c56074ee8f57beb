//! Error types for the mechanics engine.

/// Errors that can occur when building dice or roll parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A die face outside the d10 range.
    #[error("invalid die value {0}: a d10 shows 1 to 10")]
    InvalidDieValue(u32),

    /// A pool size the roller does not accept.
    #[error("invalid pool: {0}")]
    InvalidPool(String),

    /// A difficulty outside the conventional range.
    #[error("invalid difficulty {0}: expected 2 to 10")]
    InvalidDifficulty(u32),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
