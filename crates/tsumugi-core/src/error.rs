use thiserror::Error;

/// Errors that can occur during Tsumugi core operations.
#[derive(Debug, Error)]
pub enum TsumugiError {
    /// The input string is empty or contains only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// A confidence was requested for a property the guess does not hold.
    #[error("guess has no property {prop:?}")]
    UnknownProperty {
        /// The property name that was requested.
        prop: String,
    },

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for Tsumugi operations.
pub type Result<T> = std::result::Result<T, TsumugiError>;
