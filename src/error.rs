//! Input-validation errors.
//!
//! Every failure in this crate happens before a run starts: the
//! evolutionary loop itself has no error paths.

/// Errors reported when a problem instance or GA configuration is invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnapsackError {
    #[error("length mismatch: {weights} weights but {utilities} utilities")]
    LengthMismatch { weights: usize, utilities: usize },

    #[error("invalid weight at index {index}: {value} (must be finite and non-negative)")]
    InvalidWeight { index: usize, value: f64 },

    #[error("invalid utility at index {index}: {value} (must be finite and non-negative)")]
    InvalidUtility { index: usize, value: f64 },

    #[error("invalid capacity: {0} (must be finite and non-negative)")]
    InvalidCapacity(f64),

    #[error("total {0} of all items is not finite")]
    NonFiniteTotal(&'static str),

    #[error("chromosome length {0} is too short: crossover needs at least 3 items")]
    TooFewItems(usize),

    #[error("invalid population size: {0} (must be positive and even)")]
    InvalidPopulationSize(usize),

    #[error("invalid mutation probability: {0} (must be within [0, 1])")]
    InvalidMutationProbability(f64),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;
