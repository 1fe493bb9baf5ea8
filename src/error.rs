//! Error types for the bayes-bandit library.

use thiserror::Error;

/// Result type alias for bandit operations.
pub type Result<T> = std::result::Result<T, BanditError>;

/// Errors that can occur while building a bandit or running the sampler.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BanditError {
    /// The arm index is outside `0..n_arms`.
    #[error("invalid arm {arm}: only arm IDs from 0 to {} can be selected", .n_arms.saturating_sub(1))]
    InvalidArm { arm: usize, n_arms: usize },

    /// A caller-supplied argument violates the API contract.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A success rate is not a probability.
    #[error("invalid success rate {rate} for arm {arm}: must be within [0, 1]")]
    InvalidProbability { arm: usize, rate: f64 },

    /// An environment reported a reward other than 0 or 1.
    #[error("invalid reward {reward} from arm {arm}: rewards must be 0 or 1")]
    InvalidReward { arm: usize, reward: u8 },

    /// A distribution rejected its parameters.
    #[error("distribution error: {message}")]
    Distribution { message: String },
}
