//! Error types for larflash-core.

use thiserror::Error;

/// Result type alias for larflash operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for larflash operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Energy-loss profile length is incompatible with the trajectory.
    ///
    /// A profile must carry one value per trajectory point or one value
    /// per segment (one fewer than the number of points).
    #[error("energy-loss profile of length {profile} incompatible with trajectory of {points} points")]
    ProfileShape {
        /// Number of trajectory points.
        points: usize,
        /// Number of energy-loss values supplied.
        profile: usize,
    },

    /// Prompt fraction outside its physical domain.
    #[error("prompt fraction must be in (0, 1], got {0}")]
    InvalidPromptFraction(f64),

    /// Two per-detector vectors disagree on the detector count.
    #[error("detector count mismatch: {left} vs {right}")]
    DetectorCountMismatch {
        /// Detector count on the left-hand side.
        left: usize,
        /// Detector count on the right-hand side.
        right: usize,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
