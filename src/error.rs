//! Error types for maze configuration and generation.

use thiserror::Error;

/// Rejected parameters. Raised before any grid is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("width must be positive, got {0}")]
    InvalidWidth(i32),

    #[error("height must be at least 3 (two margin rows plus one maze row), got {0}")]
    InvalidHeight(i32),

    #[error("helix must not be negative, got {0}")]
    NegativeHelix(i32),

    #[error("direction bias must be positive: {0}")]
    InvalidBias(String),

    #[error("start cell ({x}, {y}) is outside the generatable region")]
    StartOutOfRange { x: i64, y: i64 },

    #[error("grid of {cells} cells exceeds the limit of {max}")]
    TooLarge { cells: u64, max: u64 },
}

/// A run that finished without a usable maze. The caller decides whether to
/// retry with another seed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("growth never reached the top rim")]
    NoSolution,

    #[error("solution path too short: {len} cells, need at least {min}")]
    Degenerate { len: usize, min: usize },

    #[error("growth exceeded the step budget of {limit} queue operations")]
    StepBudgetExceeded { limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
}
