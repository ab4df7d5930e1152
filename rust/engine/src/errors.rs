use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Invalid card rank: {0:?} (expected 1-13, A, J, Q or K)")]
    InvalidRank(String),
    #[error("Hand already holds {max} cards")]
    HandFull { max: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid road map dimensions: {rows}x{cols} (both must be >= 1)")]
    InvalidDimensions { rows: usize, cols: usize },
}
