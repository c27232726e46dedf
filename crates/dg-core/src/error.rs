//! Error types for grid access and generation setup

use thiserror::Error;

/// Grid access errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Invalid generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{axis} must be greater than zero")]
    ZeroDimension { axis: &'static str },

    #[error("{axis} must be odd, got {value}")]
    EvenDimension { axis: &'static str, value: usize },

    #[error("{axis} of {value} exceeds the maximum of {max}")]
    TooLarge {
        axis: &'static str,
        value: usize,
        max: usize,
    },
}

/// Errors surfaced by the generation entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
