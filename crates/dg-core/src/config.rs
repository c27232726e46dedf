//! Generation parameters

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest accepted width or height
pub const MAX_DIMENSION: usize = 4095;

/// Parameters for one generation run.
///
/// Defaults reproduce the classic 41x21 layout with seed 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Grid width, odd
    pub width: usize,
    /// Grid height, odd
    pub height: usize,
    /// Stop placing rooms after this many
    pub max_rooms: usize,
    /// Stop placing rooms after this many tries
    pub max_room_attempts: usize,
    pub seed: u64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            width: 41,
            height: 21,
            max_rooms: 10,
            max_room_attempts: 200,
            seed: 12,
        }
    }
}

impl GenConfig {
    pub fn new(
        width: usize,
        height: usize,
        max_rooms: usize,
        max_room_attempts: usize,
        seed: u64,
    ) -> Self {
        Self {
            width,
            height,
            max_rooms,
            max_room_attempts,
            seed,
        }
    }

    /// Check that both dimensions are odd, non-zero and not absurdly large
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)
    }
}

fn check_dimension(axis: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroDimension { axis });
    }
    if value % 2 == 0 {
        return Err(ConfigError::EvenDimension { axis, value });
    }
    if value > MAX_DIMENSION {
        return Err(ConfigError::TooLarge {
            axis,
            value,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}
