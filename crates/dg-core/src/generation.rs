//! Dungeon generation pipeline
//!
//! rooms → mazes → connectors → merge. Each stage reads and writes the same
//! grid; region ids come from one [`RegionCounter`] owned by the run.

use serde::{Deserialize, Serialize};

use crate::analysis::{region_ids, residual_connectors};
use crate::config::GenConfig;
use crate::connector::compute_adjacency;
use crate::error::GenError;
use crate::grid::Grid;
use crate::maze::carve_corridors;
use crate::merge::merge_regions;
use crate::rng::DungeonRng;
use crate::room::{RegionCounter, Room, place_rooms};

/// Counters collected while generating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub rooms_placed: usize,
    pub room_attempts: usize,
    pub maze_regions: usize,
    /// Connectors found before merging
    pub connectors: usize,
    pub doors: usize,
    pub demoted_connectors: usize,
    /// Connectors never reached by the merge
    pub residual_connectors: usize,
    /// Distinct region ids among open cells after merging
    pub regions_remaining: usize,
}

/// A generated dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub config: GenConfig,
    pub grid: Grid,
    /// Rooms as placed, with their original region ids
    pub rooms: Vec<Room>,
    pub stats: GenerationStats,
}

/// Run the full pipeline for `config`
pub fn generate_dungeon(config: &GenConfig) -> Result<Dungeon, GenError> {
    config.validate()?;

    let mut grid = Grid::new(config.width, config.height);
    let mut regions = RegionCounter::new();
    let mut rng = DungeonRng::new(config.seed);

    let placement = place_rooms(
        &mut grid,
        config.max_rooms,
        config.max_room_attempts,
        &mut regions,
        &mut rng,
    );
    let mazes = carve_corridors(&mut grid, &mut regions, &mut rng);
    let connectors = compute_adjacency(&mut grid);
    let merge = merge_regions(&mut grid, &mut rng);

    let stats = GenerationStats {
        rooms_placed: placement.rooms.len(),
        room_attempts: placement.attempts,
        maze_regions: mazes.len(),
        connectors,
        doors: merge.doors.len(),
        demoted_connectors: merge.demoted,
        residual_connectors: residual_connectors(&grid).len(),
        regions_remaining: region_ids(&grid).len(),
    };
    log::info!(
        "generated {}x{} dungeon (seed {}): {} rooms, {} mazes, {} doors, {} regions remaining",
        config.width,
        config.height,
        config.seed,
        stats.rooms_placed,
        stats.maze_regions,
        stats.doors,
        stats.regions_remaining
    );
    if stats.residual_connectors > 0 {
        log::warn!("{} connectors left unreached", stats.residual_connectors);
    }

    Ok(Dungeon {
        config: *config,
        grid,
        rooms: placement.rooms,
        stats,
    })
}

/// Generate a grid from raw parameters. Deterministic for a given input.
pub fn generate(
    width: usize,
    height: usize,
    max_rooms: usize,
    max_room_attempts: usize,
    seed: u64,
) -> Result<Grid, GenError> {
    let config = GenConfig::new(width, height, max_rooms, max_room_attempts, seed);
    generate_dungeon(&config).map(|dungeon| dungeon.grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_default_dungeon_stats() {
        let dungeon = generate_dungeon(&GenConfig::default()).unwrap();
        let stats = dungeon.stats;

        assert_eq!(stats.rooms_placed, dungeon.rooms.len());
        assert!(stats.rooms_placed <= 10);
        assert!(stats.room_attempts <= 200);
        assert!(stats.maze_regions >= 1);
        assert_eq!(stats.regions_remaining, 1);
        assert_eq!(stats.residual_connectors, 0);
        // A door can join more than one new region at once
        assert!(stats.doors >= 1);
        assert!(stats.doors < stats.rooms_placed + stats.maze_regions);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = generate(40, 21, 10, 200, 1).unwrap_err();
        let expected = ConfigError::EvenDimension {
            axis: "width",
            value: 40,
        };
        assert_eq!(err, GenError::Config(expected));
    }

    #[test]
    fn test_generate_matches_dungeon_grid() {
        let grid = generate(41, 21, 10, 200, 12).unwrap();
        let dungeon = generate_dungeon(&GenConfig::default()).unwrap();
        assert_eq!(grid, dungeon.grid);
    }
}
