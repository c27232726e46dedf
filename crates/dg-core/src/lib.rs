//! dg-core: Room-and-maze dungeon generation
//!
//! Builds a grid of rooms and maze corridors, then opens doors between the
//! disjoint regions until everything reachable from the root region is one
//! connected structure. Contains no I/O; output is a plain [`Grid`].
//!
//! Pipeline: [`place_rooms`] → [`carve_corridors`] → [`compute_adjacency`]
//! → [`merge_regions`]. [`generate_dungeon`] runs all four stages.

pub mod analysis;
pub mod cell;
pub mod config;
pub mod connector;
pub mod error;
pub mod generation;
pub mod grid;
pub mod maze;
pub mod merge;
pub mod render;
pub mod rng;
pub mod room;

pub use cell::{Cell, Coord, Direction, NO_REGION, RegionId, RegionSet};
pub use config::GenConfig;
pub use connector::compute_adjacency;
pub use error::{ConfigError, GenError, GridError};
pub use generation::{Dungeon, GenerationStats, generate, generate_dungeon};
pub use grid::Grid;
pub use maze::carve_corridors;
pub use merge::{MergeReport, ROOT_REGION, merge_regions};
pub use render::{Glyph, RenderStyle, render};
pub use rng::{DungeonRng, RandomSource};
pub use room::{RegionCounter, Room, place_rooms};
