//! Connector detection
//!
//! A connector is a wall whose orthogonal neighbours belong to two or more
//! regions. Connectors are the candidate door positions for region merging.

use strum::IntoEnumIterator;

use crate::cell::{Coord, Direction, RegionSet};
use crate::grid::Grid;

/// Distinct non-zero regions among the 4 orthogonal neighbours of `pos`
pub fn neighbour_regions(grid: &Grid, pos: Coord) -> RegionSet {
    Direction::iter()
        .filter_map(|dir| grid.step(pos, dir, 1))
        .map(|n| grid.cell(n).region_id)
        .collect()
}

/// Recompute `adjacent_regions` for every interior wall.
///
/// Open cells get an empty set. Border cells are left alone. Returns the
/// number of connectors found. Running it twice gives the same result.
pub fn compute_adjacency(grid: &mut Grid) -> usize {
    let mut connectors = 0;

    for pos in grid.interior() {
        let regions = if grid.cell(pos).is_wall {
            neighbour_regions(grid, pos)
        } else {
            RegionSet::new()
        };
        let cell = grid.cell_mut(pos);
        cell.adjacent_regions = regions;
        if cell.is_connector() {
            connectors += 1;
        }
    }

    log::debug!("found {} connectors", connectors);
    connectors
}

/// Positions of all current connectors, row-major
pub fn connectors(grid: &Grid) -> Vec<Coord> {
    grid.interior()
        .filter(|&pos| grid.cell(pos).is_connector())
        .collect()
}
