//! Connectivity checks over a generated grid

use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::cell::{Coord, Direction, RegionId};
use crate::grid::Grid;

/// Cells reachable from `start` through open cells, 4-connected.
///
/// Returns a row-major mask; all false if `start` is a wall or off the grid.
pub fn reachable_from(grid: &Grid, start: Coord) -> Vec<bool> {
    let mut seen = vec![false; grid.width() * grid.height()];
    if !grid.contains(start.x, start.y) || grid.cell(start).is_wall {
        return seen;
    }

    let mut queue = VecDeque::from([start]);
    seen[grid.index(start)] = true;
    while let Some(pos) = queue.pop_front() {
        for dir in Direction::iter() {
            let Some(next) = grid.step(pos, dir, 1) else {
                continue;
            };
            let idx = grid.index(next);
            if !seen[idx] && grid.cell(next).is_open() {
                seen[idx] = true;
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Connectors left over after merging, row-major
pub fn residual_connectors(grid: &Grid) -> Vec<Coord> {
    crate::connector::connectors(grid)
}

/// Distinct region ids among open cells
pub fn region_ids(grid: &Grid) -> BTreeSet<RegionId> {
    grid.cells()
        .filter(|c| c.is_open())
        .map(|c| c.region_id)
        .collect()
}

/// Summary of how connected a grid is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityReport {
    pub floor_cells: usize,
    pub reachable_from_root: usize,
    /// Open cells not reachable from the root
    pub unreached: usize,
    pub regions: BTreeSet<RegionId>,
    pub residual_connectors: usize,
}

impl ConnectivityReport {
    /// Every open cell is reachable from the root
    pub fn is_connected(&self) -> bool {
        self.unreached == 0
    }
}

/// Build a [`ConnectivityReport`] flooding from the first cell of `root`
pub fn connectivity_report(grid: &Grid, root: RegionId) -> ConnectivityReport {
    let floor_cells = grid.cells().filter(|c| c.is_open()).count();
    let root_cell = grid.cells().find(|c| c.is_open() && c.region_id == root);
    let reachable_from_root = root_cell.map_or(0, |c| {
        let seen = reachable_from(grid, c.coord());
        seen.into_iter().filter(|&r| r).count()
    });

    ConnectivityReport {
        floor_cells,
        reachable_from_root,
        unreached: floor_cells - reachable_from_root,
        regions: region_ids(grid),
        residual_connectors: residual_connectors(grid).len(),
    }
}
