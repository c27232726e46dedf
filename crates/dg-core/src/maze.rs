//! Maze corridor generation
//!
//! Fills every untouched pocket of the grid with a perfect maze using a
//! depth-first backtracker. Each pocket becomes its own region.

use strum::IntoEnumIterator;

use crate::cell::{Coord, Direction, RegionId};
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::room::RegionCounter;

/// A cell is isolated when it and its 8 neighbours are all walls.
fn is_isolated(grid: &Grid, pos: Coord) -> bool {
    for y in pos.y - 1..=pos.y + 1 {
        for x in pos.x - 1..=pos.x + 1 {
            if !grid.cell(Coord::new(x, y)).is_wall {
                return false;
            }
        }
    }
    true
}

/// First isolated interior cell in row-major order
pub fn find_start(grid: &Grid) -> Option<Coord> {
    grid.interior().find(|&pos| is_isolated(grid, pos))
}

/// The `(mid, dest)` pair to carve when the maze can grow from `pos` two
/// cells in `dir`.
///
/// The cell three steps out must still be on the grid so the border ring is
/// never opened.
fn carve_target(grid: &Grid, pos: Coord, dir: Direction) -> Option<(Coord, Coord)> {
    grid.step(pos, dir, 3)?;
    let mid = grid.step(pos, dir, 1)?;
    let dest = grid.step(pos, dir, 2)?;
    grid.cell(dest).is_wall.then_some((mid, dest))
}

/// Grow one maze region from `start` until the frontier is exhausted.
///
/// Returns the number of cells carved.
pub fn grow_maze(
    grid: &mut Grid,
    start: Coord,
    region: RegionId,
    rng: &mut impl RandomSource,
) -> usize {
    let mut frontier = vec![start];
    grid.cell_mut(start).carve(region);
    let mut carved = 1;

    while let Some(&pos) = frontier.last() {
        let mut targets = [(pos, pos); 4];
        let mut count = 0;
        for dir in Direction::iter() {
            if let Some(target) = carve_target(grid, pos, dir) {
                targets[count] = target;
                count += 1;
            }
        }

        let Some(pick) = rng.pick_index(count) else {
            frontier.pop();
            continue;
        };
        let (mid, next) = targets[pick];
        grid.cell_mut(mid).carve(region);
        grid.cell_mut(next).carve(region);
        carved += 2;
        frontier.push(next);
    }

    carved
}

/// Fill every isolated pocket with its own maze region.
///
/// Returns the new region ids in allocation order.
pub fn carve_corridors(
    grid: &mut Grid,
    regions: &mut RegionCounter,
    rng: &mut impl RandomSource,
) -> Vec<RegionId> {
    let mut grown = Vec::new();

    while let Some(start) = find_start(grid) {
        let region = regions.allocate();
        let carved = grow_maze(grid, start, region, rng);
        let Coord { x, y } = start;
        log::trace!("maze region {region} from ({x}, {y}): {carved} cells");
        grown.push(region);
    }

    log::debug!("grew {} maze regions", grown.len());
    grown
}
