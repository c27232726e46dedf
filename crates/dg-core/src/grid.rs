//! Grid model: a fixed-size, bounds-checked array of cells

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Coord, Direction};
use crate::error::GridError;

/// Rectangular grid of cells, stored as `height` rows of `width` cells.
///
/// Cells on the outermost ring are border walls and are never carved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an all-wall grid
    pub fn new(width: usize, height: usize) -> Self {
        let rows = (0..height)
            .map(|y| (0..width).map(|x| Cell::wall(x, y)).collect())
            .collect();
        Self {
            width,
            height,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Bounds-checked cell access
    pub fn at(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        if !self.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(&self.rows[y][x])
    }

    /// Bounds-checked mutable cell access
    pub fn at_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, GridError> {
        if !self.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(&mut self.rows[y][x])
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Direct access for coordinates already known to be on the grid.
    /// Panics when out of bounds.
    pub(crate) fn cell(&self, pos: Coord) -> &Cell {
        &self.rows[pos.y][pos.x]
    }

    pub(crate) fn cell_mut(&mut self, pos: Coord) -> &mut Cell {
        &mut self.rows[pos.y][pos.x]
    }

    /// Step from `pos` in `dir`, staying inside the grid
    pub fn step(&self, pos: Coord, dir: Direction, steps: usize) -> Option<Coord> {
        pos.step(dir, steps, self.width, self.height)
    }

    /// Interior coordinates (everything but the outermost ring), row-major
    pub fn interior(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (1..height.saturating_sub(1))
            .flat_map(move |y| (1..width.saturating_sub(1)).map(move |x| Coord::new(x, y)))
    }

    /// Row-major index of `pos`, for per-cell side tables
    pub fn index(&self, pos: Coord) -> usize {
        pos.y * self.width + pos.x
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_wall() {
        let grid = Grid::new(7, 5);
        assert_eq!(grid.cells().count(), 35);
        assert!(grid.cells().all(|c| c.is_wall && c.region_id == 0));
        assert_eq!(grid.rows().count(), 5);
    }

    #[test]
    fn test_cells_know_their_position() {
        let grid = Grid::new(5, 3);
        let cell = grid.at(4, 2).unwrap();
        assert_eq!((cell.x, cell.y), (4, 2));
    }

    #[test]
    fn test_at_out_of_bounds() {
        let mut grid = Grid::new(5, 3);
        assert_eq!(
            grid.at(5, 0),
            Err(GridError::OutOfBounds {
                x: 5,
                y: 0,
                width: 5,
                height: 3
            })
        );
        assert!(grid.at(0, 3).is_err());
        assert!(grid.at_mut(0, 3).is_err());
        assert!(grid.at_mut(4, 2).is_ok());
    }

    #[test]
    fn test_interior_excludes_border() {
        let grid = Grid::new(5, 5);
        let interior: Vec<_> = grid.interior().collect();
        assert_eq!(interior.len(), 9);
        assert!(interior.iter().all(|c| c.x % 4 != 0 && c.y % 4 != 0));
        assert_eq!(interior[0], Coord::new(1, 1));
    }

    #[test]
    fn test_interior_of_degenerate_grids() {
        assert_eq!(Grid::new(1, 1).interior().count(), 0);
        assert_eq!(Grid::new(3, 3).interior().count(), 1);
        assert_eq!(Grid::new(0, 0).interior().count(), 0);
    }
}
