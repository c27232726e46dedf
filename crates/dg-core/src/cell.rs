//! Map cells, coordinates and the fixed-capacity region set

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Region identifier. `0` means "no region".
pub type RegionId = u32;

/// The unassigned region id carried by untouched walls
pub const NO_REGION: RegionId = 0;

/// Grid coordinate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move `steps` cells in `dir`, or `None` if that would go below zero
    /// or reach `width`/`height`.
    pub fn step(self, dir: Direction, steps: usize, width: usize, height: usize) -> Option<Coord> {
        let (dx, dy) = dir.delta();
        let x = offset(self.x, dx, steps)?;
        let y = offset(self.y, dy, steps)?;
        (x < width && y < height).then_some(Coord { x, y })
    }
}

fn offset(base: usize, delta: i32, steps: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        d if d > 0 => base.checked_add(steps),
        _ => base.checked_sub(steps),
    }
}

/// Cardinal directions, in carving order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Unit offset `(dx, dy)`; y grows downwards
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// Distinct non-zero region ids around a cell.
///
/// A cell has four orthogonal neighbours, so four slots are always enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegionSet {
    ids: [RegionId; 4],
    len: u8,
}

impl RegionSet {
    pub const CAPACITY: usize = 4;

    pub const fn new() -> Self {
        Self {
            ids: [NO_REGION; 4],
            len: 0,
        }
    }

    /// Add `id` unless it is [`NO_REGION`] or already present.
    ///
    /// Returns true if the set changed. Inserting into a full set is ignored.
    pub fn insert(&mut self, id: RegionId) -> bool {
        if id == NO_REGION || self.contains(id) || self.len() == Self::CAPACITY {
            return false;
        }
        self.ids[self.len as usize] = id;
        self.len += 1;
        true
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.as_slice().contains(&id)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn as_slice(&self) -> &[RegionId] {
        &self.ids[..self.len as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.as_slice().iter().copied()
    }
}

impl FromIterator<RegionId> for RegionSet {
    fn from_iter<I: IntoIterator<Item = RegionId>>(iter: I) -> Self {
        let mut set = RegionSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,

    /// Impassable. Every cell starts as a wall.
    pub is_wall: bool,

    /// Former connector opened by the region merger
    pub is_door: bool,

    /// Region id (0 = unassigned)
    pub region_id: RegionId,

    /// Regions touching this wall; only meaningful while `is_wall`
    pub adjacent_regions: RegionSet,
}

impl Cell {
    /// Create an untouched wall cell
    pub const fn wall(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            is_wall: true,
            is_door: false,
            region_id: NO_REGION,
            adjacent_regions: RegionSet::new(),
        }
    }

    pub const fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Turn this cell into floor belonging to `region`
    pub fn carve(&mut self, region: RegionId) {
        self.is_wall = false;
        self.region_id = region;
        self.adjacent_regions.clear();
    }

    /// A wall touching two or more distinct regions
    pub fn is_connector(&self) -> bool {
        self.is_wall && self.adjacent_regions.len() > 1
    }

    /// Floor or door
    pub const fn is_open(&self) -> bool {
        !self.is_wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_region_set_dedup_and_zero() {
        let set: RegionSet = [3, 0, 3, 7, 0].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert!(!set.contains(0));
    }

    #[test]
    fn test_region_set_capacity() {
        let mut set = RegionSet::new();
        for id in 1..=4 {
            assert!(set.insert(id));
        }
        assert!(!set.insert(5));
        assert_eq!(set.as_slice(), &[1, 2, 3, 4]);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_coord_step_bounds() {
        let origin = Coord::new(1, 1);
        let east = origin.step(Direction::East, 2, 5, 5);
        let west = origin.step(Direction::West, 1, 5, 5);
        assert_eq!(east, Some(Coord::new(3, 1)));
        assert_eq!(west, Some(Coord::new(0, 1)));
        assert_eq!(origin.step(Direction::North, 2, 5, 5), None);
        assert_eq!(origin.step(Direction::South, 4, 5, 5), None);
    }

    #[test]
    fn test_direction_order() {
        let deltas: Vec<_> = Direction::iter().map(Direction::delta).collect();
        assert_eq!(deltas, vec![(0, -1), (1, 0), (0, 1), (-1, 0)]);
    }

    #[test]
    fn test_connector_requires_wall() {
        let mut cell = Cell::wall(2, 2);
        cell.adjacent_regions.insert(1);
        assert!(!cell.is_connector());
        cell.adjacent_regions.insert(2);
        assert!(cell.is_connector());

        cell.is_wall = false;
        assert!(!cell.is_connector());
    }
}
