//! Room placement
//!
//! Rooms are odd-sized rectangles anchored on odd coordinates, so room edges
//! always line up with the maze lattice and two rooms are never flush
//! against each other.

use serde::{Deserialize, Serialize};

use crate::cell::{Coord, NO_REGION, RegionId};
use crate::grid::Grid;
use crate::rng::RandomSource;

/// Smallest room side
pub const ROOM_SIZE_MIN: usize = 3;

/// Largest room side
pub const ROOM_SIZE_MAX: usize = 9;

/// Hands out region ids in strictly increasing order, starting at 1.
///
/// Owned by one generation run and passed to each stage that creates regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCounter {
    next: RegionId,
}

impl RegionCounter {
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate a fresh id
    pub fn allocate(&mut self) -> RegionId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Highest id handed out so far, or [`NO_REGION`]
    pub fn last(&self) -> RegionId {
        self.next - 1
    }
}

impl Default for RegionCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// A placed room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub region: RegionId,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub fn new(region: RegionId, x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            region,
            x,
            y,
            width,
            height,
        }
    }

    /// Check if this room shares any cell with another
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// All cells of the room, row-major
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let (x, width) = (self.x, self.width);
        (self.y..self.y + self.height)
            .flat_map(move |cy| (x..x + width).map(move |cx| Coord::new(cx, cy)))
    }
}

/// Result of a placement run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPlacement {
    pub rooms: Vec<Room>,
    pub attempts: usize,
}

/// Random odd side length in `ROOM_SIZE_MIN..=ROOM_SIZE_MAX`
fn random_side(rng: &mut impl RandomSource) -> usize {
    1 + 2 * rng.next_int(ROOM_SIZE_MIN / 2, ROOM_SIZE_MAX / 2)
}

/// Random odd anchor so that `side` cells starting there stay off the border.
///
/// `None` when the extent is too small for the room.
fn random_anchor(extent: usize, side: usize, rng: &mut impl RandomSource) -> Option<usize> {
    if extent < side + 2 {
        return None;
    }
    Some(1 + 2 * rng.next_int(0, (extent - 2 - side) / 2))
}

fn has_open_cell(grid: &Grid, room: &Room) -> bool {
    room.cells().any(|pos| grid.cell(pos).is_open())
}

/// Stamp up to `max_rooms` non-overlapping rooms into `grid`.
///
/// Each of at most `max_attempts` tries draws a size and an anchor; a
/// candidate touching existing floor is discarded. Placing fewer rooms than
/// asked is normal.
pub fn place_rooms(
    grid: &mut Grid,
    max_rooms: usize,
    max_attempts: usize,
    regions: &mut RegionCounter,
    rng: &mut impl RandomSource,
) -> RoomPlacement {
    let mut placement = RoomPlacement::default();

    while placement.attempts < max_attempts && placement.rooms.len() < max_rooms {
        placement.attempts += 1;

        let width = random_side(rng);
        let height = random_side(rng);
        let Some(x) = random_anchor(grid.width(), width, rng) else {
            continue;
        };
        let Some(y) = random_anchor(grid.height(), height, rng) else {
            continue;
        };

        let mut room = Room::new(NO_REGION, x, y, width, height);
        if has_open_cell(grid, &room) {
            continue;
        }

        room.region = regions.allocate();
        for pos in room.cells() {
            grid.cell_mut(pos).carve(room.region);
        }
        log::trace!("room {} at ({x}, {y}) size {width}x{height}", room.region);
        placement.rooms.push(room);
    }

    log::debug!(
        "placed {} of {} rooms in {} attempts",
        placement.rooms.len(),
        max_rooms,
        placement.attempts
    );
    placement
}
