//! Property tests over random seeds and grid sizes

use std::collections::HashSet;

use proptest::prelude::*;

use dg_core::analysis::connectivity_report;
use dg_core::{
    DungeonRng, GenConfig, Grid, ROOT_REGION, RegionCounter, RegionId, carve_corridors,
    compute_adjacency, generate, generate_dungeon, merge_regions, place_rooms,
};

fn odd(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = usize> {
    range.prop_map(|n| n * 2 + 1)
}

/// Rooms then mazes, no merge
fn carved(width: usize, height: usize, rooms: usize, rng: &mut DungeonRng) -> Grid {
    let mut grid = Grid::new(width, height);
    let mut regions = RegionCounter::new();
    place_rooms(&mut grid, rooms, 100, &mut regions, rng);
    carve_corridors(&mut grid, &mut regions, rng);
    grid
}

fn distinct_neighbour_regions(grid: &Grid, x: usize, y: usize) -> usize {
    let ids: HashSet<RegionId> = [(x, y - 1), (x + 1, y), (x, y + 1), (x - 1, y)]
        .into_iter()
        .map(|(nx, ny)| grid.at(nx, ny).unwrap().region_id)
        .filter(|&id| id != 0)
        .collect();
    ids.len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deterministic(
        width in odd(0..=20),
        height in odd(0..=12),
        rooms in 0usize..12,
        seed in any::<u64>(),
    ) {
        let a = generate(width, height, rooms, 100, seed).unwrap();
        let b = generate(width, height, rooms, 100, seed).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_border_and_open_invariants(
        width in odd(0..=20),
        height in odd(0..=12),
        seed in any::<u64>(),
    ) {
        let grid = generate(width, height, 8, 100, seed).unwrap();
        for cell in grid.cells() {
            if cell.x == 0 || cell.y == 0 || cell.x + 1 == width || cell.y + 1 == height {
                prop_assert!(cell.is_wall);
            }
            if cell.is_open() {
                prop_assert!(cell.region_id > 0);
            }
            if cell.is_door {
                prop_assert!(!cell.is_wall);
            }
        }
    }

    #[test]
    fn prop_rooms_disjoint(width in odd(2..=20), height in odd(2..=12), seed in any::<u64>()) {
        let mut grid = Grid::new(width, height);
        let mut regions = RegionCounter::new();
        let mut rng = DungeonRng::new(seed);
        let placement = place_rooms(&mut grid, 12, 200, &mut regions, &mut rng);
        for (i, a) in placement.rooms.iter().enumerate() {
            for b in &placement.rooms[i + 1..] {
                prop_assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn prop_passages_join_own_region(
        width in odd(1..=20),
        height in odd(1..=12),
        rooms in 0usize..10,
        seed in any::<u64>(),
    ) {
        let grid = carved(width, height, rooms, &mut DungeonRng::new(seed));

        // An open cell with exactly one even coordinate sits between two
        // open cells of its own region along that axis.
        for cell in grid.cells().filter(|c| c.is_open() && c.x % 2 != c.y % 2) {
            let (a, b) = if cell.x % 2 == 0 {
                ((cell.x - 1, cell.y), (cell.x + 1, cell.y))
            } else {
                ((cell.x, cell.y - 1), (cell.x, cell.y + 1))
            };
            prop_assert_eq!(grid.at(a.0, a.1).unwrap().region_id, cell.region_id);
            prop_assert_eq!(grid.at(b.0, b.1).unwrap().region_id, cell.region_id);
        }
    }

    #[test]
    fn prop_connector_correctness(
        width in odd(1..=20),
        height in odd(1..=12),
        rooms in 0usize..10,
        seed in any::<u64>(),
    ) {
        let mut grid = carved(width, height, rooms, &mut DungeonRng::new(seed));
        compute_adjacency(&mut grid);

        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let cell = grid.at(x, y).unwrap();
                if cell.is_open() {
                    prop_assert!(!cell.is_connector());
                    continue;
                }
                let distinct = distinct_neighbour_regions(&grid, x, y);
                prop_assert_eq!(cell.is_connector(), distinct >= 2);
                prop_assert_eq!(cell.adjacent_regions.len(), distinct);
            }
        }
    }

    #[test]
    fn prop_merge_converges(
        width in odd(1..=20),
        height in odd(1..=12),
        rooms in 0usize..10,
        seed in any::<u64>(),
    ) {
        let config = GenConfig::new(width, height, rooms, 100, seed);
        let dungeon = generate_dungeon(&config).unwrap();
        let report = connectivity_report(&dungeon.grid, ROOT_REGION);
        prop_assert!(report.is_connected());
        prop_assert_eq!(report.residual_connectors, 0);
        prop_assert!(report.regions.iter().all(|&r| r == ROOT_REGION));
    }

    #[test]
    fn prop_merge_idempotent(
        width in odd(1..=15),
        height in odd(1..=10),
        seed in any::<u64>(),
        second in any::<u64>(),
    ) {
        let mut rng = DungeonRng::new(seed);
        let mut grid = carved(width, height, 6, &mut rng);
        compute_adjacency(&mut grid);
        merge_regions(&mut grid, &mut rng);

        let merged = grid.clone();
        let report = merge_regions(&mut grid, &mut DungeonRng::new(second));
        prop_assert!(report.doors.is_empty());
        prop_assert_eq!(grid, merged);
    }
}
