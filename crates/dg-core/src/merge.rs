//! Region merging
//!
//! Builds a random spanning tree over the region graph (regions are nodes,
//! connectors are edges) rooted at [`ROOT_REGION`]:
//!
//! 1. Every connector touching the root is active.
//! 2. Pick a random active connector and open it as a door. Its regions join
//!    the root, and their cells are relabelled to the root id.
//! 3. Connectors whose regions are now all joined are demoted to plain walls;
//!    connectors with one side joined and one side outside become active.
//! 4. Repeat until no connector is active.
//!
//! Rather than rescanning the grid after every door, connectors and cells
//! are indexed by region once, and only the connectors of newly joined
//! regions are re-examined.
//!
//! Regions with no chain of connectors back to the root keep their ids and
//! their connectors stay in place (residual connectors).

use serde::{Deserialize, Serialize};

use crate::cell::{Coord, RegionId};
use crate::connector::connectors;
use crate::grid::Grid;
use crate::rng::RandomSource;

/// Region every reachable region is merged into: the first room placed, or
/// the first maze region when there are no rooms.
pub const ROOT_REGION: RegionId = 1;

/// Outcome of a merge run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Door positions in the order they were opened
    pub doors: Vec<Coord>,
    /// Connectors turned back into plain walls
    pub demoted: usize,
    /// Regions merged into the root, the root included
    pub joined: Vec<RegionId>,
}

/// Working state for one merge run
struct Merger {
    root: RegionId,
    /// All connectors at the start, row-major
    connectors: Vec<Coord>,
    /// Connector indices per region id
    connectors_by_region: Vec<Vec<usize>>,
    /// Open cells per region id
    cells_by_region: Vec<Vec<Coord>>,
    joined: Vec<bool>,
    /// Active connector indices
    active: Vec<usize>,
    /// Position of each connector in `active`
    slot: Vec<Option<usize>>,
    report: MergeReport,
}

impl Merger {
    fn new(grid: &Grid, root: RegionId) -> Self {
        let connectors = connectors(grid);
        let max_region = grid
            .cells()
            .map(|c| c.region_id.max(c.adjacent_regions.iter().max().unwrap_or(0)))
            .max()
            .unwrap_or(0)
            .max(root) as usize;

        let mut connectors_by_region = vec![Vec::new(); max_region + 1];
        for (idx, &pos) in connectors.iter().enumerate() {
            for region in grid.cell(pos).adjacent_regions.iter() {
                connectors_by_region[region as usize].push(idx);
            }
        }

        let mut cells_by_region = vec![Vec::new(); max_region + 1];
        for cell in grid.cells().filter(|c| c.is_open()) {
            cells_by_region[cell.region_id as usize].push(cell.coord());
        }

        let slot = vec![None; connectors.len()];
        Self {
            root,
            connectors,
            connectors_by_region,
            cells_by_region,
            joined: vec![false; max_region + 1],
            active: Vec::new(),
            slot,
            report: MergeReport::default(),
        }
    }

    fn activate(&mut self, idx: usize) {
        if self.slot[idx].is_none() {
            self.slot[idx] = Some(self.active.len());
            self.active.push(idx);
        }
    }

    fn deactivate(&mut self, idx: usize) {
        let Some(pos) = self.slot[idx].take() else {
            return;
        };
        self.active.swap_remove(pos);
        if let Some(&moved) = self.active.get(pos) {
            self.slot[moved] = Some(pos);
        }
    }

    /// Join `region` to the root and re-examine its connectors
    fn absorb(&mut self, grid: &mut Grid, region: RegionId) {
        let r = region as usize;
        if self.joined[r] {
            return;
        }
        self.joined[r] = true;
        self.report.joined.push(region);

        for &pos in &self.cells_by_region[r] {
            grid.cell_mut(pos).region_id = self.root;
        }

        for i in 0..self.connectors_by_region[r].len() {
            let idx = self.connectors_by_region[r][i];
            let cell = grid.cell_mut(self.connectors[idx]);
            if !cell.is_connector() {
                continue;
            }
            let joined = &self.joined;
            if cell.adjacent_regions.iter().all(|id| joined[id as usize]) {
                cell.adjacent_regions.clear();
                self.report.demoted += 1;
                self.deactivate(idx);
            } else {
                self.activate(idx);
            }
        }
    }

    fn run(mut self, grid: &mut Grid, rng: &mut impl RandomSource) -> MergeReport {
        self.absorb(grid, self.root);

        while let Some(pick) = rng.pick_index(self.active.len()) {
            let idx = self.active[pick];
            self.deactivate(idx);

            let pos = self.connectors[idx];
            let cell = grid.cell_mut(pos);
            let regions = cell.adjacent_regions;
            cell.is_wall = false;
            cell.is_door = true;
            cell.region_id = self.root;
            cell.adjacent_regions.clear();
            self.report.doors.push(pos);
            log::trace!(
                "door at ({}, {}) joins {:?}",
                pos.x,
                pos.y,
                regions.as_slice()
            );

            for region in regions.iter() {
                self.absorb(grid, region);
            }
        }

        self.report
    }
}

/// Open doors until every region reachable from [`ROOT_REGION`] is merged.
///
/// Uses the adjacency computed by
/// [`compute_adjacency`](crate::connector::compute_adjacency). Running it
/// again on a merged grid changes nothing.
pub fn merge_regions(grid: &mut Grid, rng: &mut impl RandomSource) -> MergeReport {
    merge_into(grid, ROOT_REGION, rng)
}

/// Same as [`merge_regions`] with an explicit root region
pub fn merge_into(grid: &mut Grid, root: RegionId, rng: &mut impl RandomSource) -> MergeReport {
    if !grid.cells().any(|c| c.is_open() && c.region_id == root) {
        log::debug!("region {} not present, nothing to merge", root);
        return MergeReport::default();
    }

    let report = Merger::new(grid, root).run(grid, rng);
    log::debug!(
        "opened {} doors, demoted {} connectors, joined {} regions",
        report.doors.len(),
        report.demoted,
        report.joined.len()
    );
    report
}
