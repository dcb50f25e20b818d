//! Connectivity clustering of candidate cells into ramp regions.
//!
//! A region is a maximal connected component of candidate cells under the
//! Manhattan-ball adjacency rule `|dx| + |dy| <= max_link_distance`, which
//! generalizes 4-/8-neighbor adjacency so sparsely sampled candidates still
//! cluster. Expansion is a plain BFS; visited state lives in a full-size
//! cell arena so membership and claim checks are O(1) regardless of
//! candidate count -- whole-map scans run to tens of thousands of cells.

use crate::location::Cell;
use crate::region::Region;
use crate::terrain::{GridDataArray, TerrainSource};
use fnv::FnvHashSet;
use itertools::Itertools;
use log::{debug, trace};
use std::collections::VecDeque;

#[derive(Clone, Copy, PartialEq)]
enum CellState {
    /// Not a candidate; BFS never enters.
    Outside,
    /// Candidate, not yet claimed by a component.
    Candidate,
    /// Claimed by some component. Write-once.
    Claimed,
}

/// Neighbor offsets of the Manhattan ball with the given radius,
/// excluding the origin.
fn link_offsets(max_link_distance: i32) -> Vec<(i32, i32)> {
    let d = max_link_distance;
    let mut offsets = Vec::new();
    for dx in -d..=d {
        for dy in -d..=d {
            if (dx != 0 || dy != 0) && dx.abs() + dy.abs() <= d {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Partition `candidates` into connected components and keep those with at
/// least `min_group_size` cells as [`Region`]s, points sorted by descending
/// elevation sampled from `source`.
///
/// Seeds are visited in lexicographic cell order, so both the partition and
/// the emission order are deterministic for a fixed candidate set.
pub fn find_groups(
    candidates: &FnvHashSet<Cell>,
    source: &dyn TerrainSource,
    min_group_size: usize,
    max_link_distance: i32,
) -> Vec<Region> {
    let (width, height) = source.dimensions();

    let mut state = GridDataArray::new(width, height, CellState::Outside);
    for &cell in candidates {
        state.set(cell.x() as usize, cell.y() as usize, CellState::Candidate);
    }

    let offsets = link_offsets(max_link_distance);

    let mut regions = Vec::new();
    let mut queue = VecDeque::new();

    for seed in candidates.iter().copied().sorted() {
        if *state.get(seed.x() as usize, seed.y() as usize) != CellState::Candidate {
            continue;
        }
        state.set(seed.x() as usize, seed.y() as usize, CellState::Claimed);

        let mut group = vec![seed];
        queue.push_back(seed);

        while let Some(cell) = queue.pop_front() {
            for &(dx, dy) in &offsets {
                let nx = cell.x() as i32 + dx;
                let ny = cell.y() as i32 + dy;
                if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                    continue;
                }
                if *state.get(nx as usize, ny as usize) != CellState::Candidate {
                    continue;
                }
                state.set(nx as usize, ny as usize, CellState::Claimed);

                let next = Cell::new(nx as u16, ny as u16);
                group.push(next);
                queue.push_back(next);
            }
        }

        if group.len() < min_group_size {
            trace!(
                "discarding component of {} cells (minimum {})",
                group.len(),
                min_group_size
            );
            continue;
        }

        regions.push(Region::from_cells(&group, source));
    }

    debug!(
        "clustered {} candidate cells into {} regions (link distance {})",
        candidates.len(),
        regions.len(),
        max_link_distance
    );

    regions
}
