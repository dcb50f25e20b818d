//! Ramp regions: elevation-sorted point clusters with boundary and
//! centroid queries.

use crate::error::{AnalysisError, Result};
use crate::geometry::{self, Point};
use crate::location::Cell;
use crate::terrain::TerrainSource;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A maximal connected cluster of candidate cells -- one physical
/// elevation transition on the map.
///
/// Points are sorted by descending elevation at construction, so the upper
/// boundary is a prefix and the lower boundary a suffix of the point list.
/// Elevations are sampled once and stored alongside the points: a region
/// stays valid after the terrain snapshot it came from is gone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region {
    points: Vec<Point>,
    elevations: Vec<i32>,
}

impl Region {
    /// Build a region from a connected group of cells, sampling elevation
    /// from `source`. The group must be non-empty.
    pub(crate) fn from_cells(cells: &[Cell], source: &dyn TerrainSource) -> Region {
        debug_assert!(!cells.is_empty());

        let mut sampled: Vec<(Cell, i32)> = cells
            .iter()
            .map(|&cell| (cell, source.elevation(cell)))
            .collect();
        // Secondary key keeps the order deterministic across equal elevations.
        sampled.sort_by_key(|&(cell, elevation)| (Reverse(elevation), cell.packed_repr()));

        Region {
            points: sampled.iter().map(|&(cell, _)| Point::from(cell)).collect(),
            elevations: sampled.iter().map(|&(_, elevation)| elevation).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, sorted by descending elevation.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn max_elevation(&self) -> i32 {
        self.elevations[0]
    }

    pub fn min_elevation(&self) -> i32 {
        self.elevations[self.elevations.len() - 1]
    }

    /// The points at the region's maximum elevation. Plateaus are captured
    /// in full, and a size-1 region yields the same single point here and
    /// in [`lower_points`](Self::lower_points).
    pub fn upper_points(&self) -> &[Point] {
        self.boundary_points(true)
    }

    /// The points at the region's minimum elevation.
    pub fn lower_points(&self) -> &[Point] {
        self.boundary_points(false)
    }

    // One scan direction parameterized by `upper`; the point list is sorted
    // by descending elevation so each boundary is a contiguous slice.
    fn boundary_points(&self, upper: bool) -> &[Point] {
        if upper {
            let elevation = self.elevations[0];
            let end = self
                .elevations
                .iter()
                .position(|&e| e != elevation)
                .unwrap_or(self.elevations.len());
            &self.points[..end]
        } else {
            let elevation = self.elevations[self.elevations.len() - 1];
            let start = self
                .elevations
                .iter()
                .rposition(|&e| e != elevation)
                .map_or(0, |i| i + 1);
            &self.points[start..]
        }
    }

    pub fn centroid(&self) -> Point {
        centroid_of(&self.points)
    }

    pub fn upper_center(&self) -> Point {
        centroid_of(self.upper_points())
    }

    pub fn lower_center(&self) -> Point {
        centroid_of(self.lower_points())
    }
}

fn centroid_of(points: &[Point]) -> Point {
    geometry::centroid(points).expect("region points are never empty")
}

/// Pick the region whose centroid is closest to `reference`.
/// Ties keep the earliest region in input order.
pub fn closest_region<'a>(regions: &'a [Region], reference: Point) -> Result<&'a Region> {
    regions
        .iter()
        .min_by(|a, b| {
            a.centroid()
                .distance_squared_to(reference)
                .total_cmp(&b.centroid().distance_squared_to(reference))
        })
        .ok_or(AnalysisError::EmptySelection)
}
