//! Public API for ramp analysis.
//!
//! The analysis is a one-shot synchronous batch: scan the terrain for
//! candidate cells, cluster them into ramp regions, and hand the immutable
//! result back to the caller. Nothing here keeps state between runs -- the
//! caller owns caching, and [`RampAnalysis`] serializes for exactly that
//! purpose (terrain is static, so a cached result stays valid).

use crate::cluster;
use crate::constants::*;
use crate::error::Result;
use crate::geometry::Point;
use crate::region::{self, Region};
use crate::terrain::{candidate_cells, TerrainSource};
use crate::wall::{self, WallConfig, WallPlacement};
use log::debug;
use serde::{Deserialize, Serialize};

/// Clustering parameters for ramp detection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Minimum cells for a connected component to be kept as a ramp.
    pub min_group_size: usize,
    /// Maximum Manhattan distance at which two candidate cells link.
    pub max_link_distance: i32,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        AnalysisParams {
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
            max_link_distance: DEFAULT_MAX_LINK_DISTANCE,
        }
    }
}

/// Result of one analysis run: every ramp region discovered on the map.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RampAnalysis {
    regions: Vec<Region>,
}

impl RampAnalysis {
    /// Regions in deterministic emission order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }

    /// The region whose centroid is closest to `reference` (e.g. a base
    /// location). Fails when the analysis found no regions.
    pub fn closest_ramp(&self, reference: Point) -> Result<&Region> {
        region::closest_region(&self.regions, reference)
    }
}

/// Detect every ramp region on the map.
///
/// A degenerate map (no candidate cells, or only components below the
/// minimum size) yields an analysis with zero regions -- never an error and
/// never an ill-formed region.
pub fn find_ramps(source: &dyn TerrainSource, params: &AnalysisParams) -> RampAnalysis {
    let candidates = candidate_cells(source);
    debug!("terrain scan found {} candidate cells", candidates.len());

    let regions = cluster::find_groups(
        &candidates,
        source,
        params.min_group_size,
        params.max_link_distance,
    );

    RampAnalysis { regions }
}

/// Compute the wall placement sealing `region`. See [`wall::solve_wall`].
pub fn compute_wall_placement(region: &Region, config: &WallConfig) -> Result<WallPlacement> {
    wall::solve_wall(region, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{FastTerrainGrid, TerrainFlags};
    use approx::assert_relative_eq;

    /// Map with a single 3-wide ramp at x 2..5 descending from the north
    /// plateau (elevation 2) to the south plain (elevation 0), surrounded
    /// by flat buildable ground.
    fn ramp_map() -> FastTerrainGrid {
        FastTerrainGrid::from_fn(9, 6, |x, y| {
            let elevation = 2 - i32::from(y).min(2);
            if (2..5).contains(&x) && y < 3 {
                (elevation, TerrainFlags::PATHABLE)
            } else {
                (elevation, TerrainFlags::PATHABLE | TerrainFlags::BUILDABLE)
            }
        })
    }

    #[test]
    fn end_to_end_symmetric_ramp() {
        let analysis = find_ramps(&ramp_map(), &AnalysisParams::default());
        assert_eq!(analysis.regions().len(), 1);
        assert_eq!(analysis.regions()[0].len(), 9);

        let ramp = analysis.closest_ramp(Point::new(3.0, 0.0)).unwrap();
        let placement = compute_wall_placement(ramp, &WallConfig::default()).unwrap();

        // The ramp is mirror-symmetric about x = 3.5 after anchor offsetting;
        // the gap filler sits on the axis with the corners mirrored around it.
        assert_relative_eq!(placement.center_gap.x, 3.5, epsilon = 1e-5);
        let [c1, c2] = placement.corners;
        assert_relative_eq!((c1.x - 3.5).abs(), (c2.x - 3.5).abs(), epsilon = 1e-5);
        assert_relative_eq!(c1.y, c2.y, epsilon = 1e-5);
    }

    #[test]
    fn buildable_map_has_no_ramps() {
        let grid = FastTerrainGrid::from_fn(8, 8, |_, _| {
            (0, TerrainFlags::PATHABLE | TerrainFlags::BUILDABLE)
        });

        let analysis = find_ramps(&grid, &AnalysisParams::default());
        assert!(analysis.regions().is_empty());
        assert!(analysis.closest_ramp(Point::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn params_control_the_minimum_size() {
        // The ramp has 9 cells; a minimum of 10 filters it out.
        let params = AnalysisParams {
            min_group_size: 10,
            ..AnalysisParams::default()
        };
        let analysis = find_ramps(&ramp_map(), &params);
        assert!(analysis.regions().is_empty());
    }
}
