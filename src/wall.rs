//! Wall-gap solver: the three structure placements that seal a ramp.
//!
//! The construction works entirely from the ramp's own geometry:
//!
//! 1. Take the two upper-boundary points farthest from the lower
//!    boundary's centroid -- the anchors spanning the passage.
//! 2. Offset each anchor to the structure-center convention.
//! 3. Intersect equal circles of `center_radius` around the offset
//!    anchors; the intersection on the high-ground side (farther from the
//!    lower boundary) is the center gap-filler.
//! 4. Intersect equal circles of `corner_radius` around the wall midpoint
//!    and the gap-filler; those two points are the corner placements.
//!
//! The radii encode fixed structure footprints: placing centers at these
//! exact distances from the ramp anchors leaves no walkable gap.

use crate::constants::*;
use crate::error::{AnalysisError, Result};
use crate::geometry::{self, Point};
use crate::region::Region;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

/// Footprint geometry for the wall structures.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallConfig {
    /// Offset from a cell's grid origin to the placement-center convention.
    pub structure_offset: Point,
    /// Radius from each offset anchor to the center gap-filler.
    pub center_radius: f32,
    /// Radius from the wall midpoint and the gap-filler to each corner.
    pub corner_radius: f32,
}

impl Default for WallConfig {
    fn default() -> Self {
        WallConfig {
            structure_offset: Point::new(STRUCTURE_CENTER_OFFSET.0, STRUCTURE_CENTER_OFFSET.1),
            center_radius: CENTER_GAP_RADIUS_SQUARED.sqrt(),
            corner_radius: CORNER_RADIUS_SQUARED.sqrt(),
        }
    }
}

/// The three computed structure-center placements sealing one ramp,
/// together with the footprint geometry they were derived with.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WallPlacement {
    /// The two corner placements flanking the gap.
    pub corners: [Point; 2],
    /// The center gap-filler placement.
    pub center_gap: Point,
    pub config: WallConfig,
}

/// The two upper-boundary points farthest from the lower boundary's
/// centroid -- the anchors defining the ramp's outer span.
fn wall_anchors(region: &Region) -> Result<[Point; 2]> {
    let upper = region.upper_points();
    if upper.len() < 2 {
        return Err(AnalysisError::TooFewAnchors {
            available: upper.len(),
        });
    }

    let lower_center = region.lower_center();
    let ranked: Vec<Point> = upper
        .iter()
        .copied()
        .sorted_by(|a, b| {
            b.distance_squared_to(lower_center)
                .total_cmp(&a.distance_squared_to(lower_center))
        })
        .collect();

    Ok([ranked[0], ranked[1]])
}

/// Compute the wall placement sealing `region`.
///
/// Fails when the upper boundary cannot supply two anchors, or when a
/// required circle intersection is geometrically infeasible for the
/// configured radii (anchors too far apart for the footprints to bridge).
pub fn solve_wall(region: &Region, config: &WallConfig) -> Result<WallPlacement> {
    let [a, b] = wall_anchors(region)?;
    let a = a + config.structure_offset;
    let b = b + config.structure_offset;

    // Of the two candidate intersections, the gap-filler is the one on the
    // high-ground side -- farther from any lower-boundary point. The
    // probe-point rule matches the reference construction; the symmetric and
    // asymmetric ramp tests pin it down.
    let intersects = geometry::circle_intersection(a, b, config.center_radius)?;
    let probe = region.lower_points()[0];
    let center_gap = if intersects[0].distance_squared_to(probe)
        >= intersects[1].distance_squared_to(probe)
    {
        intersects[0]
    } else {
        intersects[1]
    };

    let wall_center = geometry::towards(a, b, a.distance_to(b) / 2.0);
    let corners = geometry::circle_intersection(wall_center, center_gap, config.corner_radius)?;

    debug!(
        "wall solve: anchors ({:.1},{:.1})/({:.1},{:.1}), gap filler ({:.1},{:.1})",
        a.x, a.y, b.x, b.y, center_gap.x, center_gap.y
    );

    Ok(WallPlacement {
        corners,
        center_gap,
        config: *config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Cell;
    use crate::region::Region;
    use crate::terrain::{FastTerrainGrid, TerrainFlags};
    use approx::assert_relative_eq;

    /// A 3-wide ramp descending from y=0 (elevation 2) to y=2 (elevation 0),
    /// mirror-symmetric about x=3.
    fn symmetric_ramp() -> Region {
        let grid = FastTerrainGrid::from_fn(7, 4, |_, y| {
            (2 - i32::from(y).min(2), TerrainFlags::PATHABLE)
        });
        let cells: Vec<Cell> = (0..3)
            .flat_map(|y| (2..5).map(move |x| Cell::new(x, y)))
            .collect();
        Region::from_cells(&cells, &grid)
    }

    #[test]
    fn symmetric_ramp_yields_a_symmetric_wall() {
        let region = symmetric_ramp();
        let config = WallConfig::default();
        let placement = solve_wall(&region, &config).unwrap();

        // Anchors are (2,0) and (4,0), offset to x = 2.5 / 4.5; the wall
        // axis of symmetry is x = 3.5.
        let axis = 3.5;
        assert_relative_eq!(placement.center_gap.x, axis, epsilon = 1e-5);

        let [c1, c2] = placement.corners;
        assert_relative_eq!((c1.x - axis).abs(), (c2.x - axis).abs(), epsilon = 1e-5);
        assert_relative_eq!(c1.y, c2.y, epsilon = 1e-5);

        // The gap-filler sits on the high-ground side of the anchors.
        assert!(placement.center_gap.y < 0.5);
    }

    #[test]
    fn corners_keep_the_configured_distances() {
        let region = symmetric_ramp();
        let config = WallConfig::default();
        let placement = solve_wall(&region, &config).unwrap();

        let wall_center = Point::new(3.5, 0.5);
        for corner in placement.corners {
            assert_relative_eq!(
                corner.distance_to(wall_center),
                config.corner_radius,
                epsilon = 1e-5
            );
            assert_relative_eq!(
                corner.distance_to(placement.center_gap),
                config.corner_radius,
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn asymmetric_ramp_still_places_the_gap_filler_uphill() {
        // Same ramp with two extra low cells hanging off the right side.
        // The anchors shift toward the bulge, but the gap filler must stay
        // on the high-ground side.
        let grid = FastTerrainGrid::from_fn(8, 5, |_, y| {
            (2 - i32::from(y).min(2), TerrainFlags::PATHABLE)
        });
        let mut cells: Vec<Cell> = (0..3)
            .flat_map(|y| (2..5).map(move |x| Cell::new(x, y)))
            .collect();
        cells.push(Cell::new(5, 2));
        cells.push(Cell::new(5, 3));
        let region = Region::from_cells(&cells, &grid);

        let placement = solve_wall(&region, &WallConfig::default()).unwrap();
        assert!(placement.center_gap.y < 0.5);
    }

    #[test]
    fn single_point_upper_boundary_cannot_anchor_a_wall() {
        // One high cell, the rest low: only one anchor available.
        let grid = FastTerrainGrid::from_fn(4, 4, |x, y| {
            let elevation = if x == 0 && y == 0 { 5 } else { 0 };
            (elevation, TerrainFlags::PATHABLE)
        });
        let cells: Vec<Cell> = (0..3).map(|i| Cell::new(i, i)).collect();
        let region = Region::from_cells(&cells, &grid);

        assert_eq!(
            solve_wall(&region, &WallConfig::default()).unwrap_err(),
            AnalysisError::TooFewAnchors { available: 1 }
        );
    }

    #[test]
    fn anchors_too_far_apart_for_the_footprint_fail_cleanly() {
        // Upper boundary spans 8 cells -- far beyond what the default
        // center radius can bridge.
        let grid = FastTerrainGrid::from_fn(10, 3, |_, y| {
            (1 - i32::from(y).min(1), TerrainFlags::PATHABLE)
        });
        let cells: Vec<Cell> = (0..2)
            .flat_map(|y| (0..9).map(move |x| Cell::new(x, y)))
            .collect();
        let region = Region::from_cells(&cells, &grid);

        match solve_wall(&region, &WallConfig::default()) {
            Err(AnalysisError::NoIntersection { radius, distance }) => {
                assert_relative_eq!(radius, 2.5_f32.sqrt());
                assert!(distance > radius * 2.0);
            }
            other => panic!("expected NoIntersection, got {other:?}"),
        }
    }

    #[test]
    fn custom_footprints_change_the_geometry() {
        let region = symmetric_ramp();
        let config = WallConfig {
            structure_offset: Point::new(0.5, 0.5),
            center_radius: 10.0,
            corner_radius: 12.0,
        };
        let placement = solve_wall(&region, &config).unwrap();

        let a = Point::new(2.5, 0.5);
        assert_relative_eq!(
            placement.center_gap.distance_to(a),
            config.center_radius,
            epsilon = 1e-4
        );
    }
}
