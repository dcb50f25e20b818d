//! Continuous-space 2-D geometry for the wall solver.
//!
//! `Point` is distinct from [`Cell`](crate::location::Cell): cells index the
//! sampled grid, points live in continuous space (centroids, intersections,
//! placement results). Converting a point back to a cell truncates toward
//! the grid origin.

use crate::error::{AnalysisError, Result};
use crate::location::Cell;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn distance_to(self, other: Self) -> f32 {
        self.distance_squared_to(other).sqrt()
    }

    pub fn distance_squared_to(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Truncating conversion to the grid cell containing this point.
    /// Negative coordinates clamp to the grid origin.
    pub fn to_cell(self) -> Cell {
        Cell::new(self.x as u16, self.y as u16)
    }
}

impl From<Cell> for Point {
    fn from(cell: Cell) -> Self {
        Point::new(cell.x() as f32, cell.y() as f32)
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Self;
    fn mul(self, scale: f32) -> Self {
        Point::new(self.x * scale, self.y * scale)
    }
}

impl std::ops::Div<f32> for Point {
    type Output = Self;
    fn div(self, scale: f32) -> Self {
        Point::new(self.x / scale, self.y / scale)
    }
}

/// Coordinate-wise arithmetic mean. `None` for an empty set.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::default(), |acc, &p| acc + p);
    Some(sum / points.len() as f32)
}

/// The point `distance` along the ray from `from` through `to`.
/// Degenerates to `from` when the two points coincide.
pub fn towards(from: Point, to: Point, distance: f32) -> Point {
    if from == to {
        return from;
    }
    let d = from.distance_to(to);
    from + (to - from) * (distance / d)
}

/// Intersection of two circles of equal radius `r` centered at `p1` and `p2`.
///
/// Both intersection points are returned; they are reflections of each other
/// across the `p1p2` line. Fails when the centers coincide or when
/// `r <= d / 2` (the circles are too far apart to meet), so callers never
/// see NaN coordinates.
pub fn circle_intersection(p1: Point, p2: Point, r: f32) -> Result<[Point; 2]> {
    if p1 == p2 {
        return Err(AnalysisError::CoincidentCenters);
    }
    let d = p1.distance_to(p2);
    if r <= d / 2.0 {
        return Err(AnalysisError::NoIntersection {
            radius: r,
            distance: d,
        });
    }

    // Distance from the chord midpoint to either intersection, by Pythagoras.
    let h = ((r * r) - (d / 2.0) * (d / 2.0)).sqrt();

    let half = (p2 - p1) / 2.0;
    let mid = p1 + half;

    // Stretch the half-offset vector to length h, then rotate it 90 degrees
    // both ways to walk from the midpoint to the two intersections.
    let leg = half * (h / (d / 2.0));

    Ok([
        Point::new(mid.x + leg.y, mid.y - leg.x),
        Point::new(mid.x - leg.y, mid.y + leg.x),
    ])
}
