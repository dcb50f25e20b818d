//! Error types for ramp analysis.

use thiserror::Error;

/// Analysis failure taxonomy.
///
/// Every failure is surfaced as a value local to the analysis call; the
/// solver never returns a partial or NaN placement, and nothing here is
/// fatal to the host process.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AnalysisError {
    #[error("no regions available for selection")]
    EmptySelection,

    #[error("upper boundary has {available} point(s), at least 2 anchors are required")]
    TooFewAnchors { available: usize },

    #[error("circle centers coincide, intersection is undefined")]
    CoincidentCenters,

    #[error("circles of radius {radius} with centers {distance} apart do not intersect")]
    NoIntersection { radius: f32, distance: f32 },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
