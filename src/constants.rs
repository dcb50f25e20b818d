/// Minimum number of cells for a connected component to count as a ramp.
/// Smaller components are discarded as sampling noise.
pub const DEFAULT_MIN_GROUP_SIZE: usize = 8;

/// Maximum Manhattan distance at which two candidate cells are considered
/// linked during clustering. 1 is plain 4-neighbor adjacency; 2 lets
/// diagonal and one-cell-gapped candidates join the same component.
pub const DEFAULT_MAX_LINK_DISTANCE: i32 = 2;

/// Offset from a cell's grid origin to the placement-center convention
/// for structures with odd-sized footprints.
pub const STRUCTURE_CENTER_OFFSET: (f32, f32) = (0.5, 0.5);

/// Squared radius from each offset anchor to the center gap-filler.
/// Encodes the gap structure's footprint; the solver takes the square root.
pub const CENTER_GAP_RADIUS_SQUARED: f32 = 2.5;

/// Squared radius from the wall midpoint and the gap-filler to each corner
/// structure center.
pub const CORNER_RADIUS_SQUARED: f32 = 5.0;
