pub mod analysis;
pub mod cluster;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod location;
pub mod region;
pub mod terrain;
pub mod wall;

pub use analysis::{compute_wall_placement, find_ramps, AnalysisParams, RampAnalysis};
pub use error::{AnalysisError, Result};
pub use geometry::Point;
pub use location::Cell;
pub use region::Region;
pub use terrain::{FastTerrainGrid, TerrainFlags, TerrainSource};
pub use wall::{WallConfig, WallPlacement};
