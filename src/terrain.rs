//! Terrain sampling seam and grid storage.
//!
//! The analysis consumes terrain through the [`TerrainSource`] trait so it
//! can run against a live game observation or an offline snapshot alike.
//! [`FastTerrainGrid`] is the snapshot implementation: flat buffers indexed
//! row-major, one elevation sample and one flag byte per cell.

use crate::geometry::Point;
use crate::location::Cell;
use bitflags::bitflags;
use fnv::FnvHashSet;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TerrainFlags: u8 {
        const NONE = 0;
        const PATHABLE = 1;
        const BUILDABLE = 2;
    }
}

/// Trait for providing terrain data to the analysis.
/// Queries must stay within `dimensions()`.
pub trait TerrainSource {
    fn dimensions(&self) -> (u16, u16);
    fn elevation(&self, cell: Cell) -> i32;
    fn is_pathable(&self, cell: Cell) -> bool;
    fn is_buildable(&self, cell: Cell) -> bool;

    /// Elevation sampled at a continuous point (truncating conversion).
    fn elevation_at(&self, point: Point) -> i32 {
        self.elevation(point.to_cell())
    }

    fn is_pathable_at(&self, point: Point) -> bool {
        self.is_pathable(point.to_cell())
    }

    fn is_buildable_at(&self, point: Point) -> bool {
        self.is_buildable(point.to_cell())
    }
}

/// Owned terrain snapshot backed by flat buffers.
#[derive(Clone)]
pub struct FastTerrainGrid {
    width: u16,
    height: u16,
    elevation: Vec<i32>,
    flags: Vec<TerrainFlags>,
}

impl FastTerrainGrid {
    pub fn new(width: u16, height: u16, elevation: Vec<i32>, flags: Vec<TerrainFlags>) -> Self {
        FastTerrainGrid {
            width,
            height,
            elevation,
            flags,
        }
    }

    /// Build a grid by sampling `f` at every cell. Row-major order.
    /// Mainly useful for synthetic terrain in tests and benchmarks.
    pub fn from_fn<F>(width: u16, height: u16, f: F) -> Self
    where
        F: Fn(u16, u16) -> (i32, TerrainFlags),
    {
        let mut elevation = Vec::with_capacity(width as usize * height as usize);
        let mut flags = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let (e, fl) = f(x, y);
                elevation.push(e);
                flags.push(fl);
            }
        }
        FastTerrainGrid::new(width, height, elevation, flags)
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        (cell.y() as usize * self.width as usize) + cell.x() as usize
    }

    pub fn flags(&self, cell: Cell) -> TerrainFlags {
        self.flags[self.index(cell)]
    }
}

impl TerrainSource for FastTerrainGrid {
    fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn elevation(&self, cell: Cell) -> i32 {
        self.elevation[self.index(cell)]
    }

    fn is_pathable(&self, cell: Cell) -> bool {
        self.flags(cell).contains(TerrainFlags::PATHABLE)
    }

    fn is_buildable(&self, cell: Cell) -> bool {
        self.flags(cell).contains(TerrainFlags::BUILDABLE)
    }
}

/// Per-cell storage sized to the grid, row-major, O(1) access.
/// Serves as the flood-fill visited arena during clustering.
#[derive(Clone)]
pub struct GridDataArray<T: Copy> {
    width: u16,
    data: Vec<T>,
}

impl<T: Copy> GridDataArray<T> {
    pub fn new(width: u16, height: u16, initial: T) -> Self {
        GridDataArray {
            width,
            data: vec![initial; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &T {
        let index = y * self.width as usize + x;
        &self.data[index]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let index = y * self.width as usize + x;
        &mut self.data[index]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        *self.get_mut(x, y) = value;
    }
}

/// Scan the grid for clustering candidates.
///
/// A cell is a candidate iff it is pathable but not buildable -- the
/// terrain signature of a ramp edge versus flat ground.
pub fn candidate_cells(source: &dyn TerrainSource) -> FnvHashSet<Cell> {
    let (width, height) = source.dimensions();
    let mut cells = FnvHashSet::default();

    for y in 0..height {
        for x in 0..width {
            let cell = Cell::new(x, y);
            if source.is_pathable(cell) && !source.is_buildable(cell) {
                cells.insert(cell);
            }
        }
    }

    cells
}
