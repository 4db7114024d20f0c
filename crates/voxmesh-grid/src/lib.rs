//! Flat-array occupancy storage and the voxel flat-index codec.
#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error(
        "expected a flat array of length {expected} for a {x_size}x{y_size}x{z_size} grid, got {actual}"
    )]
    DimensionMismatch {
        x_size: usize,
        y_size: usize,
        z_size: usize,
        expected: usize,
        actual: usize,
    },
}

/// Flat index of `(x, y, z)` in a grid with the given Y and Z extents.
///
/// The y term scales by the Z extent and the z term by Z*Y. External datasets
/// are pre-encoded with exactly this formula, so it is a wire contract and
/// must not be normalized to the conventional `x + y*X + z*X*Y` form.
/// No bounds check here; callers pass coordinates already known to be inside
/// the declared extents.
/// The encoding is injective only while the X extent does not exceed the Z
/// extent (the x stride is 1 but the y stride is the Z extent); external
/// datasets are cubic, where that always holds.
#[inline]
pub const fn flat_index(x: usize, y: usize, z: usize, y_size: usize, z_size: usize) -> usize {
    x + y * z_size + z * z_size * y_size
}

/// Inverse of [`flat_index`] under the same injectivity condition
/// (`x_size <= z_size`).
#[inline]
pub const fn flat_coord(index: usize, y_size: usize, z_size: usize) -> (usize, usize, usize) {
    (
        index % z_size,
        (index / z_size) % y_size,
        index / (z_size * y_size),
    )
}

/// Dense 3D occupancy field. Cell value 0 is empty; anything greater is a
/// solid material id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    x_size: usize,
    y_size: usize,
    z_size: usize,
    cells: Vec<u8>,
}

impl VoxelGrid {
    /// All-empty grid of the given extents.
    pub fn empty(x_size: usize, y_size: usize, z_size: usize) -> Self {
        Self {
            x_size,
            y_size,
            z_size,
            cells: vec![0; x_size * y_size * z_size],
        }
    }

    /// Wraps a pre-encoded flat cell array. The array length must equal the
    /// product of the extents.
    pub fn from_cells(
        x_size: usize,
        y_size: usize,
        z_size: usize,
        cells: Vec<u8>,
    ) -> Result<Self, GridError> {
        let expected = x_size * y_size * z_size;
        if cells.len() != expected {
            return Err(GridError::DimensionMismatch {
                x_size,
                y_size,
                z_size,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            x_size,
            y_size,
            z_size,
            cells,
        })
    }

    /// Builds a grid from a flat solid/empty array (solid becomes material 1).
    pub fn from_occupancy(
        x_size: usize,
        y_size: usize,
        z_size: usize,
        solid: &[bool],
    ) -> Result<Self, GridError> {
        let cells = solid.iter().map(|&s| if s { 1 } else { 0 }).collect();
        Self::from_cells(x_size, y_size, z_size, cells)
    }

    #[inline]
    pub fn x_size(&self) -> usize {
        self.x_size
    }

    #[inline]
    pub fn y_size(&self) -> usize {
        self.y_size
    }

    #[inline]
    pub fn z_size(&self) -> usize {
        self.z_size
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.x_size, self.y_size, self.z_size)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        flat_index(x, y, z, self.y_size, self.z_size)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> u8 {
        self.cells[self.idx(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: u8) {
        let i = self.idx(x, y, z);
        self.cells[i] = value;
    }

    /// Bounds-aware neighbor query over signed coordinates. Anything outside
    /// the grid on any axis reads as empty, so edge voxels always border
    /// exposed space.
    #[inline]
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        if x < 0 || y < 0 || z < 0 {
            return false;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        if x >= self.x_size || y >= self.y_size || z >= self.z_size {
            return false;
        }
        self.cells[self.idx(x, y, z)] > 0
    }

    #[inline]
    pub fn has_solid(&self) -> bool {
        self.cells.iter().any(|&c| c > 0)
    }

    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
