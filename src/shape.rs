// src/shape.rs

use std::fmt;

/// Extents (nx, ny, nz) of a flattened 3D array.
///
/// Flat layout is x-fastest: `idx = (k * ny + j) * nx + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape3 {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl Shape3 {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// A single x-y plane (nz = 1).
    pub fn plane(nx: usize, ny: usize) -> Self {
        Self { nx, ny, nz: 1 }
    }

    /// Total number of cells. Saturates at `usize::MAX`; use [`Shape3::checked_n_cells`]
    /// where an overflowing extent must be rejected.
    pub fn n_cells(&self) -> usize {
        self.checked_n_cells().unwrap_or(usize::MAX)
    }

    /// Total number of cells, or `None` if nx * ny * nz overflows `usize`.
    pub fn checked_n_cells(&self) -> Option<usize> {
        self.nx.checked_mul(self.ny)?.checked_mul(self.nz)
    }

    /// Convert (i, j, k) indices to a flat index into a 1D array.
    #[inline]
    pub fn idx(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny && k < self.nz);
        (k * self.ny + j) * self.nx + i
    }
}

impl fmt::Display for Shape3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.nx, self.ny, self.nz)
    }
}
