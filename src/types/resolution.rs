//! Grid resolution with a ghost-cell halo.

use std::fmt;
use std::ops::Range;

use super::Axis;
use crate::error::ConfigError;

/// Physical cell counts plus the width of the ghost halo.
///
/// Arrays hold `n + 2 * ng` cells per axis; the physical cells occupy
/// indices `ng..ng + n`.
///
/// # Example
///
/// ```
/// use fv_euler::types::{Axis, Resolution2D};
///
/// let res = Resolution2D::new(100, 4, 2).unwrap();
/// assert_eq!(res.extent(Axis::X), 104);
/// assert_eq!(res.physical(Axis::Y), 2..6);
/// assert_eq!(res.total_cells(), 104 * 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolution2D {
    nx: usize,
    ny: usize,
    ng: usize,
}

impl Resolution2D {
    /// Create a resolution, rejecting empty grids and missing halos.
    pub fn new(nx: usize, ny: usize, ng: usize) -> Result<Self, ConfigError> {
        if nx == 0 || ny == 0 {
            return Err(ConfigError::EmptyGrid { nx, ny });
        }
        if ng == 0 {
            return Err(ConfigError::InvalidGhostCells(ng));
        }
        Ok(Self { nx, ny, ng })
    }

    /// Physical cells in x.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Physical cells in y.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Ghost cells on each side of each axis.
    #[inline]
    pub fn ng(&self) -> usize {
        self.ng
    }

    /// Physical cell count along an axis.
    #[inline]
    pub fn cells(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
        }
    }

    /// Array extent along an axis, ghosts included.
    #[inline]
    pub fn extent(&self, axis: Axis) -> usize {
        self.cells(axis) + 2 * self.ng
    }

    /// Index range of the physical cells along an axis.
    #[inline]
    pub fn physical(&self, axis: Axis) -> Range<usize> {
        self.ng..self.ng + self.cells(axis)
    }

    /// Total array length, ghosts included.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.extent(Axis::X) * self.extent(Axis::Y)
    }

    /// Number of physical cells.
    #[inline]
    pub fn physical_cells(&self) -> usize {
        self.nx * self.ny
    }

    /// Whether `(i, j)` is a physical (non-ghost) cell.
    #[inline]
    pub fn is_physical(&self, i: usize, j: usize) -> bool {
        self.physical(Axis::X).contains(&i) && self.physical(Axis::Y).contains(&j)
    }
}

impl fmt::Display for Resolution2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{} (+{} ghost)", self.nx, self.ny, self.ng)
    }
}
