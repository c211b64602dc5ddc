//! Sweep axes of the Cartesian grid.

use std::fmt;

/// Coordinate axis along which a directional sweep runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Both axes in their natural order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Numeric index (0 for x, 1 for y).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// The transverse axis.
    #[inline]
    pub const fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Cell `(i, j)` shifted one place backwards along this axis.
    ///
    /// Callers guarantee the shifted index stays inside the array.
    #[inline]
    pub const fn prev(self, i: usize, j: usize) -> (usize, usize) {
        match self {
            Axis::X => (i - 1, j),
            Axis::Y => (i, j - 1),
        }
    }

    /// Cell `(i, j)` shifted one place forwards along this axis.
    #[inline]
    pub const fn next(self, i: usize, j: usize) -> (usize, usize) {
        match self {
            Axis::X => (i + 1, j),
            Axis::Y => (i, j + 1),
        }
    }

    /// Compose `(i, j)` from a coordinate along this axis and one along
    /// the transverse axis.
    #[inline]
    pub const fn cell(self, along: usize, across: usize) -> (usize, usize) {
        match self {
            Axis::X => (along, across),
            Axis::Y => (across, along),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}
