//! Boundary conditions for the ghost-padded Cartesian grid.
//!
//! A boundary condition decides, for every ghost cell, which physical
//! cell it copies. Both policies here are pure index maps applied per
//! axis, so the same rule fills primitive and conserved fields.
//!
//! # Available Boundary Conditions
//!
//! | BC Type | Description |
//! |---------|-------------|
//! | [`Periodic`] | Ghosts wrap around to the opposite edge |
//! | [`Outflow`] | Zero-gradient: ghosts copy the nearest physical cell |
//!
//! Corners follow from applying the map on both axes: a periodic corner
//! draws from the diagonally opposite physical corner, an outflow corner
//! from the nearest physical corner.

mod ghost;
mod outflow;
mod periodic;

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

pub use ghost::enforce_boundaries;
pub use outflow::Outflow;
pub use periodic::Periodic;

/// Ghost-cell fill rule along one axis.
pub trait BoundaryCondition: Send + Sync {
    /// Physical index copied into `index` along an axis with `n` physical
    /// and `ng` ghost cells on each side.
    ///
    /// Physical indices (`ng..ng + n`) map to themselves.
    fn source_index(&self, index: usize, n: usize, ng: usize) -> usize;

    /// Name of this boundary condition for debugging/logging.
    fn name(&self) -> &'static str;
}

/// Boundary condition selected at setup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Wrap-around on both axes
    Periodic,
    /// Zero-gradient extrapolation on both axes
    #[default]
    Outflow,
}

impl BoundaryKind {
    pub const NAMES: &'static str = "periodic, outflow";
}

impl BoundaryCondition for BoundaryKind {
    #[inline]
    fn source_index(&self, index: usize, n: usize, ng: usize) -> usize {
        match self {
            BoundaryKind::Periodic => Periodic.source_index(index, n, ng),
            BoundaryKind::Outflow => Outflow.source_index(index, n, ng),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BoundaryKind::Periodic => Periodic.name(),
            BoundaryKind::Outflow => Outflow.name(),
        }
    }
}

impl FromStr for BoundaryKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "periodic" => Ok(Self::Periodic),
            "outflow" => Ok(Self::Outflow),
            _ => Err(ConfigError::UnknownKind {
                what: "boundary condition",
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
