//! Uniform Cartesian grid geometry.

use std::fmt;

use crate::boundary::BoundaryKind;
use crate::error::ConfigError;
use crate::types::{Axis, Bounds2D, Resolution2D};

/// Geometry of the computational grid: resolution, physical bounds, cell
/// size and boundary policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub resolution: Resolution2D,
    pub bounds: Bounds2D,
    /// Uniform cell size in both axes
    pub dx: f64,
    pub boundary: BoundaryKind,
}

impl Grid {
    /// Grid of `nx` x `ny` square cells over `[x_min, x_max]`, starting at
    /// `y_min`, with `ng` ghost layers.
    pub fn new(
        nx: usize,
        ny: usize,
        ng: usize,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        boundary: BoundaryKind,
    ) -> Result<Self, ConfigError> {
        let bounds = Bounds2D::from_cells(x_min, x_max, y_min, nx, ny)?;
        let resolution = Resolution2D::new(nx, ny, ng)?;
        Ok(Self {
            resolution,
            bounds,
            dx: bounds.width() / nx as f64,
            boundary,
        })
    }

    /// Coordinate of the center of array index `index` along `axis`
    /// (ghosts included): `min + (index - ng + 1/2) dx`.
    #[inline]
    pub fn cell_center(&self, axis: Axis, index: usize) -> f64 {
        let origin = match axis {
            Axis::X => self.bounds.x_min,
            Axis::Y => self.bounds.y_min,
        };
        let offset = index as f64 - self.resolution.ng() as f64 + 0.5;
        origin + offset * self.dx
    }

    /// All cell-center coordinates along `axis`, ghosts included.
    pub fn cell_centers(&self, axis: Axis) -> Vec<f64> {
        (0..self.resolution.extent(axis))
            .map(|index| self.cell_center(axis, index))
            .collect()
    }

    /// Cell area dx².
    #[inline]
    pub fn cell_area(&self) -> f64 {
        self.dx * self.dx
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells on {}, dx={:.4e}, boundary={}",
            self.resolution, self.bounds, self.dx, self.boundary
        )
    }
}
