//! 2D domain bounds.

use std::fmt;

use crate::error::ConfigError;

/// Rectangular extent of the physical domain (ghost cells excluded).
///
/// Cells are square, so only `x_min`, `x_max` and `y_min` are free
/// parameters: `y_max` follows from the cell size and the row count.
///
/// # Example
///
/// ```
/// use fv_euler::types::Bounds2D;
///
/// let bounds = Bounds2D::from_cells(0.0, 1.0, 0.0, 100, 4).unwrap();
/// assert!((bounds.y_max - 0.04).abs() < 1e-15);
/// assert_eq!(bounds.width(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2D {
    /// Minimum x-coordinate (left edge of the first physical column)
    pub x_min: f64,
    /// Maximum x-coordinate
    pub x_max: f64,
    /// Minimum y-coordinate (bottom edge of the first physical row)
    pub y_min: f64,
    /// Maximum y-coordinate, `y_min + ny * dx`
    pub y_max: f64,
}

impl Bounds2D {
    /// Build bounds for an `nx` x `ny` grid of square cells spanning
    /// `[x_min, x_max]` horizontally.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyGrid`] if either count is zero
    /// - [`ConfigError::InvalidBounds`] if any coordinate is not finite
    /// - [`ConfigError::InvalidCellSize`] if `x_max <= x_min`
    pub fn from_cells(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        nx: usize,
        ny: usize,
    ) -> Result<Self, ConfigError> {
        if nx == 0 || ny == 0 {
            return Err(ConfigError::EmptyGrid { nx, ny });
        }
        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite()) {
            return Err(ConfigError::InvalidBounds {
                x_min,
                x_max,
                y_min,
            });
        }

        let dx = (x_max - x_min) / nx as f64;
        if !(dx > 0.0 && dx.is_finite()) {
            return Err(ConfigError::InvalidCellSize(dx));
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max: y_min + ny as f64 * dx,
        })
    }

    /// Domain width (x_max - x_min).
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Domain height (y_max - y_min).
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Domain area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Check if a point is inside the domain (inclusive).
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Return bounds as tuple (x_min, x_max, y_min, y_max).
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}] × [{:.3}, {:.3}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
