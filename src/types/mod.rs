//! Strongly-typed grid descriptors.
//!
//! - [`Axis`]: sweep direction, with neighbor arithmetic along it
//! - [`Bounds2D`]: physical extent of the domain
//! - [`Resolution2D`]: cell counts and ghost halo width
//!
//! # Example
//!
//! ```
//! use fv_euler::types::{Axis, Bounds2D, Resolution2D};
//!
//! let bounds = Bounds2D::from_cells(0.0, 2.0, 0.0, 20, 10).unwrap();
//! assert_eq!(bounds.width(), 2.0);
//!
//! let res = Resolution2D::new(20, 10, 2).unwrap();
//! assert_eq!(res.extent(Axis::X), 24);
//! ```

mod axis;
mod bounds;
mod resolution;

pub use axis::Axis;
pub use bounds::Bounds2D;
pub use resolution::Resolution2D;
