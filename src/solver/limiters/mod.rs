//! Slope limiters for linear reconstruction.
//!
//! Limiters keep the reconstruction free of new extrema near
//! discontinuities while leaving smooth regions second-order accurate.
//!
//! - [`SlopeLimiter`]: Trait for per-component slope limiters
//! - [`NoLimiter`], [`Minmod`], [`VanLeer`], [`MonotonizedCentral`]: Concrete implementations
//! - [`LimiterKind`]: Zero-cost dispatch enum, selectable by name
//! - [`minmod`], [`van_leer`], [`monotonized_central`], [`central`]: Scalar kernels

mod slope;
mod standard;
mod traits;

pub use slope::{central, minmod, monotonized_central, van_leer};
pub use standard::{LimiterKind, Minmod, MonotonizedCentral, NoLimiter, VanLeer, create_limiter};
pub use traits::{BoxedSlopeLimiter, SlopeLimiter};
