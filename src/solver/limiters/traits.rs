//! Trait definitions for slope limiters.

use crate::solver::state::Primitive;

/// Trait for slope limiters used by linear reconstruction.
///
/// A limiter maps the backward and forward differences around a cell to a
/// single slope. It is applied to each primitive component independently.
///
/// # Extending
///
/// To add a new limiter:
/// 1. Create a struct (usually a unit struct)
/// 2. Implement `SlopeLimiter` for it
/// 3. Add a [`LimiterKind`](super::LimiterKind) variant if it should be
///    selectable by name
pub trait SlopeLimiter: Send + Sync {
    /// Limited slope from backward slope `sl` and forward slope `sr`.
    fn limit(&self, sl: f64, sr: f64) -> f64;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Limit every component of a primitive slope pair.
    #[inline]
    fn limit_state(&self, sl: Primitive, sr: Primitive) -> Primitive {
        sl.zip_with(sr, |a, b| self.limit(a, b))
    }

    /// Whether the limiter can clip slopes (false only for the central
    /// difference).
    fn is_limiting(&self) -> bool {
        true
    }
}

/// Type alias for boxed limiter (runtime polymorphism).
pub type BoxedSlopeLimiter = Box<dyn SlopeLimiter>;
