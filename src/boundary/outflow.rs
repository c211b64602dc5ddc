//! Outflow (zero-gradient) boundary condition.

use super::BoundaryCondition;

/// Zero-gradient extrapolation: every ghost copies the nearest physical
/// cell on its side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outflow;

impl BoundaryCondition for Outflow {
    #[inline]
    fn source_index(&self, index: usize, n: usize, ng: usize) -> usize {
        index.clamp(ng, ng + n - 1)
    }

    fn name(&self) -> &'static str {
        "outflow"
    }
}
