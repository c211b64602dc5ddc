//! Trait-based Riemann solver abstraction.
//!
//! # Example
//! ```
//! use fv_euler::equations::Euler2D;
//! use fv_euler::flux::{FluxContext, HllFlux, RiemannSolver};
//! use fv_euler::solver::Primitive;
//! use fv_euler::types::Axis;
//!
//! let ctx = FluxContext::new(Euler2D::new(1.4).unwrap(), Axis::X);
//! let v_l = Primitive::at_rest(1.0, 1.0);
//! let v_r = Primitive::at_rest(0.125, 0.1);
//!
//! // Using concrete type
//! let f = HllFlux.interface_flux(&v_l, &v_r, &ctx).unwrap();
//!
//! // Using trait object
//! let solver: &dyn RiemannSolver = &HllFlux;
//! let g = solver.interface_flux(&v_l, &v_r, &ctx).unwrap();
//! assert_eq!(f, g);
//! assert!(f.rho > 0.0);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::equations::Euler2D;
use crate::error::{ConfigError, StateError};
use crate::solver::state::{Conserved, Primitive};
use crate::types::Axis;

use super::hll::hll_flux;

/// Context provided to Riemann solver evaluations.
#[derive(Clone, Copy, Debug)]
pub struct FluxContext {
    /// Equation of state
    pub gas: Euler2D,
    /// Sweep direction; the interface normal is +axis
    pub axis: Axis,
}

impl FluxContext {
    #[inline]
    pub fn new(gas: Euler2D, axis: Axis) -> Self {
        Self { gas, axis }
    }
}

/// Trait for approximate Riemann solvers.
///
/// A Riemann solver computes the flux through an interface given the
/// primitive states on its low (`v_l`) and high (`v_r`) side.
///
/// # Implementation Notes
///
/// - Solvers should be consistent: F*(V, V) = F(V)
/// - The computation at one interface must not depend on any other
/// - `interface_flux` should not allocate
///
/// # Extending
///
/// To add a new solver:
/// 1. Create a struct (can be zero-sized if no parameters)
/// 2. Implement `RiemannSolver` for it
/// 3. Add it to `RiemannKind` for selection by name
pub trait RiemannSolver: Send + Sync {
    /// Numerical flux through the interface between `v_l` and `v_r`.
    fn interface_flux(
        &self,
        v_l: &Primitive,
        v_r: &Primitive,
        ctx: &FluxContext,
    ) -> Result<Conserved, StateError>;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Type alias for boxed Riemann solver (runtime polymorphism).
pub type BoxedRiemannSolver = Box<dyn RiemannSolver>;

/// HLL solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct HllFlux;

impl RiemannSolver for HllFlux {
    #[inline]
    fn interface_flux(
        &self,
        v_l: &Primitive,
        v_r: &Primitive,
        ctx: &FluxContext,
    ) -> Result<Conserved, StateError> {
        hll_flux(&ctx.gas, ctx.axis, v_l, v_r)
    }

    fn name(&self) -> &'static str {
        "hll"
    }
}

/// Standard Riemann solvers for zero-cost dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RiemannKind {
    /// Harten-Lax-van Leer
    #[default]
    Hll,
}

impl RiemannKind {
    pub const NAMES: &'static str = "hll";
}

impl RiemannSolver for RiemannKind {
    #[inline]
    fn interface_flux(
        &self,
        v_l: &Primitive,
        v_r: &Primitive,
        ctx: &FluxContext,
    ) -> Result<Conserved, StateError> {
        match self {
            RiemannKind::Hll => HllFlux.interface_flux(v_l, v_r, ctx),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RiemannKind::Hll => HllFlux.name(),
        }
    }
}

impl FromStr for RiemannKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hll" => Ok(Self::Hll),
            _ => Err(ConfigError::UnknownKind {
                what: "riemann solver",
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for RiemannKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Create a boxed solver from a standard solver type.
pub fn create_riemann_solver(kind: RiemannKind) -> BoxedRiemannSolver {
    match kind {
        RiemannKind::Hll => Box::new(HllFlux),
    }
}
