//! Numerical (interface) fluxes.
//!
//! # Flux Trait
//!
//! The [`RiemannSolver`] trait provides a generic interface for approximate
//! Riemann solvers, with both compile-time ([`RiemannKind`]) and runtime
//! ([`create_riemann_solver`]) dispatch.
//!
//! ## Built-in Solvers
//! - [`HllFlux`]: HLL two-wave solver (robust, diffusive at contacts)

mod hll;
pub mod traits;

pub use hll::{hll_flux, hll_wave_speeds};
pub use traits::{
    BoxedRiemannSolver, FluxContext, HllFlux, RiemannKind, RiemannSolver, create_riemann_solver,
};
