//! Governing equations.
//!
//! Provides the ideal-gas Euler system in 2D:
//!
//! ∂q/∂t + ∂f(q)/∂x + ∂g(q)/∂y = 0
//!
//! with q = (ρ, ρvx, ρvy, E). [`Euler2D`] owns the adiabatic index and
//! everything that depends on it: primitive/conserved conversion, the
//! physical flux, the sound speed and the quasi-linear primitive form used
//! by the Hancock predictor.

mod euler_2d;

pub use euler_2d::Euler2D;
