//! # fv-euler
//!
//! A finite-volume solver for the 2D compressible Euler equations on a
//! uniform Cartesian grid.
//!
//! This crate provides the building blocks of a Godunov-type scheme:
//! - Primitive/conserved gas state and the ideal-gas equation of state
//! - Ghost-cell boundary conditions (periodic, outflow)
//! - Piecewise-constant or limited piecewise-linear reconstruction
//! - Hancock half-step predictor (primitive and conservative variants)
//! - HLL approximate Riemann solver
//! - Dimensionally split, CFL-limited time stepping
//! - Conservation diagnostics
//!
//! [`Simulation`] ties them together behind a small driver API; the
//! lower-level pieces are public for drivers that need their own loop.
//!
//! ## Feature Flags
//!
//! - `parallel`: Rayon-parallel interface flux and CFL evaluation

pub mod boundary;
pub mod equations;
pub mod error;
pub mod flux;
pub mod simulation;
pub mod solver;
pub mod time;
pub mod types;

// Re-export main types for convenience
pub use boundary::{BoundaryCondition, BoundaryKind, Outflow, Periodic, enforce_boundaries};
pub use equations::Euler2D;
pub use error::{ConfigError, HydroError, HydroResult, StateError};
pub use flux::{FluxContext, HllFlux, RiemannKind, RiemannSolver, hll_flux};
pub use simulation::{Grid, RunSummary, Simulation};
pub use solver::{
    CellField, Conserved, ConservedField, DiagnosticsTracker, EdgeStates, EulerDiagnostics2D,
    FluidState, LimiterKind, Primitive, PrimitiveField, Reconstruction, SlopeLimiter,
};
pub use time::{
    Clock, HydroScheme, ReconstructionKind, TimeIntegrationKind, cfl_timestep, max_signal_speed,
};
pub use types::{Axis, Bounds2D, Resolution2D};
