//! Finite-volume solver components.
//!
//! # Submodules
//!
//! - [`core`]: Cell-centered storage on the ghost-padded grid
//! - [`state`]: Gas state types and field conversions
//! - [`limiters`]: Slope limiters for linear reconstruction
//! - [`reconstruction`]: Interface states, with optional Hancock predictor
//! - [`diagnostics`]: Conservation and bounds diagnostics
//!
//! # Limiter Traits
//!
//! The [`SlopeLimiter`] trait provides a generic interface for slope
//! limiters, with [`LimiterKind`] for zero-cost dispatch and
//! [`create_limiter`] for runtime selection.

pub mod core;
pub mod diagnostics;
pub mod limiters;
pub mod reconstruction;
pub mod state;

// Re-export storage and state types
pub use self::core::CellField;
pub use state::{
    Conserved, ConservedField, FieldExtremes, FluidState, Primitive, PrimitiveField,
    check_positivity, conserved_to_primitive, primitive_to_conserved,
};

// Re-export limiter types
pub use limiters::{BoxedSlopeLimiter, LimiterKind, SlopeLimiter, create_limiter};

// Re-export reconstruction types
pub use reconstruction::{
    EdgeSource, EdgeStates, LinearReconstruction, Reconstruction, SweepContext,
};

// Re-export diagnostics
pub use diagnostics::{
    DiagnosticsTracker, EulerDiagnostics2D, total_energy, total_mass, total_momentum,
};
