//! Physical state types for the 2D Euler equations.
//!
//! - [`Primitive`], [`Conserved`]: per-cell gas state in both forms
//! - [`FluidState`]: the two whole-grid fields, kept in step
//! - [`primitive_to_conserved`], [`conserved_to_primitive`]: field conversions
//!   with the positivity guard

mod euler_2d;
mod fluid;

pub use euler_2d::{Conserved, Primitive};
pub use fluid::{
    ConservedField, FieldExtremes, FluidState, PrimitiveField, check_positivity,
    conserved_to_primitive, conserved_to_primitive_region, primitive_to_conserved,
};
