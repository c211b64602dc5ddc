//! Simulation facade.
//!
//! [`Simulation`] owns the grid, the fluid state, the scratch buffers and
//! the clock, and exposes the setup sequence a driver follows:
//!
//! 1. [`Simulation::new`] with a [`HydroScheme`](crate::time::HydroScheme)
//! 2. [`Simulation::set_domain`]
//! 3. [`Simulation::set_fluid_properties`]
//! 4. write the initial primitive state, then [`Simulation::sync_conserved`]
//! 5. repeatedly [`Simulation::timestep`], or [`Simulation::run_until`]
//!
//! # Example
//! ```
//! use fv_euler::boundary::BoundaryKind;
//! use fv_euler::simulation::Simulation;
//! use fv_euler::solver::Primitive;
//! use fv_euler::time::HydroScheme;
//!
//! let mut sim = Simulation::new(HydroScheme::new(0.8)).unwrap();
//! sim.set_domain(64, 4, 0.0, 1.0, 0.0, BoundaryKind::Outflow).unwrap();
//! sim.set_fluid_properties(1.4).unwrap();
//! sim.set_primitive_from_fn(|x, _y| {
//!     if x < 0.5 {
//!         Primitive::at_rest(1.0, 1.0)
//!     } else {
//!         Primitive::at_rest(0.125, 0.1)
//!     }
//! })
//! .unwrap();
//! sim.sync_conserved().unwrap();
//!
//! let dt = sim.timestep().unwrap();
//! assert!(dt > 0.0);
//! assert_eq!(sim.time(), dt);
//! ```

mod grid;
mod runner;

pub use grid::Grid;
pub use runner::{RunSummary, Simulation};
