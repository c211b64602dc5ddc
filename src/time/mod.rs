//! Time integration: scheme selection, CFL step size and the
//! dimensionally split update.
//!
//! One step of size dt = cfl * dx / u_max runs a sweep along each axis,
//! alternating which axis goes first from one step to the next (see
//! [`Clock::sweep_order`]).

mod cfl;
mod clock;
mod scheme;
mod sweep;

pub use cfl::{cfl_timestep, max_signal_speed};
#[cfg(feature = "parallel")]
pub use cfl::max_signal_speed_parallel;
pub use clock::Clock;
pub use scheme::{HydroScheme, ReconstructionKind, TimeIntegrationKind};
pub use sweep::{apply_flux_difference, compute_interface_fluxes, sweep};
