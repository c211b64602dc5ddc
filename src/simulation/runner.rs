//! Simulation runner implementation.

use std::time::Instant;

use crate::boundary::BoundaryKind;
use crate::equations::Euler2D;
use crate::error::{HydroError, HydroResult, StateError};
use crate::solver::core::CellField;
use crate::solver::diagnostics::EulerDiagnostics2D;
use crate::solver::reconstruction::{EdgeSource, EdgeStates, Reconstruction, SweepContext};
use crate::solver::state::{ConservedField, FluidState, Primitive, PrimitiveField};
use crate::time::{self, Clock, HydroScheme, cfl_timestep};
use crate::types::Axis;

use super::grid::Grid;

/// Effective CFL above which a completed step is reported as marginal.
const CFL_WARN_THRESHOLD: f64 = 1.0;

// =============================================================================
// Run Summary
// =============================================================================

/// Result of [`Simulation::run_until`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Steps taken by this call
    pub steps: u64,
    /// Simulation time after the last step
    pub final_time: f64,
    /// Smallest step taken (infinite if none)
    pub dt_min: f64,
    /// Largest step taken (zero if none)
    pub dt_max: f64,
    /// Whether `t_end` was reached before the step cap
    pub reached_end: bool,
    /// Wall-clock time in seconds
    pub wall_time: f64,
}

// =============================================================================
// Simulation
// =============================================================================

/// Everything that depends on the grid.
#[derive(Clone, Debug)]
struct Domain {
    grid: Grid,
    state: FluidState,
    reconstruction: Reconstruction,
    fluxes: ConservedField,
}

/// A 2D Euler simulation on a uniform Cartesian grid.
///
/// Owns all arrays exclusively; nothing is shared between instances.
#[derive(Clone, Debug)]
pub struct Simulation {
    scheme: HydroScheme,
    domain: Option<Domain>,
    gas: Option<Euler2D>,
    clock: Clock,
    /// Conserved state derived from the current primitive state
    synced: bool,
    /// A step failed; state is untrustworthy until re-synced
    halted: bool,
    last_dt: f64,
}

impl Simulation {
    /// Create a simulation with a fixed numerical scheme.
    ///
    /// # Errors
    ///
    /// Whatever [`HydroScheme::validate`] rejects.
    pub fn new(scheme: HydroScheme) -> HydroResult<Self> {
        scheme.validate()?;
        Ok(Self {
            scheme,
            domain: None,
            gas: None,
            clock: Clock::new(),
            synced: false,
            halted: false,
            last_dt: 0.0,
        })
    }

    /// Allocate the grid and its arrays.
    ///
    /// The ghost width follows from the reconstruction (1 for constant,
    /// 2 for linear). Calling this again discards the previous state and
    /// resets the clock.
    pub fn set_domain(
        &mut self,
        nx: usize,
        ny: usize,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        boundary: BoundaryKind,
    ) -> HydroResult<()> {
        let grid = Grid::new(
            nx,
            ny,
            self.scheme.ghost_cells(),
            x_min,
            x_max,
            y_min,
            boundary,
        )?;
        let res = grid.resolution;

        self.domain = Some(Domain {
            grid,
            state: FluidState::new(res),
            reconstruction: Reconstruction::new(
                self.scheme.reconstruction,
                res,
                self.scheme.limiter,
                self.scheme.time_integration,
            ),
            fluxes: CellField::new(res),
        });
        self.clock = Clock::new();
        self.synced = false;
        self.halted = false;
        self.last_dt = 0.0;

        log::info!("domain: {grid}");
        log::info!("scheme: {}", self.scheme);
        Ok(())
    }

    /// Set the adiabatic index. Requires [`Simulation::set_domain`] first.
    pub fn set_fluid_properties(&mut self, gamma: f64) -> HydroResult<()> {
        if self.domain.is_none() {
            return Err(HydroError::Precondition(
                "set_domain must be called before set_fluid_properties",
            ));
        }
        self.gas = Some(Euler2D::new(gamma)?);
        // U must be re-derived with the new gamma
        self.synced = false;
        log::info!("fluid: gamma={gamma}");
        Ok(())
    }

    fn domain(&self) -> HydroResult<&Domain> {
        self.domain
            .as_ref()
            .ok_or(HydroError::Precondition("set_domain has not been called"))
    }

    fn domain_mut(&mut self) -> HydroResult<&mut Domain> {
        self.domain
            .as_mut()
            .ok_or(HydroError::Precondition("set_domain has not been called"))
    }

    fn gas(&self) -> HydroResult<Euler2D> {
        self.gas.ok_or(HydroError::Precondition(
            "set_fluid_properties has not been called",
        ))
    }

    /// Domain, gas and a synced state, or the first missing precondition.
    fn ready(&self) -> HydroResult<(&Domain, Euler2D)> {
        let domain = self.domain()?;
        let gas = self.gas()?;
        if !self.synced {
            return Err(HydroError::Precondition(
                "initial state not synced: call sync_conserved after writing primitives",
            ));
        }
        Ok((domain, gas))
    }

    // -------------------------------------------------------------------------
    // Initial conditions
    // -------------------------------------------------------------------------

    /// Mutable primitive field (ghosts included) for writing an initial
    /// condition. Invalidates the conserved state until
    /// [`Simulation::sync_conserved`] is called.
    pub fn primitive_mut(&mut self) -> HydroResult<&mut PrimitiveField> {
        let domain = self.domain.as_mut().ok_or(HydroError::Precondition(
            "set_domain has not been called",
        ))?;
        self.synced = false;
        Ok(&mut domain.state.primitive)
    }

    /// Fill every cell, ghosts included, from a function of the cell
    /// center. Call [`Simulation::sync_conserved`] afterwards.
    pub fn set_primitive_from_fn<F>(&mut self, mut f: F) -> HydroResult<()>
    where
        F: FnMut(f64, f64) -> Primitive,
    {
        let domain = self.domain_mut()?;
        let grid = domain.grid;
        for (j, row) in domain.state.primitive.rows_mut().enumerate() {
            let y = grid.cell_center(Axis::Y, j);
            for (i, cell) in row.iter_mut().enumerate() {
                *cell = f(grid.cell_center(Axis::X, i), y);
            }
        }
        self.synced = false;
        Ok(())
    }

    /// Derive U from V and refresh ghost cells of both.
    ///
    /// Also clears a halt left by a failed step, so a driver can restart
    /// from a fresh initial condition.
    ///
    /// # Errors
    ///
    /// Precondition errors for a missing setup call, or a
    /// [`StateError`] if a physical cell has non-positive density or
    /// pressure.
    pub fn sync_conserved(&mut self) -> HydroResult<()> {
        let gas = self.gas()?;
        let domain = self.domain_mut()?;
        let boundary = domain.grid.boundary;
        domain.state.sync_conserved(&gas, &boundary)?;
        self.synced = true;
        self.halted = false;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Stepping
    // -------------------------------------------------------------------------

    /// Largest signal speed max(|vx|, |vy|) + c over all cells, ghosts
    /// included.
    pub fn max_signal_speed(&self) -> HydroResult<f64> {
        let (domain, gas) = self.ready()?;
        Ok(signal_speed(&gas, &domain.state.primitive)?)
    }

    /// Step size the next [`Simulation::timestep`] would take.
    pub fn stable_dt(&self) -> HydroResult<f64> {
        let u_max = self.max_signal_speed()?;
        Ok(cfl_timestep(self.scheme.cfl, self.domain()?.grid.dx, u_max))
    }

    /// Advance by one CFL-limited step and return its size.
    ///
    /// # Errors
    ///
    /// - [`HydroError::Precondition`] if setup is incomplete
    /// - [`HydroError::State`] if a numerical invariant breaks; the
    ///   simulation is then halted
    /// - [`HydroError::Halted`] if a previous step failed
    pub fn timestep(&mut self) -> HydroResult<f64> {
        if self.halted {
            return Err(HydroError::Halted {
                step: self.clock.step,
            });
        }
        let gas = self.ready()?.1;
        let scheme = self.scheme;
        let order = self.clock.sweep_order();
        let last_dt = self.last_dt;
        let step = self.clock.step;
        let domain = self.domain_mut()?;

        match advance_domain(domain, gas, &scheme, order) {
            Ok((dt, u_max)) => {
                let realized_cfl = u_max * last_dt / domain.grid.dx;
                if realized_cfl > CFL_WARN_THRESHOLD {
                    log::warn!(
                        "step {step} ran at effective CFL {realized_cfl:.3} once wave speeds grew"
                    );
                }
                self.clock.advance(dt, order[1]);
                self.last_dt = dt;
                log::debug!(
                    "step {}: t={:.6e} dt={dt:.6e} u_max={u_max:.6e} order=[{}, {}]",
                    self.clock.step,
                    self.clock.time,
                    order[0],
                    order[1]
                );
                Ok(dt)
            }
            Err(err) => {
                self.halted = true;
                log::error!(
                    "step {} at t={:.6e} failed: {err}",
                    step + 1,
                    self.clock.time
                );
                Err(err.into())
            }
        }
    }

    /// Step until `t >= t_end` or `max_steps` steps have been taken.
    ///
    /// Steps are never shortened to land on `t_end`, so the final time
    /// usually overshoots it by less than one step.
    pub fn run_until(&mut self, t_end: f64, max_steps: u64) -> HydroResult<RunSummary> {
        let start = Instant::now();
        let mut summary = RunSummary {
            steps: 0,
            final_time: self.clock.time,
            dt_min: f64::INFINITY,
            dt_max: 0.0,
            reached_end: self.clock.time >= t_end,
            wall_time: 0.0,
        };

        while !summary.reached_end && summary.steps < max_steps {
            let dt = self.timestep()?;
            summary.steps += 1;
            summary.dt_min = summary.dt_min.min(dt);
            summary.dt_max = summary.dt_max.max(dt);
            summary.reached_end = self.clock.time >= t_end;
        }

        summary.final_time = self.clock.time;
        summary.wall_time = start.elapsed().as_secs_f64();

        if summary.reached_end {
            log::info!(
                "reached t={:.6e} after {} steps ({:.3}s)",
                summary.final_time,
                summary.steps,
                summary.wall_time
            );
        } else {
            log::warn!(
                "stopped at step cap {max_steps} with t={:.6e} < t_end={t_end:.6e}",
                summary.final_time
            );
        }
        Ok(summary)
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    /// Edge states the next sweep along `axis` would see for a step `dt`,
    /// as owned copies. Constant reconstruction returns V for both sides.
    pub fn edge_states(&mut self, axis: Axis, dt: f64) -> HydroResult<EdgeStates> {
        let gas = self.ready()?.1;
        let domain = self.domain_mut()?;
        let ctx = SweepContext::new(gas, axis, dt, domain.grid.dx);
        let edges = domain
            .reconstruction
            .reconstruct(&ctx, &domain.state.primitive)?;
        Ok(match edges {
            EdgeSource::Centered(v) => EdgeStates {
                left: v.clone(),
                right: v.clone(),
            },
            EdgeSource::Reconstructed(e) => e.clone(),
        })
    }

    /// Conservation and bounds diagnostics of the current state.
    pub fn diagnostics(&self) -> HydroResult<EulerDiagnostics2D> {
        let (domain, gas) = self.ready()?;
        Ok(EulerDiagnostics2D::compute(
            &gas,
            &domain.state,
            domain.grid.dx,
            self.last_dt,
        ))
    }

    /// Primitive field V, ghosts included.
    pub fn primitive(&self) -> HydroResult<&PrimitiveField> {
        Ok(&self.domain()?.state.primitive)
    }

    /// Conserved field U, ghosts included.
    pub fn conserved(&self) -> HydroResult<&ConservedField> {
        Ok(&self.domain()?.state.conserved)
    }

    /// Grid geometry, once the domain is set.
    pub fn grid(&self) -> Option<&Grid> {
        self.domain.as_ref().map(|d| &d.grid)
    }

    /// Cell-center coordinates `(x, y)`, ghosts included.
    pub fn coordinates(&self) -> HydroResult<(Vec<f64>, Vec<f64>)> {
        let grid = &self.domain()?.grid;
        Ok((grid.cell_centers(Axis::X), grid.cell_centers(Axis::Y)))
    }

    pub fn scheme(&self) -> &HydroScheme {
        &self.scheme
    }

    /// Adiabatic index, once set.
    pub fn gamma(&self) -> Option<f64> {
        self.gas.map(|g| g.gamma)
    }

    /// Simulation time t.
    pub fn time(&self) -> f64 {
        self.clock.time
    }

    /// Completed steps.
    pub fn step(&self) -> u64 {
        self.clock.step
    }

    /// Size of the last completed step (0 before the first).
    pub fn last_dt(&self) -> f64 {
        self.last_dt
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Whether a failed step has halted the simulation.
    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

/// One split step on the domain: size dt from the current state, then
/// sweep each axis in `order`. Returns `(dt, u_max)`.
fn advance_domain(
    domain: &mut Domain,
    gas: Euler2D,
    scheme: &HydroScheme,
    order: [Axis; 2],
) -> Result<(f64, f64), StateError> {
    let dx = domain.grid.dx;
    let u_max = signal_speed(&gas, &domain.state.primitive)?;
    let dt = cfl_timestep(scheme.cfl, dx, u_max);

    for axis in order {
        let ctx = SweepContext::new(gas, axis, dt, dx);
        time::sweep(
            &mut domain.state,
            &mut domain.reconstruction,
            scheme.riemann,
            domain.grid.boundary,
            &mut domain.fluxes,
            &ctx,
        )?;
    }
    Ok((dt, u_max))
}

#[cfg(not(feature = "parallel"))]
fn signal_speed(gas: &Euler2D, v: &PrimitiveField) -> Result<f64, StateError> {
    crate::time::max_signal_speed(gas, v)
}

#[cfg(feature = "parallel")]
fn signal_speed(gas: &Euler2D, v: &PrimitiveField) -> Result<f64, StateError> {
    crate::time::max_signal_speed_parallel(gas, v)
}
