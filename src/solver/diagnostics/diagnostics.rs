//! Runtime diagnostics for 2D Euler simulations.
//!
//! Provides functions and types for computing and tracking:
//! - Conservation quantities (mass, momentum, energy)
//! - CFL number of the last step
//! - Solution bounds (density, pressure, signal speed)
//!
//! # Example
//!
//! ```ignore
//! use fv_euler::solver::{EulerDiagnostics2D, DiagnosticsTracker};
//!
//! let diag = sim.diagnostics()?;
//! log::info!("{}", diag.summary_line());
//!
//! let mut tracker = DiagnosticsTracker::new(diag);
//! // ... simulation loop ...
//! tracker.update(sim.time(), sim.diagnostics()?);
//! assert!(tracker.mass_error() < 1e-12);
//! ```

use crate::equations::Euler2D;
use crate::solver::state::{Conserved, ConservedField, FieldExtremes, FluidState};

/// Diagnostic quantities for the 2D Euler equations.
///
/// Integrals are over the physical cells only and include the cell area.
#[derive(Clone, Debug, PartialEq)]
pub struct EulerDiagnostics2D {
    /// Total mass (integral of ρ)
    pub total_mass: f64,
    /// Total x-momentum (integral of ρvx)
    pub momentum_x: f64,
    /// Total y-momentum (integral of ρvy)
    pub momentum_y: f64,
    /// Total energy (integral of E)
    pub total_energy: f64,
    /// Density bounds
    pub min_density: f64,
    pub max_density: f64,
    /// Pressure bounds
    pub min_pressure: f64,
    pub max_pressure: f64,
    /// Largest max(|vx|, |vy|) + c over the physical cells
    pub max_signal_speed: f64,
    /// max_signal_speed * dt / dx for the supplied dt
    pub cfl_number: f64,
}

impl EulerDiagnostics2D {
    /// Compute all diagnostics from the current state.
    ///
    /// # Arguments
    /// * `gas` - Equation of state
    /// * `state` - Current fluid state
    /// * `dx` - Cell size
    /// * `dt` - Step size the CFL number refers to (0 before the first step)
    pub fn compute(gas: &Euler2D, state: &FluidState, dx: f64, dt: f64) -> Self {
        let totals = integrate(&state.conserved, dx);

        let mut rho = FieldExtremes::new();
        let mut p = FieldExtremes::new();
        let mut max_signal_speed: f64 = 0.0;

        for (cell, v) in state.primitive.physical_cells() {
            rho.update(v.rho, cell);
            p.update(v.p, cell);
            // NaN must survive the max so that is_stable sees it
            let speed = if v.vx.is_nan() || v.vy.is_nan() {
                f64::NAN
            } else {
                v.vx.abs().max(v.vy.abs()) + (gas.gamma * v.p / v.rho).sqrt()
            };
            if speed.is_nan() || speed > max_signal_speed {
                max_signal_speed = speed;
            }
            if max_signal_speed.is_nan() {
                break;
            }
        }

        Self {
            total_mass: totals.rho,
            momentum_x: totals.mx,
            momentum_y: totals.my,
            total_energy: totals.e,
            min_density: rho.min,
            max_density: rho.max,
            min_pressure: p.min,
            max_pressure: p.max,
            max_signal_speed,
            cfl_number: max_signal_speed * dt / dx,
        }
    }

    /// Format diagnostics as a single-line summary.
    pub fn summary_line(&self) -> String {
        format!(
            "M={:.6e} E={:.6e} rho=[{:.4e},{:.4e}] P=[{:.4e},{:.4e}] s_max={:.4} CFL={:.3}",
            self.total_mass,
            self.total_energy,
            self.min_density,
            self.max_density,
            self.min_pressure,
            self.max_pressure,
            self.max_signal_speed,
            self.cfl_number
        )
    }

    /// Format diagnostics as detailed multi-line output.
    pub fn detailed(&self) -> String {
        format!(
            "Conservation:\n  Mass:      {:.6e}\n  Momentum:  ({:.6e}, {:.6e})\n  Energy:    {:.6e}\n\
             Bounds:\n  Density:   [{:.6e}, {:.6e}]\n  Pressure:  [{:.6e}, {:.6e}]\n\
             Stability:\n  s_max:     {:.4}\n  CFL:       {:.4}",
            self.total_mass,
            self.momentum_x,
            self.momentum_y,
            self.total_energy,
            self.min_density,
            self.max_density,
            self.min_pressure,
            self.max_pressure,
            self.max_signal_speed,
            self.cfl_number
        )
    }
}

/// Track diagnostics over time for monitoring conservation and stability.
#[derive(Clone, Debug)]
pub struct DiagnosticsTracker {
    initial: EulerDiagnostics2D,
    current: EulerDiagnostics2D,
    current_time: f64,
    n_updates: usize,
    max_cfl_seen: f64,
    min_pressure_seen: f64,
}

impl DiagnosticsTracker {
    pub fn new(initial: EulerDiagnostics2D) -> Self {
        Self {
            max_cfl_seen: initial.cfl_number,
            min_pressure_seen: initial.min_pressure,
            current: initial.clone(),
            initial,
            current_time: 0.0,
            n_updates: 0,
        }
    }

    pub fn update(&mut self, time: f64, diag: EulerDiagnostics2D) {
        self.current_time = time;
        self.n_updates += 1;
        self.max_cfl_seen = self.max_cfl_seen.max(diag.cfl_number);
        self.min_pressure_seen = self.min_pressure_seen.min(diag.min_pressure);
        self.current = diag;
    }

    /// Relative mass conservation error.
    pub fn mass_error(&self) -> f64 {
        relative_change(self.initial.total_mass, self.current.total_mass).abs()
    }

    /// Absolute change of the momentum vector, relative to its initial
    /// magnitude when that is nonzero.
    pub fn momentum_error(&self) -> f64 {
        let dx = self.current.momentum_x - self.initial.momentum_x;
        let dy = self.current.momentum_y - self.initial.momentum_y;
        let change = dx.hypot(dy);
        let initial = self.initial.momentum_x.hypot(self.initial.momentum_y);
        if initial > 1e-14 { change / initial } else { change }
    }

    /// Signed relative energy change.
    pub fn energy_change(&self) -> f64 {
        relative_change(self.initial.total_energy, self.current.total_energy)
    }

    pub fn current(&self) -> &EulerDiagnostics2D {
        &self.current
    }

    pub fn initial(&self) -> &EulerDiagnostics2D {
        &self.initial
    }

    pub fn updates(&self) -> usize {
        self.n_updates
    }

    pub fn max_cfl_seen(&self) -> f64 {
        self.max_cfl_seen
    }

    /// Check the latest diagnostics for blow-up indicators.
    pub fn is_stable(&self) -> bool {
        let diag = &self.current;
        if !diag.total_mass.is_finite()
            || !diag.total_energy.is_finite()
            || !diag.max_signal_speed.is_finite()
        {
            return false;
        }
        diag.min_density > 0.0 && diag.min_pressure > 0.0 && diag.cfl_number <= 1.0
    }

    pub fn summary(&self) -> String {
        format!(
            "t={:.6e} updates={} mass_err={:.3e} mom_err={:.3e} dE={:+.3e} max_cfl={:.3} min_P={:.4e}",
            self.current_time,
            self.n_updates,
            self.mass_error(),
            self.momentum_error(),
            self.energy_change(),
            self.max_cfl_seen,
            self.min_pressure_seen
        )
    }
}

fn relative_change(initial: f64, current: f64) -> f64 {
    if initial.abs() > 1e-14 {
        (current - initial) / initial.abs()
    } else {
        current - initial
    }
}

/// Sum of U over the physical cells times the cell area.
fn integrate(u: &ConservedField, dx: f64) -> Conserved {
    u.physical_cells()
        .fold(Conserved::zero(), |acc, (_, cell)| acc + cell)
        * (dx * dx)
}

/// Total mass Σρ dx² over the physical cells.
pub fn total_mass(u: &ConservedField, dx: f64) -> f64 {
    integrate(u, dx).rho
}

/// Total momentum (Σρvx dx², Σρvy dx²) over the physical cells.
pub fn total_momentum(u: &ConservedField, dx: f64) -> (f64, f64) {
    let t = integrate(u, dx);
    (t.mx, t.my)
}

/// Total energy ΣE dx² over the physical cells.
pub fn total_energy(u: &ConservedField, dx: f64) -> f64 {
    integrate(u, dx).e
}
