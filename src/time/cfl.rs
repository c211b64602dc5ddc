//! CFL-limited step size.
//!
//! dt = cfl * dx / u_max, where u_max = max(|vx|, |vy|) + c over every
//! cell, ghosts included.

use crate::equations::Euler2D;
use crate::error::StateError;
use crate::solver::state::{Primitive, PrimitiveField};

#[inline]
fn checked_signal_speed(gas: &Euler2D, v: &Primitive) -> Result<f64, StateError> {
    let s = gas.signal_speed(v)?;
    // f64::max drops NaN operands, so test the velocities separately
    let probe = s + v.vx.abs() + v.vy.abs();
    if !probe.is_finite() {
        return Err(StateError::InvalidSignalSpeed(probe));
    }
    Ok(s)
}

fn usable(u_max: f64) -> Result<f64, StateError> {
    if u_max > 0.0 && u_max.is_finite() {
        Ok(u_max)
    } else {
        Err(StateError::InvalidSignalSpeed(u_max))
    }
}

/// Largest signal speed max(|vx|, |vy|) + c over the whole field.
///
/// # Errors
///
/// [`StateError::NonFiniteSoundSpeed`] if any cell yields a NaN sound
/// speed, [`StateError::InvalidSignalSpeed`] if any speed is not finite or
/// the maximum is not positive.
pub fn max_signal_speed(gas: &Euler2D, v: &PrimitiveField) -> Result<f64, StateError> {
    let mut u_max: f64 = 0.0;
    for cell in &v.data {
        u_max = u_max.max(checked_signal_speed(gas, cell)?);
    }
    usable(u_max)
}

/// Parallel version of [`max_signal_speed`] using Rayon.
#[cfg(feature = "parallel")]
pub fn max_signal_speed_parallel(gas: &Euler2D, v: &PrimitiveField) -> Result<f64, StateError> {
    use rayon::prelude::*;

    let u_max = v
        .data
        .par_iter()
        .map(|cell| checked_signal_speed(gas, cell))
        .try_reduce(|| 0.0, |a, b| Ok(a.max(b)))?;
    usable(u_max)
}

/// Stable step size for a given maximum signal speed.
#[inline]
pub fn cfl_timestep(cfl: f64, dx: f64, u_max: f64) -> f64 {
    cfl * dx / u_max
}
