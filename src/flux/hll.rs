//! HLL (Harten-Lax-van Leer) approximate Riemann solver for the Euler
//! equations.
//!
//! Two-wave approximation bounded by the fastest left- and right-going
//! signals:
//!
//! F* = (S_R F_L - S_L F_R + S_L S_R (U_R - U_L)) / (S_R - S_L)
//!
//! with the simple Davis estimates S_L = u_L - c_L and S_R = u_R + c_R,
//! where u is the velocity normal to the interface.
//!
//! Supersonic interfaces short-circuit to the upwind physical flux.
//! Contact discontinuities are smeared (HLL has no middle wave).
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid Dynamics"

use crate::equations::Euler2D;
use crate::error::StateError;
use crate::solver::state::{Conserved, Primitive};
use crate::types::Axis;

/// Left/right wave speed estimates (S_L, S_R).
#[inline]
pub fn hll_wave_speeds(
    gas: &Euler2D,
    axis: Axis,
    v_l: &Primitive,
    v_r: &Primitive,
) -> Result<(f64, f64), StateError> {
    let s_l = v_l.normal_velocity(axis) - gas.sound_speed(v_l)?;
    let s_r = v_r.normal_velocity(axis) + gas.sound_speed(v_r)?;
    Ok((s_l, s_r))
}

/// HLL interface flux along `axis` between primitive states `v_l` and `v_r`.
///
/// # Errors
///
/// [`StateError::NonFiniteSoundSpeed`] if either side is unphysical.
///
/// # Example
///
/// ```
/// use fv_euler::equations::Euler2D;
/// use fv_euler::flux::hll_flux;
/// use fv_euler::solver::Primitive;
/// use fv_euler::types::Axis;
///
/// let gas = Euler2D::new(1.4).unwrap();
/// let v = Primitive::new(1.0, 0.2, -0.1, 1.0);
/// let f = hll_flux(&gas, Axis::X, &v, &v).unwrap();
/// let exact = gas.flux(Axis::X, &v);
/// assert!((f.rho - exact.rho).abs() < 1e-14);
/// ```
#[inline]
pub fn hll_flux(
    gas: &Euler2D,
    axis: Axis,
    v_l: &Primitive,
    v_r: &Primitive,
) -> Result<Conserved, StateError> {
    let (s_l, s_r) = hll_wave_speeds(gas, axis, v_l, v_r)?;

    if s_l >= 0.0 {
        // All waves go right
        return Ok(gas.flux(axis, v_l));
    }
    if s_r <= 0.0 {
        // All waves go left
        return Ok(gas.flux(axis, v_r));
    }

    // s_l < 0 < s_r here, so the denominator is strictly positive
    let f_l = gas.flux(axis, v_l);
    let f_r = gas.flux(axis, v_r);
    let u_l = gas.to_conserved(v_l);
    let u_r = gas.to_conserved(v_r);

    Ok((s_r * f_l - s_l * f_r + (s_l * s_r) * (u_r - u_l)) * (1.0 / (s_r - s_l)))
}
