//! 2D compressible Euler equations for an ideal gas.
//!
//! ∂ρ/∂t  + ∂(ρu)/∂x        + ∂(ρv)/∂y        = 0
//! ∂ρu/∂t + ∂(ρu² + P)/∂x   + ∂(ρuv)/∂y       = 0
//! ∂ρv/∂t + ∂(ρuv)/∂x       + ∂(ρv² + P)/∂y   = 0
//! ∂E/∂t  + ∂((E + P)u)/∂x  + ∂((E + P)v)/∂y  = 0
//!
//! closed by the ideal-gas law E = ½ρ|v|² + P/(γ-1).
//!
//! # Flux formulation
//!
//! For a sweep along axis `a` with transverse axis `b`:
//!
//! F(V) = [ρu_a, ρu_a² + P, ρu_a u_b, (E + P)u_a]ᵀ
//!
//! The y-flux is evaluated as the x-flux of the velocity-swapped state,
//! then swapped back, so both axes share one code path.

use crate::error::{ConfigError, StateError};
use crate::solver::{Conserved, Primitive};
use crate::types::Axis;

/// Ideal-gas Euler equations with adiabatic index γ.
///
/// # Example
///
/// ```
/// use fv_euler::equations::Euler2D;
/// use fv_euler::solver::Primitive;
/// use fv_euler::types::Axis;
///
/// let gas = Euler2D::new(1.4).unwrap();
/// let v = Primitive::new(1.0, 0.5, 0.0, 1.0);
///
/// let u = gas.to_conserved(&v);
/// assert!((u.e - (0.125 + 2.5)).abs() < 1e-14);
///
/// let f = gas.flux(Axis::X, &v);
/// assert!((f.rho - 0.5).abs() < 1e-14);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Euler2D {
    /// Adiabatic index γ = c_p / c_v
    pub gamma: f64,
}

impl Euler2D {
    /// Create the equations for a gas with adiabatic index `gamma`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidGamma`] unless `gamma` is finite and `> 1`.
    pub fn new(gamma: f64) -> Result<Self, ConfigError> {
        if !(gamma.is_finite() && gamma > 1.0) {
            return Err(ConfigError::InvalidGamma(gamma));
        }
        Ok(Self { gamma })
    }

    /// Diatomic gas (γ = 1.4).
    pub fn diatomic() -> Self {
        Self { gamma: 1.4 }
    }

    /// Total energy density E = ½ρ|v|² + P/(γ-1).
    #[inline(always)]
    pub fn total_energy(&self, v: &Primitive) -> f64 {
        v.kinetic_energy() + v.p / (self.gamma - 1.0)
    }

    /// Primitive → conserved.
    #[inline(always)]
    pub fn to_conserved(&self, v: &Primitive) -> Conserved {
        Conserved::new(v.rho, v.rho * v.vx, v.rho * v.vy, self.total_energy(v))
    }

    /// Conserved → primitive, without checking the result.
    ///
    /// P = (γ-1)(E - ½ρ|v|²) can come out non-positive; callers that feed
    /// the result back into the scheme must check [`Primitive::is_physical`].
    #[inline(always)]
    pub fn to_primitive(&self, u: &Conserved) -> Primitive {
        let rho = u.rho;
        let vx = u.mx / rho;
        let vy = u.my / rho;
        let p = (self.gamma - 1.0) * (u.e - 0.5 * rho * (vx * vx + vy * vy));
        Primitive::new(rho, vx, vy, p)
    }

    /// Physical flux vector along `axis`.
    #[inline(always)]
    pub fn flux(&self, axis: Axis, v: &Primitive) -> Conserved {
        self.flux_x(&v.aligned(axis)).aligned(axis)
    }

    #[inline(always)]
    fn flux_x(&self, v: &Primitive) -> Conserved {
        let e = self.total_energy(v);
        let mass = v.rho * v.vx;
        Conserved::new(mass, mass * v.vx + v.p, mass * v.vy, (e + v.p) * v.vx)
    }

    /// Sound speed c = sqrt(γP/ρ).
    ///
    /// # Errors
    ///
    /// [`StateError::NonFiniteSoundSpeed`] when the result is NaN, which
    /// means a non-positive density or negative pressure got through.
    #[inline]
    pub fn sound_speed(&self, v: &Primitive) -> Result<f64, StateError> {
        let cs = (self.gamma * v.p / v.rho).sqrt();
        if cs.is_nan() {
            return Err(StateError::NonFiniteSoundSpeed { rho: v.rho, p: v.p });
        }
        Ok(cs)
    }

    /// Fastest signal speed max(|vx|, |vy|) + c used by the CFL condition.
    #[inline]
    pub fn signal_speed(&self, v: &Primitive) -> Result<f64, StateError> {
        Ok(v.vx.abs().max(v.vy.abs()) + self.sound_speed(v)?)
    }

    /// Time derivative of the primitive state from its spatial derivative
    /// along `axis` (the quasi-linear form ∂V/∂t = -A(V) ∂V/∂x_a).
    ///
    /// - ∂ρ/∂t   = -(u_a ∂ρ + ρ ∂u_a)
    /// - ∂u_a/∂t = -(u_a ∂u_a + ∂P/ρ)
    /// - ∂u_b/∂t = -(u_a ∂u_b)
    /// - ∂P/∂t   = -(u_a ∂P + γP ∂u_a)
    #[inline]
    pub fn primitive_time_derivative(
        &self,
        axis: Axis,
        v: &Primitive,
        dv: &Primitive,
    ) -> Primitive {
        let w = v.aligned(axis);
        let dw = dv.aligned(axis);
        let ua = w.vx;

        Primitive::new(
            -(ua * dw.rho + dw.vx * w.rho),
            -(ua * dw.vx + dw.p / w.rho),
            -(ua * dw.vy),
            -(ua * dw.p + dw.vx * w.p * self.gamma),
        )
        .aligned(axis)
    }
}

impl Default for Euler2D {
    fn default() -> Self {
        Self::diatomic()
    }
}
