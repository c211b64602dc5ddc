//! 2D Euler state types.
//!
//! Two representations of the same gas state:
//! - [`Primitive`]: (ρ, vx, vy, P), what limiters and the Hancock
//!   predictor operate on
//! - [`Conserved`]: (ρ, ρvx, ρvy, E), what the finite-volume update
//!   integrates
//!
//! Converting between them needs the adiabatic index, so the conversions
//! live on [`crate::equations::Euler2D`].

use std::ops::{Add, AddAssign, Mul, Sub};

use crate::types::Axis;

/// Primitive gas state: density, velocity, pressure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Primitive {
    /// Mass density ρ (must stay positive)
    pub rho: f64,
    /// x-velocity
    pub vx: f64,
    /// y-velocity
    pub vy: f64,
    /// Thermal pressure P (must stay positive)
    pub p: f64,
}

impl Primitive {
    #[inline(always)]
    pub fn new(rho: f64, vx: f64, vy: f64, p: f64) -> Self {
        Self { rho, vx, vy, p }
    }

    /// Gas at rest.
    #[inline(always)]
    pub fn at_rest(rho: f64, p: f64) -> Self {
        Self::new(rho, 0.0, 0.0, p)
    }

    /// All components zero. Not a physical state; used for slopes.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Velocity component along `axis`.
    #[inline(always)]
    pub fn normal_velocity(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.vx,
            Axis::Y => self.vy,
        }
    }

    /// Reorder velocities so that `vx` holds the component along `axis`.
    ///
    /// The map is an involution: applying it twice restores the input.
    #[inline(always)]
    pub fn aligned(self, axis: Axis) -> Self {
        match axis {
            Axis::X => self,
            Axis::Y => Self::new(self.rho, self.vy, self.vx, self.p),
        }
    }

    /// Kinetic energy density ½ρ|v|².
    #[inline(always)]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.rho * (self.vx * self.vx + self.vy * self.vy)
    }

    /// Whether density and pressure are strictly positive.
    #[inline]
    pub fn is_physical(&self) -> bool {
        self.rho > 0.0 && self.p > 0.0
    }

    #[inline(always)]
    pub fn to_array(&self) -> [f64; 4] {
        [self.rho, self.vx, self.vy, self.p]
    }

    #[inline(always)]
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Combine two states component by component.
    #[inline(always)]
    pub fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.rho, other.rho),
            f(self.vx, other.vx),
            f(self.vy, other.vy),
            f(self.p, other.p),
        )
    }
}

/// Conserved gas state: density, momentum, total energy density.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Conserved {
    /// Mass density ρ
    pub rho: f64,
    /// x-momentum ρvx
    pub mx: f64,
    /// y-momentum ρvy
    pub my: f64,
    /// Total energy density E = ½ρ|v|² + P/(γ-1)
    pub e: f64,
}

impl Conserved {
    #[inline(always)]
    pub fn new(rho: f64, mx: f64, my: f64, e: f64) -> Self {
        Self { rho, mx, my, e }
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Reorder momenta so that `mx` holds the component along `axis`.
    #[inline(always)]
    pub fn aligned(self, axis: Axis) -> Self {
        match axis {
            Axis::X => self,
            Axis::Y => Self::new(self.rho, self.my, self.mx, self.e),
        }
    }

    /// Kinetic energy density |m|²/(2ρ).
    #[inline(always)]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * (self.mx * self.mx + self.my * self.my) / self.rho
    }

    #[inline(always)]
    pub fn to_array(&self) -> [f64; 4] {
        [self.rho, self.mx, self.my, self.e]
    }

    #[inline(always)]
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> f64 {
        self.to_array().iter().fold(0.0, |m, v| m.max(v.abs()))
    }
}

macro_rules! impl_state_arithmetic {
    ($ty:ident { $($f:ident),+ }) => {
        impl Add for $ty {
            type Output = Self;

            #[inline(always)]
            fn add(self, other: Self) -> Self {
                Self { $($f: self.$f + other.$f),+ }
            }
        }

        impl AddAssign for $ty {
            #[inline(always)]
            fn add_assign(&mut self, other: Self) {
                $(self.$f += other.$f;)+
            }
        }

        impl Sub for $ty {
            type Output = Self;

            #[inline(always)]
            fn sub(self, other: Self) -> Self {
                Self { $($f: self.$f - other.$f),+ }
            }
        }

        impl Mul<f64> for $ty {
            type Output = Self;

            #[inline(always)]
            fn mul(self, scalar: f64) -> Self {
                Self { $($f: self.$f * scalar),+ }
            }
        }

        impl Mul<$ty> for f64 {
            type Output = $ty;

            #[inline(always)]
            fn mul(self, state: $ty) -> $ty {
                $ty { $($f: self * state.$f),+ }
            }
        }
    };
}

impl_state_arithmetic!(Primitive { rho, vx, vy, p });
impl_state_arithmetic!(Conserved { rho, mx, my, e });
