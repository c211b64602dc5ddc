//! Numerical scheme configuration.
//!
//! A [`HydroScheme`] is chosen once before setup and stays fixed for the
//! lifetime of a simulation. Each strategy is a small enum so the hot loops
//! dispatch with a `match` instead of a vtable.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::flux::{RiemannKind, RiemannSolver};
use crate::solver::limiters::{LimiterKind, SlopeLimiter};

/// Spatial reconstruction of interface states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReconstructionKind {
    /// Piecewise constant (first order), one ghost layer
    Constant,
    /// Piecewise linear with limited slopes (second order), two ghost layers
    #[default]
    Linear,
}

impl ReconstructionKind {
    pub const NAMES: &'static str = "const, linear";

    /// Ghost layers the stencil needs.
    pub fn ghost_cells(self) -> usize {
        match self {
            ReconstructionKind::Constant => 1,
            ReconstructionKind::Linear => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ReconstructionKind::Constant => "const",
            ReconstructionKind::Linear => "linear",
        }
    }
}

impl FromStr for ReconstructionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "const" | "constant" => Ok(Self::Constant),
            "linear" => Ok(Self::Linear),
            _ => Err(ConfigError::UnknownKind {
                what: "reconstruction",
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for ReconstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Time extrapolation applied to reconstructed edge states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeIntegrationKind {
    /// No extrapolation: edges are taken at the old time level
    Euler,
    /// Half-step predictor on primitive variables
    #[default]
    Hancock,
    /// Half-step predictor using the conservative flux difference
    HancockCons,
}

impl TimeIntegrationKind {
    pub const NAMES: &'static str = "euler, hancock, hancock_cons";

    pub fn name(self) -> &'static str {
        match self {
            TimeIntegrationKind::Euler => "euler",
            TimeIntegrationKind::Hancock => "hancock",
            TimeIntegrationKind::HancockCons => "hancock_cons",
        }
    }

    /// Whether edges are advanced by half a step before the Riemann solve.
    pub fn is_predictor(self) -> bool {
        !matches!(self, TimeIntegrationKind::Euler)
    }
}

impl FromStr for TimeIntegrationKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Self::Euler),
            "hancock" => Ok(Self::Hancock),
            "hancock_cons" => Ok(Self::HancockCons),
            _ => Err(ConfigError::UnknownKind {
                what: "time integration",
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for TimeIntegrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration of the finite-volume scheme.
///
/// # Example
///
/// ```
/// use fv_euler::solver::limiters::LimiterKind;
/// use fv_euler::time::{HydroScheme, TimeIntegrationKind};
///
/// let scheme = HydroScheme::new(0.5)
///     .with_limiter(LimiterKind::VanLeer)
///     .with_time_integration(TimeIntegrationKind::HancockCons);
/// assert!(scheme.validate().is_ok());
/// assert_eq!(scheme.ghost_cells(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HydroScheme {
    /// Interface state reconstruction
    pub reconstruction: ReconstructionKind,
    /// Slope limiter (ignored by constant reconstruction)
    pub limiter: LimiterKind,
    /// Riemann solver
    pub riemann: RiemannKind,
    /// Edge-state time extrapolation
    pub time_integration: TimeIntegrationKind,
    /// CFL number in (0, 1]
    pub cfl: f64,
}

impl HydroScheme {
    /// Second-order MUSCL-Hancock scheme (linear, minmod, HLL, hancock)
    /// with the given CFL number.
    pub fn new(cfl: f64) -> Self {
        Self {
            reconstruction: ReconstructionKind::Linear,
            limiter: LimiterKind::Minmod,
            riemann: RiemannKind::Hll,
            time_integration: TimeIntegrationKind::Hancock,
            cfl,
        }
    }

    /// First-order Godunov scheme (constant reconstruction, no predictor).
    pub fn first_order(cfl: f64) -> Self {
        Self::new(cfl)
            .with_reconstruction(ReconstructionKind::Constant)
            .with_time_integration(TimeIntegrationKind::Euler)
    }

    /// Build a scheme from kind names, as a driver reading a parameter
    /// file would.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownKind`] for any unrecognized name, or whatever
    /// [`HydroScheme::validate`] rejects.
    pub fn from_names(
        reconstruction: &str,
        limiter: &str,
        riemann: &str,
        time_integration: &str,
        cfl: f64,
    ) -> Result<Self, ConfigError> {
        let scheme = Self {
            reconstruction: reconstruction.parse()?,
            limiter: limiter.parse()?,
            riemann: riemann.parse()?,
            time_integration: time_integration.parse()?,
            cfl,
        };
        scheme.validate()?;
        Ok(scheme)
    }

    pub fn with_reconstruction(mut self, reconstruction: ReconstructionKind) -> Self {
        self.reconstruction = reconstruction;
        self
    }

    pub fn with_limiter(mut self, limiter: LimiterKind) -> Self {
        self.limiter = limiter;
        self
    }

    pub fn with_riemann(mut self, riemann: RiemannKind) -> Self {
        self.riemann = riemann;
        self
    }

    pub fn with_time_integration(mut self, time_integration: TimeIntegrationKind) -> Self {
        self.time_integration = time_integration;
        self
    }

    pub fn with_cfl(mut self, cfl: f64) -> Self {
        self.cfl = cfl;
        self
    }

    /// Check the combination is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cfl > 0.0 && self.cfl <= 1.0) {
            return Err(ConfigError::InvalidCfl(self.cfl));
        }
        if self.reconstruction == ReconstructionKind::Constant
            && self.time_integration.is_predictor()
        {
            return Err(ConfigError::IncompatibleScheme {
                time_integration: self.time_integration.name(),
            });
        }
        Ok(())
    }

    /// Ghost layers needed on each side.
    pub fn ghost_cells(&self) -> usize {
        self.reconstruction.ghost_cells()
    }
}

impl Default for HydroScheme {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl fmt::Display for HydroScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reconstruction={} limiter={} riemann={} time_integration={} cfl={}",
            self.reconstruction,
            self.limiter.name(),
            self.riemann.name(),
            self.time_integration,
            self.cfl
        )
    }
}
