//! Error types for setup and time stepping.
//!
//! Two failure classes exist and neither is recoverable from inside the
//! solver:
//! - [`ConfigError`]: rejected at setup, before any step is taken.
//! - [`StateError`]: a numerical invariant (positive density and pressure,
//!   finite wave speeds) was violated during a step.
//!
//! [`HydroError`] wraps both and adds the precondition failures of the
//! setup sequence.

use thiserror::Error;

/// Invalid configuration detected while setting up a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A strategy or policy name did not match any known kind.
    #[error("unknown {what} kind '{name}' (expected one of: {expected})")]
    UnknownKind {
        what: &'static str,
        name: String,
        expected: &'static str,
    },

    /// Grid with zero cells along an axis.
    #[error("grid needs at least one cell per axis, got {nx}x{ny}")]
    EmptyGrid { nx: usize, ny: usize },

    /// Cell size derived from the domain bounds is not positive.
    #[error("cell size must be positive and finite, got dx={0}")]
    InvalidCellSize(f64),

    /// Domain origin is not a finite number.
    #[error("domain bounds must be finite, got x=[{x_min}, {x_max}], y_min={y_min}")]
    InvalidBounds { x_min: f64, x_max: f64, y_min: f64 },

    /// Ghost layer too thin for the reconstruction stencil.
    #[error("at least one ghost cell is required, got {0}")]
    InvalidGhostCells(usize),

    /// CFL number outside (0, 1].
    #[error("CFL number must lie in (0, 1], got {0}")]
    InvalidCfl(f64),

    /// Adiabatic index that does not describe a gas.
    #[error("adiabatic index must be finite and greater than 1, got {0}")]
    InvalidGamma(f64),

    /// Time extrapolation requested without slopes to extrapolate.
    #[error("'{time_integration}' time integration requires linear reconstruction")]
    IncompatibleScheme { time_integration: &'static str },
}

/// Fatal violation of a numerical invariant during a step.
///
/// Payloads carry the extremes of the offending field and the cell
/// `(i, j)` (array indices, ghosts included) where the minimum sits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    #[error(
        "non-positive pressure after conversion: min={min:.6e} at cell {cell:?}, max={max:.6e}"
    )]
    NonPositivePressure {
        min: f64,
        max: f64,
        cell: (usize, usize),
    },

    #[error("non-positive density: min={min:.6e} at cell {cell:?}, max={max:.6e}")]
    NonPositiveDensity {
        min: f64,
        max: f64,
        cell: (usize, usize),
    },

    /// sqrt(gamma P / rho) produced NaN.
    #[error("sound speed is NaN (rho={rho:.6e}, p={p:.6e})")]
    NonFiniteSoundSpeed { rho: f64, p: f64 },

    /// The global maximum signal speed is NaN, infinite or zero.
    #[error("maximum signal speed in domain is not usable: {0}")]
    InvalidSignalSpeed(f64),
}

/// Top-level error returned by the simulation API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HydroError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("numerical state error: {0}")]
    State(#[from] StateError),

    /// A setup call is missing or was made out of order.
    #[error("precondition violated: {0}")]
    Precondition(&'static str),

    /// A previous step failed; the state is no longer trustworthy.
    #[error("simulation halted by a fatal error at step {step}")]
    Halted { step: u64 },
}

/// Result alias used throughout the crate.
pub type HydroResult<T> = Result<T, HydroError>;
