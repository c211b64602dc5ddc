//! Standard slope limiters and the dispatch enum.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

use super::slope::{central, minmod, monotonized_central, van_leer};
use super::traits::{BoxedSlopeLimiter, SlopeLimiter};

/// Unlimited central slope.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLimiter;

impl SlopeLimiter for NoLimiter {
    #[inline]
    fn limit(&self, sl: f64, sr: f64) -> f64 {
        central(sl, sr)
    }

    fn name(&self) -> &'static str {
        "none"
    }

    fn is_limiting(&self) -> bool {
        false
    }
}

/// Minmod limiter. Most diffusive of the set.
#[derive(Clone, Copy, Debug, Default)]
pub struct Minmod;

impl SlopeLimiter for Minmod {
    #[inline]
    fn limit(&self, sl: f64, sr: f64) -> f64 {
        minmod(sl, sr)
    }

    fn name(&self) -> &'static str {
        "minmod"
    }
}

/// Van Leer harmonic-mean limiter.
#[derive(Clone, Copy, Debug, Default)]
pub struct VanLeer;

impl SlopeLimiter for VanLeer {
    #[inline]
    fn limit(&self, sl: f64, sr: f64) -> f64 {
        van_leer(sl, sr)
    }

    fn name(&self) -> &'static str {
        "vanleer"
    }
}

/// Monotonized central limiter.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonizedCentral;

impl SlopeLimiter for MonotonizedCentral {
    #[inline]
    fn limit(&self, sl: f64, sr: f64) -> f64 {
        monotonized_central(sl, sr)
    }

    fn name(&self) -> &'static str {
        "mc"
    }
}

/// Standard limiter types for zero-cost dispatch.
///
/// Use this enum in the scheme configuration; the match inside
/// [`SlopeLimiter::limit`] is resolved once per call with no vtable.
/// For runtime composition use [`create_limiter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LimiterKind {
    /// Central difference, no limiting
    None,
    /// Minmod
    #[default]
    Minmod,
    /// Van Leer
    VanLeer,
    /// Monotonized central
    MonotonizedCentral,
}

impl LimiterKind {
    pub const NAMES: &'static str = "none, minmod, vanleer, mc";

    pub const ALL: [LimiterKind; 4] = [
        LimiterKind::None,
        LimiterKind::Minmod,
        LimiterKind::VanLeer,
        LimiterKind::MonotonizedCentral,
    ];
}

impl SlopeLimiter for LimiterKind {
    #[inline]
    fn limit(&self, sl: f64, sr: f64) -> f64 {
        match self {
            LimiterKind::None => NoLimiter.limit(sl, sr),
            LimiterKind::Minmod => Minmod.limit(sl, sr),
            LimiterKind::VanLeer => VanLeer.limit(sl, sr),
            LimiterKind::MonotonizedCentral => MonotonizedCentral.limit(sl, sr),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            LimiterKind::None => NoLimiter.name(),
            LimiterKind::Minmod => Minmod.name(),
            LimiterKind::VanLeer => VanLeer.name(),
            LimiterKind::MonotonizedCentral => MonotonizedCentral.name(),
        }
    }

    fn is_limiting(&self) -> bool {
        !matches!(self, LimiterKind::None)
    }
}

impl FromStr for LimiterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "minmod" => Ok(Self::Minmod),
            "vanleer" | "van_leer" => Ok(Self::VanLeer),
            "mc" => Ok(Self::MonotonizedCentral),
            _ => Err(ConfigError::UnknownKind {
                what: "limiter",
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}

impl fmt::Display for LimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Create a boxed limiter from a standard limiter type.
pub fn create_limiter(kind: LimiterKind) -> BoxedSlopeLimiter {
    match kind {
        LimiterKind::None => Box::new(NoLimiter),
        LimiterKind::Minmod => Box::new(Minmod),
        LimiterKind::VanLeer => Box::new(VanLeer),
        LimiterKind::MonotonizedCentral => Box::new(MonotonizedCentral),
    }
}
