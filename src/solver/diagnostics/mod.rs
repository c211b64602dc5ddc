//! Runtime diagnostics.
//!
//! - [`EulerDiagnostics2D`]: Conservation and bounds diagnostics
//! - [`DiagnosticsTracker`]: Time series tracking

mod diagnostics;

pub use diagnostics::{
    DiagnosticsTracker, EulerDiagnostics2D, total_energy, total_mass, total_momentum,
};
