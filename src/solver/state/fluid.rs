//! Whole-grid gas state and field-level conversions.

use std::ops::Range;

use crate::boundary::{BoundaryCondition, enforce_boundaries};
use crate::equations::Euler2D;
use crate::error::StateError;
use crate::solver::core::CellField;
use crate::types::{Axis, Resolution2D};

use super::euler_2d::{Conserved, Primitive};

/// Primitive variables on every cell.
pub type PrimitiveField = CellField<Primitive>;

/// Conserved variables on every cell.
pub type ConservedField = CellField<Conserved>;

/// Running minimum/maximum of a scalar over a set of cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldExtremes {
    pub min: f64,
    pub max: f64,
    /// Cell holding the minimum
    pub argmin: (usize, usize),
}

impl FieldExtremes {
    pub fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            argmin: (0, 0),
        }
    }

    /// Fold one sample in. NaN samples become the minimum so they are
    /// reported instead of silently skipped.
    #[inline]
    pub fn update(&mut self, value: f64, cell: (usize, usize)) {
        if value < self.min || (value.is_nan() && !self.min.is_nan()) {
            self.min = value;
            self.argmin = cell;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Whether every sample seen was strictly positive.
    #[inline]
    pub fn all_positive(&self) -> bool {
        self.min > 0.0
    }
}

impl Default for FieldExtremes {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that every cell in the given index ranges has ρ > 0 and P > 0.
pub fn check_positivity(
    v: &PrimitiveField,
    xs: Range<usize>,
    ys: Range<usize>,
) -> Result<(), StateError> {
    let mut rho = FieldExtremes::new();
    let mut p = FieldExtremes::new();

    for j in ys {
        for (i, cell) in v.row(j).iter().enumerate().take(xs.end).skip(xs.start) {
            rho.update(cell.rho, (i, j));
            p.update(cell.p, (i, j));
        }
    }

    positivity_result(&rho, &p)
}

fn positivity_result(rho: &FieldExtremes, p: &FieldExtremes) -> Result<(), StateError> {
    if !rho.all_positive() {
        log::error!(
            "density lost positivity: min={:.6e} at {:?}, max={:.6e}",
            rho.min,
            rho.argmin,
            rho.max
        );
        return Err(StateError::NonPositiveDensity {
            min: rho.min,
            max: rho.max,
            cell: rho.argmin,
        });
    }
    if !p.all_positive() {
        log::error!(
            "pressure lost positivity: min={:.6e} at {:?}, max={:.6e}",
            p.min,
            p.argmin,
            p.max
        );
        return Err(StateError::NonPositivePressure {
            min: p.min,
            max: p.max,
            cell: p.argmin,
        });
    }
    Ok(())
}

/// Fill `u` from `v` on every cell, ghosts included.
pub fn primitive_to_conserved(gas: &Euler2D, v: &PrimitiveField, u: &mut ConservedField) {
    assert_eq!(v.resolution(), u.resolution(), "field shape mismatch");
    for (out, cell) in u.data.iter_mut().zip(&v.data) {
        *out = gas.to_conserved(cell);
    }
}

/// Fill `v` from `u` on every cell, ghosts included.
///
/// # Errors
///
/// [`StateError::NonPositiveDensity`] or [`StateError::NonPositivePressure`]
/// if any converted cell is unphysical. The error carries the field's
/// min/max; `v` has been overwritten and must not be used further.
pub fn conserved_to_primitive(
    gas: &Euler2D,
    u: &ConservedField,
    v: &mut PrimitiveField,
) -> Result<(), StateError> {
    let res = u.resolution();
    conserved_to_primitive_region(
        gas,
        u,
        v,
        0..res.extent(Axis::X),
        0..res.extent(Axis::Y),
    )
}

/// [`conserved_to_primitive`] restricted to a block of cells.
pub fn conserved_to_primitive_region(
    gas: &Euler2D,
    u: &ConservedField,
    v: &mut PrimitiveField,
    xs: Range<usize>,
    ys: Range<usize>,
) -> Result<(), StateError> {
    assert_eq!(v.resolution(), u.resolution(), "field shape mismatch");

    let mut rho = FieldExtremes::new();
    let mut p = FieldExtremes::new();

    for j in ys {
        for i in xs.clone() {
            let prim = gas.to_primitive(&u.get(i, j));
            rho.update(prim.rho, (i, j));
            p.update(prim.p, (i, j));
            v.set(i, j, prim);
        }
    }

    positivity_result(&rho, &p)
}

/// Primitive and conserved fields describing the same gas.
///
/// Both are kept in step: every mutation of one is followed by deriving
/// the other before ghost cells are refreshed.
#[derive(Clone, Debug)]
pub struct FluidState {
    /// Primitive variables V
    pub primitive: PrimitiveField,
    /// Conserved variables U
    pub conserved: ConservedField,
}

impl FluidState {
    /// Allocate zeroed fields. The state is not physical until an
    /// initial condition is written and [`FluidState::sync_conserved`] runs.
    pub fn new(resolution: Resolution2D) -> Self {
        Self {
            primitive: CellField::new(resolution),
            conserved: CellField::new(resolution),
        }
    }

    pub fn resolution(&self) -> Resolution2D {
        self.primitive.resolution()
    }

    /// Validate V on the physical cells, derive U everywhere, then refresh
    /// the ghost cells of both.
    pub fn sync_conserved<BC: BoundaryCondition + ?Sized>(
        &mut self,
        gas: &Euler2D,
        bc: &BC,
    ) -> Result<(), StateError> {
        let res = self.resolution();
        check_positivity(&self.primitive, res.physical(Axis::X), res.physical(Axis::Y))?;
        primitive_to_conserved(gas, &self.primitive, &mut self.conserved);
        self.enforce_boundaries(bc);
        Ok(())
    }

    /// Derive V from U on the physical cells.
    pub fn sync_primitive(&mut self, gas: &Euler2D) -> Result<(), StateError> {
        let res = self.resolution();
        conserved_to_primitive_region(
            gas,
            &self.conserved,
            &mut self.primitive,
            res.physical(Axis::X),
            res.physical(Axis::Y),
        )
    }

    /// Refresh ghost cells of both fields.
    pub fn enforce_boundaries<BC: BoundaryCondition + ?Sized>(&mut self, bc: &BC) {
        enforce_boundaries(&mut self.primitive, bc);
        enforce_boundaries(&mut self.conserved, bc);
    }
}
