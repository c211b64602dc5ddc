//! Interface-state reconstruction along one sweep axis.
//!
//! For every cell the reconstruction provides the primitive state at its
//! low (`left`) and high (`right`) face along the sweep axis:
//!
//! - constant: both faces carry the cell value. Nothing is stored; readers
//!   see the primitive field itself through [`EdgeSource::Centered`].
//! - linear: `sL = V[c] - V[c-1]`, `sR = V[c+1] - V[c]`, `s = limiter(sL, sR)`,
//!   then `left = V - s/2`, `right = V + s/2`, optionally advanced by half a
//!   step with a Hancock predictor.
//!
//! Linear edges are computed for the cells `ng-1 ..= ng+n` along the sweep
//! axis (every cell adjacent to a physical interface) and for the physical
//! rows across it. Those edges must keep ρ > 0 and P > 0 or the sweep fails.

use std::ops::Range;

use crate::equations::Euler2D;
use crate::error::StateError;
use crate::solver::core::CellField;
use crate::solver::limiters::{LimiterKind, SlopeLimiter};
use crate::solver::state::{Primitive, PrimitiveField, check_positivity};
use crate::time::{ReconstructionKind, TimeIntegrationKind};
use crate::types::{Axis, Resolution2D};

/// Parameters shared by every stage of one directional sweep.
#[derive(Clone, Copy, Debug)]
pub struct SweepContext {
    pub gas: Euler2D,
    pub axis: Axis,
    /// Step size
    pub dt: f64,
    /// Cell size
    pub dx: f64,
}

impl SweepContext {
    pub fn new(gas: Euler2D, axis: Axis, dt: f64, dx: f64) -> Self {
        Self { gas, axis, dt, dx }
    }

    /// Courant factor dt/dx.
    #[inline(always)]
    pub fn dt_dx(&self) -> f64 {
        self.dt / self.dx
    }
}

/// Owned left/right edge buffers, same shape as the primitive field.
#[derive(Clone, Debug)]
pub struct EdgeStates {
    /// State at each cell's low face along the sweep axis
    pub left: PrimitiveField,
    /// State at each cell's high face along the sweep axis
    pub right: PrimitiveField,
}

impl EdgeStates {
    pub fn new(resolution: Resolution2D) -> Self {
        Self {
            left: CellField::new(resolution),
            right: CellField::new(resolution),
        }
    }
}

/// Read-only view of the edge states produced by a reconstruction.
#[derive(Clone, Copy, Debug)]
pub enum EdgeSource<'a> {
    /// Constant reconstruction: both edges equal the cell value
    Centered(&'a PrimitiveField),
    /// Linear reconstruction buffers
    Reconstructed(&'a EdgeStates),
}

impl EdgeSource<'_> {
    /// State at the low face of cell `(i, j)`.
    #[inline(always)]
    pub fn left_of(&self, i: usize, j: usize) -> Primitive {
        match self {
            EdgeSource::Centered(v) => v.get(i, j),
            EdgeSource::Reconstructed(e) => e.left.get(i, j),
        }
    }

    /// State at the high face of cell `(i, j)`.
    #[inline(always)]
    pub fn right_of(&self, i: usize, j: usize) -> Primitive {
        match self {
            EdgeSource::Centered(v) => v.get(i, j),
            EdgeSource::Reconstructed(e) => e.right.get(i, j),
        }
    }
}

/// Linear reconstruction with its scratch buffers.
#[derive(Clone, Debug)]
pub struct LinearReconstruction {
    pub limiter: LimiterKind,
    pub predictor: TimeIntegrationKind,
    edges: EdgeStates,
}

impl LinearReconstruction {
    pub fn new(resolution: Resolution2D, limiter: LimiterKind, predictor: TimeIntegrationKind) -> Self {
        Self {
            limiter,
            predictor,
            edges: EdgeStates::new(resolution),
        }
    }

    /// Edge buffers from the last call to [`LinearReconstruction::compute`].
    pub fn edges(&self) -> &EdgeStates {
        &self.edges
    }

    /// Fill the edge buffers for a sweep along `ctx.axis`.
    pub fn compute(&mut self, ctx: &SweepContext, v: &PrimitiveField) -> Result<(), StateError> {
        let res = v.resolution();
        let axis = ctx.axis;
        let along = reconstructed_range(res, axis);
        let half_dt_dx = 0.5 * ctx.dt_dx();

        for across in res.physical(axis.other()) {
            for c in along.clone() {
                let (i, j) = axis.cell(c, across);
                let (ip, jp) = axis.prev(i, j);
                let (in_, jn) = axis.next(i, j);

                let center = v.get(i, j);
                let sl = center - v.get(ip, jp);
                let sr = v.get(in_, jn) - center;
                let slope = self.limiter.limit_state(sl, sr);

                let mut left = center - 0.5 * slope;
                let mut right = center + 0.5 * slope;

                match self.predictor {
                    TimeIntegrationKind::Euler => {}
                    TimeIntegrationKind::Hancock => {
                        let dvdt = ctx.gas.primitive_time_derivative(axis, &center, &slope);
                        left += half_dt_dx * dvdt;
                        right += half_dt_dx * dvdt;
                    }
                    TimeIntegrationKind::HancockCons => {
                        let gas = &ctx.gas;
                        let du = half_dt_dx * (gas.flux(axis, &left) - gas.flux(axis, &right));
                        left = gas.to_primitive(&(gas.to_conserved(&left) + du));
                        right = gas.to_primitive(&(gas.to_conserved(&right) + du));
                    }
                }

                self.edges.left.set(i, j, left);
                self.edges.right.set(i, j, right);
            }
        }

        // ρ < 0 with P < 0 still gives a real sound speed
        let (xs, ys) = match axis {
            Axis::X => (along, res.physical(Axis::Y)),
            Axis::Y => (res.physical(Axis::X), along),
        };
        check_positivity(&self.edges.left, xs.clone(), ys.clone())?;
        check_positivity(&self.edges.right, xs, ys)?;

        log::trace!(
            "linear reconstruction along {axis}: limiter={} predictor={}",
            self.limiter.name(),
            self.predictor
        );
        Ok(())
    }
}

/// Cells along `axis` whose edges feed a physical interface.
fn reconstructed_range(res: Resolution2D, axis: Axis) -> Range<usize> {
    let ng = res.ng();
    ng - 1..ng + res.cells(axis) + 1
}

/// Reconstruction strategy with whatever storage it owns.
#[derive(Clone, Debug)]
pub enum Reconstruction {
    Constant,
    Linear(LinearReconstruction),
}

impl Reconstruction {
    /// Build the reconstruction for a grid of the given resolution.
    pub fn new(
        kind: ReconstructionKind,
        resolution: Resolution2D,
        limiter: LimiterKind,
        predictor: TimeIntegrationKind,
    ) -> Self {
        match kind {
            ReconstructionKind::Constant => Reconstruction::Constant,
            ReconstructionKind::Linear => {
                Reconstruction::Linear(LinearReconstruction::new(resolution, limiter, predictor))
            }
        }
    }

    pub fn kind(&self) -> ReconstructionKind {
        match self {
            Reconstruction::Constant => ReconstructionKind::Constant,
            Reconstruction::Linear(_) => ReconstructionKind::Linear,
        }
    }

    /// Compute edge states for a sweep and return a view of them.
    ///
    /// Constant reconstruction does no work and never consults the limiter.
    pub fn reconstruct<'a>(
        &'a mut self,
        ctx: &SweepContext,
        v: &'a PrimitiveField,
    ) -> Result<EdgeSource<'a>, StateError> {
        match self {
            Reconstruction::Constant => Ok(EdgeSource::Centered(v)),
            Reconstruction::Linear(linear) => {
                linear.compute(ctx, v)?;
                Ok(EdgeSource::Reconstructed(linear.edges()))
            }
        }
    }
}
