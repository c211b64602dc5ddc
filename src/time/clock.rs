//! Simulation clock and split-sweep ordering.

use crate::types::Axis;

/// Time, step count and the last axis swept.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Clock {
    /// Simulation time t
    pub time: f64,
    /// Completed steps
    pub step: u64,
    last_axis: Option<Axis>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis swept last by the previous step, if any.
    pub fn last_axis(&self) -> Option<Axis> {
        self.last_axis
    }

    /// Axis order for the next step.
    ///
    /// The first step runs `[x, y]`. Every later step opens with the axis
    /// the previous one closed on, so orders alternate
    /// `[x, y], [y, x], [x, y], ...` and consecutive steps pair up
    /// symmetrically.
    pub fn sweep_order(&self) -> [Axis; 2] {
        match self.last_axis {
            Some(Axis::Y) => [Axis::Y, Axis::X],
            Some(Axis::X) | None => [Axis::X, Axis::Y],
        }
    }

    /// Record a completed step of size `dt` that ended on `last_axis`.
    pub fn advance(&mut self, dt: f64, last_axis: Axis) {
        self.time += dt;
        self.step += 1;
        self.last_axis = Some(last_axis);
    }
}
