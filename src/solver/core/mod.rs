//! Core storage for cell-centered finite-volume data.
//!
//! - [`CellField`]: dense row-major storage over physical and ghost cells

mod cell_field;

pub use cell_field::CellField;
