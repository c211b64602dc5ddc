//! Cell-centered storage on the ghost-padded Cartesian grid.

use std::ops::{Index, IndexMut};

use crate::types::{Axis, Resolution2D};

/// Dense per-cell storage covering physical and ghost cells.
///
/// Layout is row-major with x fastest: cell `(i, j)` lives at
/// `data[j * extent_x + i]`. A row (fixed `j`) is contiguous, which is
/// what the sweep kernels and the boundary fill iterate over.
#[derive(Clone, Debug, PartialEq)]
pub struct CellField<T> {
    /// Cell values, ghosts included
    pub data: Vec<T>,
    resolution: Resolution2D,
}

impl<T: Copy + Default> CellField<T> {
    /// Allocate a field filled with `T::default()`.
    pub fn new(resolution: Resolution2D) -> Self {
        Self::filled(resolution, T::default())
    }
}

impl<T: Copy> CellField<T> {
    /// Allocate a field with every cell set to `value`.
    pub fn filled(resolution: Resolution2D, value: T) -> Self {
        Self {
            data: vec![value; resolution.total_cells()],
            resolution,
        }
    }

    /// Grid resolution this field was allocated for.
    #[inline]
    pub fn resolution(&self) -> Resolution2D {
        self.resolution
    }

    /// Array extent along an axis, ghosts included.
    #[inline]
    pub fn extent(&self, axis: Axis) -> usize {
        self.resolution.extent(axis)
    }

    #[inline(always)]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.extent(Axis::X) && j < self.extent(Axis::Y));
        j * self.resolution.extent(Axis::X) + i
    }

    /// Value at cell `(i, j)`.
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[self.offset(i, j)]
    }

    /// Overwrite cell `(i, j)`.
    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        let idx = self.offset(i, j);
        self.data[idx] = value;
    }

    /// Copy cell `src` into cell `dst`.
    #[inline(always)]
    pub fn copy_cell(&mut self, dst: (usize, usize), src: (usize, usize)) {
        let value = self.get(src.0, src.1);
        self.set(dst.0, dst.1, value);
    }

    /// Contiguous row `j`, ghosts included.
    pub fn row(&self, j: usize) -> &[T] {
        let nx = self.extent(Axis::X);
        &self.data[j * nx..(j + 1) * nx]
    }

    /// Mutable rows, in order of increasing `j`.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, T> {
        let nx = self.extent(Axis::X);
        self.data.chunks_exact_mut(nx)
    }

    /// Mutable rows for parallel iteration.
    #[cfg(feature = "parallel")]
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, T>
    where
        T: Send,
    {
        use rayon::prelude::*;

        let nx = self.extent(Axis::X);
        self.data.par_chunks_exact_mut(nx)
    }

    /// Iterate `((i, j), value)` over the physical cells only.
    pub fn physical_cells(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        let xs = self.resolution.physical(Axis::X);
        self.resolution
            .physical(Axis::Y)
            .flat_map(move |j| xs.clone().map(move |i| (i, j)))
            .map(|(i, j)| ((i, j), self.get(i, j)))
    }
}

impl<T: Copy> Index<(usize, usize)> for CellField<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        let idx = self.offset(i, j);
        &self.data[idx]
    }
}

impl<T: Copy> IndexMut<(usize, usize)> for CellField<T> {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let idx = self.offset(i, j);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res() -> Resolution2D {
        Resolution2D::new(3, 2, 1).unwrap()
    }

    #[test]
    fn test_layout_is_row_major() {
        let mut f: CellField<f64> = CellField::new(res());
        assert_eq!(f.data.len(), 5 * 4);

        f.set(2, 1, 7.0);
        assert_eq!(f.data[5 + 2], 7.0);
        assert_eq!(f[(2, 1)], 7.0);
        assert_eq!(f.row(1)[2], 7.0);
    }

    #[test]
    fn test_physical_cells_skip_ghosts() {
        let mut f = CellField::filled(res(), -1.0);
        for j in 1..3 {
            for i in 1..4 {
                f[(i, j)] = (10 * j + i) as f64;
            }
        }

        let cells: Vec<_> = f.physical_cells().collect();
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|(_, v)| *v > 0.0));
        assert_eq!(cells[0], ((1, 1), 11.0));
        assert_eq!(cells[5], ((3, 2), 23.0));
    }

    #[test]
    fn test_copy_cell() {
        let mut f: CellField<i32> = CellField::new(res());
        f.set(1, 1, 5);
        f.copy_cell((0, 0), (1, 1));
        assert_eq!(f.get(0, 0), 5);
    }
}
