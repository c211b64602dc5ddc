//! Periodic boundary condition.

use super::BoundaryCondition;

/// Wrap-around boundary.
///
/// Indices wrap modulo `n` onto the physical range, so the low ghosts hold
/// the last physical cells and the high ghosts the first. With `n < ng`
/// the physical cells repeat as often as needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Periodic;

impl BoundaryCondition for Periodic {
    #[inline]
    fn source_index(&self, index: usize, n: usize, ng: usize) -> usize {
        ng + (index + n * ng - ng) % n
    }

    fn name(&self) -> &'static str {
        "periodic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_to_opposite_edge() {
        // n = 4, ng = 2: physical 2..6, extent 8
        let bc = Periodic;
        assert_eq!(bc.source_index(0, 4, 2), 4);
        assert_eq!(bc.source_index(1, 4, 2), 5);
        assert_eq!(bc.source_index(6, 4, 2), 2);
        assert_eq!(bc.source_index(7, 4, 2), 3);
    }

    #[test]
    fn test_single_cell_axis() {
        // Every ghost sees the only physical cell
        let bc = Periodic;
        assert_eq!(bc.source_index(0, 1, 1), 1);
        assert_eq!(bc.source_index(2, 1, 1), 1);
        assert_eq!(bc.source_index(0, 1, 2), 2);
        assert_eq!(bc.source_index(1, 1, 2), 2);
        assert_eq!(bc.source_index(3, 1, 2), 2);
        assert_eq!(bc.source_index(4, 1, 2), 2);
    }

    #[test]
    fn test_fewer_cells_than_ghosts() {
        // n = 2, ng = 3: physical 3..5, extent 8
        let bc = Periodic;
        let expected = [4, 3, 4, 3, 4, 3, 4, 3];
        for (index, &src) in expected.iter().enumerate() {
            assert_eq!(bc.source_index(index, 2, 3), src, "index {index}");
        }
    }
}
