//! Ghost-cell fill.

use crate::solver::core::CellField;
use crate::types::Axis;

use super::BoundaryCondition;

/// Overwrite every ghost cell of `field` according to `bc`.
///
/// Each ghost `(i, j)` copies `(src_x(i), src_y(j))`. Both policies map
/// every index onto the physical range, even when an axis has fewer
/// physical cells than ghost layers, so the fill does not depend on
/// visiting order and the corner blocks come out right. Physical cells are
/// left untouched. No allocation.
pub fn enforce_boundaries<T, BC>(field: &mut CellField<T>, bc: &BC)
where
    T: Copy,
    BC: BoundaryCondition + ?Sized,
{
    let res = field.resolution();
    let ng = res.ng();
    let (nx, ny) = (res.nx(), res.ny());
    let (ex, ey) = (res.extent(Axis::X), res.extent(Axis::Y));

    for j in 0..ey {
        let sj = bc.source_index(j, ny, ng);
        if sj == j {
            // Physical row: only the x ghosts on either end
            for i in (0..ng).chain(ng + nx..ex) {
                field.copy_cell((i, j), (bc.source_index(i, nx, ng), j));
            }
        } else {
            for i in 0..ex {
                field.copy_cell((i, j), (bc.source_index(i, nx, ng), sj));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryKind, Outflow, Periodic};
    use crate::types::Resolution2D;

    /// Field with physical cells tagged 10*j + i and ghosts set to -1.
    fn tagged(nx: usize, ny: usize, ng: usize) -> CellField<i64> {
        let res = Resolution2D::new(nx, ny, ng).unwrap();
        let mut f = CellField::filled(res, -1);
        for j in res.physical(Axis::Y) {
            for i in res.physical(Axis::X) {
                f.set(i, j, (10 * j + i) as i64);
            }
        }
        f
    }

    #[test]
    fn test_periodic_edges_and_corners() {
        // nx = 3, ny = 2, ng = 2: physical x 2..5, y 2..4
        let mut f = tagged(3, 2, 2);
        enforce_boundaries(&mut f, &Periodic);

        // Left ghosts hold the rightmost physical columns
        assert_eq!(f.get(0, 2), f.get(3, 2));
        assert_eq!(f.get(1, 2), f.get(4, 2));
        // Right ghosts hold the leftmost
        assert_eq!(f.get(5, 3), f.get(2, 3));
        assert_eq!(f.get(6, 3), f.get(3, 3));
        // Bottom ghosts hold the top rows
        assert_eq!(f.get(3, 0), f.get(3, 2));
        assert_eq!(f.get(3, 1), f.get(3, 3));
        // Corner: diagonally opposite physical corner
        assert_eq!(f.get(1, 1), f.get(4, 3));
        assert_eq!(f.get(5, 4), f.get(2, 2));
        assert_eq!(f.get(0, 5), f.get(3, 3));

        assert!(f.data.iter().all(|&v| v >= 0));
    }

    #[test]
    fn test_periodic_single_row() {
        // nx = 4, ny = 1, ng = 2: every ghost row repeats physical row 2
        let mut f = tagged(4, 1, 2);
        enforce_boundaries(&mut f, &Periodic);

        for j in [0, 1, 3, 4] {
            for i in 2..6 {
                assert_eq!(f.get(i, j), f.get(i, 2), "cell ({i}, {j})");
            }
        }
        // Corner ghosts wrap in x as well
        assert_eq!(f.get(0, 0), f.get(4, 2));
        assert_eq!(f.get(1, 4), f.get(5, 2));
        assert_eq!(f.get(6, 1), f.get(2, 2));
        assert_eq!(f.get(7, 3), f.get(3, 2));
        assert!(f.data.iter().all(|&v| v >= 0));
    }

    #[test]
    fn test_periodic_single_cell() {
        // nx = ny = 1, ng = 2: the whole 5x5 block is the one physical cell
        let mut f = tagged(1, 1, 2);
        enforce_boundaries(&mut f, &Periodic);
        assert!(f.data.iter().all(|&v| v == 22));
    }

    #[test]
    fn test_periodic_single_column() {
        let mut f = tagged(1, 3, 2);
        enforce_boundaries(&mut f, &Periodic);
        for j in 0..7 {
            let src_j = 2 + (j + 3 * 2 - 2) % 3;
            for i in 0..5 {
                assert_eq!(f.get(i, j), f.get(2, src_j), "cell ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_outflow_copies_nearest() {
        let mut f = tagged(3, 2, 2);
        enforce_boundaries(&mut f, &Outflow);

        assert_eq!(f.get(0, 2), f.get(2, 2));
        assert_eq!(f.get(6, 3), f.get(4, 3));
        assert_eq!(f.get(3, 0), f.get(3, 2));
        assert_eq!(f.get(3, 5), f.get(3, 3));
        // Corners
        assert_eq!(f.get(0, 0), f.get(2, 2));
        assert_eq!(f.get(6, 0), f.get(4, 2));
        assert_eq!(f.get(6, 5), f.get(4, 3));
    }

    #[test]
    fn test_physical_cells_untouched() {
        let mut f = tagged(4, 3, 1);
        let before: Vec<_> = f.physical_cells().collect();
        enforce_boundaries(&mut f, &BoundaryKind::Periodic);
        let after: Vec<_> = f.physical_cells().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_idempotent() {
        let mut f = tagged(4, 3, 2);
        enforce_boundaries(&mut f, &BoundaryKind::Outflow);
        let once = f.clone();
        enforce_boundaries(&mut f, &BoundaryKind::Outflow);
        assert_eq!(f, once);
    }
}
