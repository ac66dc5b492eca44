//! Vertical gap filling for the assembled render buffer.
//!
//! A per-cell cube renderer leaves visible vertical seams wherever two
//! adjacent cells differ in height by more than one unit. This pass
//! synthesizes filler points under the higher cell to close them.

use glam::Vec3;

/// Height of sentinel padding points, far below any generated terrain.
pub const SENTINEL_Y: f32 = -1000.0;

/// Padding point appended to reach the render buffer's target capacity.
/// Renders off-screen and is culled by the consumer.
pub const SENTINEL_POINT: Vec3 = Vec3::new(0.0, SENTINEL_Y, 0.0);

/// Subtracted before flooring so an exact one-unit step fills nothing.
const GAP_EPSILON: f32 = 0.001;

/// Compute filler points for vertical gaps in `region`.
///
/// Walks the region from the last index down to the first. For each point,
/// each of its four lattice neighbors (`i ± 1`, `i ± row_stride`) is
/// compared: a neighbor more than one unit lower contributes
/// `floor(Δy − 0.001)` filler points stacked directly below the higher
/// point at heights `y − 1, y − 2, …`.
///
/// The pass is deliberately single-shot and asymmetric: fillers are
/// returned separately rather than appended to `region`, so they are never
/// themselves examined for further gaps. Callers concatenate the result
/// after the pass.
///
/// Lateral neighbors are raw index offsets: the pass does not special-case
/// row ends, so the last cell of one row sees the first cell of the next as
/// a neighbor. Neighbor bounds are checked against the full region length;
/// callers are responsible for passing a stride that matches the buffer's
/// actual row width (the render assembly asserts this).
///
/// # Panics
///
/// Panics if `row_stride` is zero.
pub fn fill_gaps(region: &[Vec3], row_stride: usize) -> Vec<Vec3> {
    assert!(row_stride > 0, "row stride must be positive");

    let len = region.len();
    let mut fillers = Vec::new();

    for i in (0..len).rev() {
        let point = region[i];
        for neighbor in neighbor_indices(i, len, row_stride) {
            let gap = (point.y - region[neighbor].y - GAP_EPSILON).floor() as i32;
            if gap > 0 {
                for step in 1..=gap {
                    fillers.push(Vec3::new(point.x, point.y - step as f32, point.z));
                }
            }
        }
    }

    fillers
}

/// The in-bounds lattice neighbors of `i` in a flat buffer of `len` points.
fn neighbor_indices(i: usize, len: usize, row_stride: usize) -> impl Iterator<Item = usize> {
    let lateral = [i.checked_sub(1), (i + 1 < len).then_some(i + 1)];
    let vertical = [
        i.checked_sub(row_stride),
        (i + row_stride < len).then_some(i + row_stride),
    ];
    lateral.into_iter().chain(vertical).flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(y: f32, n: usize) -> Vec<Vec3> {
        (0..n).map(|i| Vec3::new(i as f32, y, 0.0)).collect()
    }

    #[test]
    fn test_lateral_gap_fills_down_to_one_above_neighbor() {
        // Heights 5 and 1: floor(5 - 1 - 0.001) == 3 fillers at 4, 3, 2.
        let region = vec![Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 1.0, 0.0)];
        let fillers = fill_gaps(&region, 4);
        assert_eq!(
            fillers,
            vec![
                Vec3::new(0.0, 4.0, 0.0),
                Vec3::new(0.0, 3.0, 0.0),
                Vec3::new(0.0, 2.0, 0.0),
            ],
            "exactly three fillers below the higher point, nothing recursive"
        );
    }

    #[test]
    fn test_one_unit_step_fills_nothing() {
        let region = vec![Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 1.0, 0.0)];
        assert!(fill_gaps(&region, 2).is_empty(), "a single step is not a gap");
    }

    #[test]
    fn test_flat_region_fills_nothing() {
        assert!(fill_gaps(&flat(3.0, 16), 4).is_empty());
    }

    #[test]
    fn test_row_stride_neighbors_fill() {
        // A 2×2 grid where the second row is 4 lower. Each top cell fills 3
        // points against its stride neighbor, and the end of the top row
        // additionally sees the start of the bottom row as a lateral
        // neighbor (raw index arithmetic, no row-end special case).
        let region = vec![
            Vec3::new(0.0, 6.0, 0.0),
            Vec3::new(1.0, 6.0, 0.0),
            Vec3::new(0.0, 2.0, 1.0),
            Vec3::new(1.0, 2.0, 1.0),
        ];
        let fillers = fill_gaps(&region, 2);
        assert_eq!(fillers.len(), 9, "three gap pairs of three fillers: {fillers:?}");
        assert!(fillers.iter().all(|p| p.y >= 3.0 && p.y <= 5.0));
    }

    #[test]
    fn test_only_higher_side_fills() {
        // The lower point sees a negative gap and contributes nothing.
        let region = vec![Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 5.0, 0.0)];
        let fillers = fill_gaps(&region, 2);
        assert!(
            fillers.iter().all(|p| p.x == 1.0),
            "all fillers must hang below the higher point: {fillers:?}"
        );
        assert_eq!(fillers.len(), 3);
    }

    #[test]
    fn test_fillers_keep_source_x_z() {
        let region = vec![Vec3::new(7.0, 10.0, -3.0), Vec3::new(8.0, 0.0, -3.0)];
        let fillers = fill_gaps(&region, 2);
        assert!(
            fillers.iter().all(|p| p.x == 7.0 && p.z == -3.0),
            "fillers must stack directly below their source cell"
        );
        assert_eq!(fillers.len(), 9, "floor(10 - 0 - 0.001) == 9");
    }

    #[test]
    fn test_descending_iteration_order() {
        // Index 1 is visited before index 0, so the lower-index point's
        // fillers come last.
        let region = vec![
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 5.0, 0.0),
        ];
        let fillers = fill_gaps(&region, 3);
        let xs: Vec<f32> = fillers.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 2.0, 2.0, 0.0, 0.0, 0.0]);
    }
}
