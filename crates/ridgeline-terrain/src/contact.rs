//! Typed cell-face contact classification.
//!
//! Collision collaborators historically encoded "which cube faces did I
//! touch" as a six-bit mask. These types replace the mask with tagged
//! values carrying axis and sign, so call sites match on meaning instead of
//! masking magic bits.

use glam::Vec3;

/// A world axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Contact with one face of a unit cell.
///
/// `positive` selects the face on the axis's positive side (e.g.
/// `{ axis: Y, positive: true }` is the cell's top face).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceContact {
    /// The axis perpendicular to the contacted face.
    pub axis: Axis,
    /// Whether the face lies on the positive side of the cell.
    pub positive: bool,
}

impl FaceContact {
    /// Creates a face contact.
    pub const fn new(axis: Axis, positive: bool) -> Self {
        Self { axis, positive }
    }
}

/// Classify which faces of the unit cell at `cell_min` the point touches.
///
/// A face counts as touched when the point lies within `tolerance` of its
/// plane while inside the cell's bounds (expanded by `tolerance`) on the
/// other axes. Points in the cell interior or outside the cell produce no
/// contacts. A point on an edge or corner reports every adjoining face.
pub fn cell_contacts(point: Vec3, cell_min: Vec3, tolerance: f32) -> Vec<FaceContact> {
    let cell_max = cell_min + Vec3::ONE;

    for axis in 0..3 {
        if point[axis] < cell_min[axis] - tolerance || point[axis] > cell_max[axis] + tolerance {
            return Vec::new();
        }
    }

    const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
    let mut contacts = Vec::new();
    for (i, axis) in AXES.into_iter().enumerate() {
        if (point[i] - cell_min[i]).abs() <= tolerance {
            contacts.push(FaceContact::new(axis, false));
        }
        if (point[i] - cell_max[i]).abs() <= tolerance {
            contacts.push(FaceContact::new(axis, true));
        }
    }
    contacts
}
