//! Which face currently looks at the viewer.

use glam::{Quat, Vec3};

use crate::face::CubeFace;

/// Local face normals in face-index order.
pub const FACE_NORMALS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// Direction the camera looks along, in view space.
pub const VIEW_DIRECTION: Vec3 = Vec3::NEG_Z;

/// Returns the face whose rotated normal points most directly back along
/// `view_direction`, i.e. at the viewer.
///
/// Ties go to the lowest face index.
#[must_use]
pub fn resolve_front_face(
    orientation: Quat,
    face_normals: &[Vec3; 6],
    view_direction: Vec3,
) -> CubeFace {
    let toward_viewer = -view_direction.normalize();
    let mut best = CubeFace::ALL[0];
    let mut best_dot = f32::NEG_INFINITY;
    for (face, normal) in CubeFace::ALL.into_iter().zip(face_normals) {
        let dot = (orientation * *normal).dot(toward_viewer);
        if dot > best_dot {
            best_dot = dot;
            best = face;
        }
    }
    best
}
