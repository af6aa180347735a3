use blockface_geom::{Vec3, VoxelCoord};

use crate::constants::CUBE_VERTICES;
use crate::face::Face;
use crate::mesh_build::MeshBuffer;

#[inline]
fn cube_corner(origin: Vec3, i: usize) -> Vec3 {
    let [x, y, z] = CUBE_VERTICES[i];
    origin + Vec3::new(x, y, z)
}

/// Emits the faces of the unit cube at `cell` for which `occludes` returns false.
/// Returns the number of quads written.
#[inline]
pub(crate) fn emit_cube_faces(
    mb: &mut MeshBuffer,
    cell: VoxelCoord,
    mut occludes: impl FnMut(Face) -> bool,
) -> usize {
    let origin = cell.as_vec3();
    let mut written = 0;
    for face in Face::ALL {
        if occludes(face) {
            continue;
        }
        let corners = face.corners().map(|i| cube_corner(origin, i));
        mb.add_quad(corners, face.normal());
        written += 1;
    }
    written
}
