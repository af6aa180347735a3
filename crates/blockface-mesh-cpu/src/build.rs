use blockface_geom::VoxelCoord;
use blockface_voxels::VoxelSet;

use crate::emit::emit_cube_faces;
use crate::face::Face;
use crate::mesh_build::MeshBuffer;

/// True if the cell across `face` from `cell` is occupied. Cells past the
/// `i32` grid edge are never occupied.
#[inline]
pub(crate) fn neighbor_occupied(voxels: &VoxelSet, cell: VoxelCoord, face: Face) -> bool {
    let (dx, dy, dz) = face.delta();
    cell.checked_offset(dx, dy, dz)
        .is_some_and(|n| voxels.contains(n))
}

/// Number of quads a build of `voxels` emits.
pub fn count_exposed_faces(voxels: &VoxelSet) -> usize {
    voxels
        .iter()
        .map(|c| {
            Face::ALL
                .iter()
                .filter(|&&f| !neighbor_occupied(voxels, c, f))
                .count()
        })
        .sum()
}

/// Builds the culled surface mesh for the current occupancy.
///
/// Each occupied cell emits one quad per face whose neighbor is empty; faces
/// shared by two occupied cells are dropped from both sides.
pub fn build_voxel_mesh(voxels: &VoxelSet) -> MeshBuffer {
    let quads = count_exposed_faces(voxels);
    let mut mb = MeshBuffer::with_quad_capacity(quads);
    let mut emitted = 0usize;
    for cell in voxels.iter() {
        emitted += emit_cube_faces(&mut mb, cell, |face| neighbor_occupied(voxels, cell, face));
    }
    debug_assert!(
        mb.check_invariants(),
        "mesh layout broken: {:?}",
        mb.invariant_violation()
    );
    debug_assert_eq!(emitted, quads);
    log::debug!(
        "built voxel mesh: voxels={} quads={} verts={} tris={} rev={}",
        voxels.len(),
        mb.quad_count(),
        mb.vertex_count(),
        mb.triangle_count(),
        voxels.revision()
    );
    mb
}

/// Stateless entry point; every call is independent of the previous one.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeshBuilder;

impl MeshBuilder {
    pub const fn new() -> Self {
        MeshBuilder
    }

    #[inline]
    pub fn build(&self, voxels: &VoxelSet) -> MeshBuffer {
        build_voxel_mesh(voxels)
    }
}
