//! Shared constants for blockface-mesh-cpu.

/// Unit-cube corners; corner `(x,y,z)` lives at index `4*x + 2*y + z`.
pub const CUBE_VERTICES: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 0.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 1.0, 1.0],
];

/// Per-slot UVs, applied in face corner order. Not derived from world position.
pub const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];

/// Two triangles over a quad's local slots: (0,1,2) and (2,3,0).
pub const QUAD_TRIANGLES: [u32; 6] = [0, 1, 2, 2, 3, 0];

pub const VERTS_PER_QUAD: usize = 4;
pub const INDICES_PER_QUAD: usize = 6;
pub const FACES_PER_VOXEL: usize = 6;
