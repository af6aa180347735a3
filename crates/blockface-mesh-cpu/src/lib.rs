//! CPU meshing crate: face-culled cube meshes from a sparse voxel set.
#![forbid(unsafe_code)]

mod build;
pub mod constants;
mod emit;
mod face;
mod mesh_build;

pub use build::{MeshBuilder, build_voxel_mesh, count_exposed_faces};
pub use face::Face;
pub use mesh_build::MeshBuffer;
