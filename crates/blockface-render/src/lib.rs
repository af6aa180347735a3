//! Rendering-side adapters: take finished mesh buffers to a backend and own their release.
#![forbid(unsafe_code)]

use blockface_mesh_cpu::MeshBuffer;
use thiserror::Error;

mod headless;
mod slot;

pub use headless::{HeadlessSurface, MeshHandle, UploadedPart};
pub use slot::MeshSlot;

/// Vertex cap per part for backends with 16-bit indices.
pub const DEFAULT_MAX_VERTICES_PER_PART: usize = 65000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("invalid mesh buffer: {reason}")]
    InvalidBuffer { reason: &'static str },

    #[error("upload of {requested} bytes exceeds budget ({live} of {budget} bytes live)")]
    BudgetExceeded {
        requested: usize,
        live: usize,
        budget: usize,
    },
}

/// A backend that can hold uploaded meshes. Handles are consumed on release,
/// so each upload is released at most once.
pub trait RenderSurface {
    type Handle;

    fn upload(&mut self, mesh: &MeshBuffer) -> Result<Self::Handle, UploadError>;

    fn release(&mut self, handle: Self::Handle);
}

pub mod conv {
    use blockface_mesh_cpu::MeshBuffer;

    /// Bytes per vertex: position and normal (3 x f32 each) plus uv (2 x f32).
    pub const VERTEX_BYTES: usize = (3 + 3 + 2) * std::mem::size_of::<f32>();
    pub const INDEX_BYTES: usize = std::mem::size_of::<u32>();

    pub fn mesh_bytes(mesh: &MeshBuffer) -> usize {
        part_bytes(mesh.vertex_count(), mesh.indices().len())
    }

    #[inline]
    pub fn part_bytes(vertices: usize, indices: usize) -> usize {
        vertices * VERTEX_BYTES + indices * INDEX_BYTES
    }

    /// Splits `quads` quads into `(first_quad, quad_count)` runs of at most
    /// `max_vertices` vertices each.
    pub fn quad_runs(quads: usize, max_vertices: usize) -> impl Iterator<Item = (usize, usize)> {
        let per_part = (max_vertices / 4).max(1);
        (0..quads)
            .step_by(per_part)
            .map(move |q| (q, (quads - q).min(per_part)))
    }
}
