use blockface_geom::{Aabb, Vec3};

use crate::constants::{FACE_UVS, INDICES_PER_QUAD, QUAD_TRIANGLES, VERTS_PER_QUAD};

/// Flat, renderer-agnostic output of one build: positions and normals (stride 3),
/// UVs (stride 2), and triangle indices (stride 3) into the vertex arrays.
///
/// Produced whole by the builder and read-only afterwards.
///
/// Positions are `cell as f32 + corner`, exact only while every coordinate
/// stays within `±2^24`. Farther out the two corners of an axis round to the
/// same float and the quads collapse to zero area, though counts and indices
/// are unaffected.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuffer {
    pub(crate) pos: Vec<f32>,
    pub(crate) norm: Vec<f32>,
    pub(crate) uv: Vec<f32>,
    pub(crate) idx: Vec<u32>,
}

impl MeshBuffer {
    /// Pre-reserves capacity for exactly `n_quads` quads.
    pub(crate) fn with_quad_capacity(n_quads: usize) -> Self {
        let verts = n_quads * VERTS_PER_QUAD;
        Self {
            pos: Vec::with_capacity(verts * 3),
            norm: Vec::with_capacity(verts * 3),
            uv: Vec::with_capacity(verts * 2),
            idx: Vec::with_capacity(n_quads * INDICES_PER_QUAD),
        }
    }

    /// Wraps arrays produced elsewhere. Nothing is validated; see `invariant_violation`.
    pub fn from_raw(pos: Vec<f32>, norm: Vec<f32>, uv: Vec<f32>, idx: Vec<u32>) -> Self {
        Self { pos, norm, uv, idx }
    }

    /// Appends a planar quad whose corners are already in outward winding order.
    pub(crate) fn add_quad(&mut self, corners: [Vec3; 4], n: Vec3) {
        let base = self.vertex_count() as u32;
        for (p, uv) in corners.iter().zip(FACE_UVS) {
            self.pos.extend_from_slice(&[p.x, p.y, p.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
            self.uv.extend_from_slice(&uv);
        }
        self.idx.extend(QUAD_TRIANGLES.iter().map(|&i| base + i));
    }

    /// Returns a slice of interleaved vertex positions (x,y,z per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }
    /// Returns a slice of interleaved vertex normals (x,y,z per vertex).
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }
    /// Returns a slice of interleaved texture coordinates (u,v per vertex).
    pub fn uvs(&self) -> &[f32] {
        &self.uv
    }
    pub fn indices(&self) -> &[u32] {
        &self.idx
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / INDICES_PER_QUAD
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty() && self.idx.is_empty()
    }

    /// Position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }

    /// Normal of vertex `i`.
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(self.norm[i * 3], self.norm[i * 3 + 1], self.norm[i * 3 + 2])
    }

    /// Tight bounds of all vertex positions, `None` for an empty buffer.
    pub fn bounds(&self) -> Option<Aabb> {
        let first = self.pos.get(..3).map(|p| Vec3::new(p[0], p[1], p[2]))?;
        let bb = self
            .pos
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
            .fold(Aabb::new(first, first), Aabb::grow);
        Some(bb)
    }

    /// Describes the first broken layout rule, or `None` when the buffer is consistent.
    pub fn invariant_violation(&self) -> Option<&'static str> {
        if self.pos.len() % 3 != 0 {
            return Some("position array is not a multiple of 3");
        }
        let verts = self.vertex_count();
        if self.norm.len() != verts * 3 {
            return Some("normal count differs from position count");
        }
        if self.uv.len() != verts * 2 {
            return Some("uv count differs from position count");
        }
        if self.idx.len() % 3 != 0 {
            return Some("index array is not a multiple of 3");
        }
        if self.idx.iter().any(|&i| i as usize >= verts) {
            return Some("index out of range");
        }
        None
    }

    #[inline]
    pub fn check_invariants(&self) -> bool {
        self.invariant_violation().is_none()
    }
}
