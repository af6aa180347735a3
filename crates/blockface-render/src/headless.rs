use std::collections::HashMap;

use blockface_geom::Aabb;
use blockface_mesh_cpu::MeshBuffer;

use crate::conv::{mesh_bytes, part_bytes, quad_runs};
use crate::{DEFAULT_MAX_VERTICES_PER_PART, RenderSurface, UploadError};

/// Opaque ticket for one upload on a `HeadlessSurface`. Not `Clone`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle {
    id: u64,
}

impl MeshHandle {
    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadedPart {
    pub v_start: usize,
    pub v_count: usize,
    pub i_count: usize,
    pub bytes: usize,
}

struct Resident {
    parts: Vec<UploadedPart>,
    bytes: usize,
    bounds: Option<Aabb>,
}

/// Backend without a GPU: validates and partitions uploads the way a real
/// backend would, and keeps an account of live resources.
pub struct HeadlessSurface {
    max_vertices_per_part: usize,
    byte_budget: Option<usize>,
    resident: HashMap<u64, Resident>,
    next_id: u64,
    live_bytes: usize,
    uploads: u64,
    releases: u64,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VERTICES_PER_PART, None)
    }
}

impl HeadlessSurface {
    pub fn new(max_vertices_per_part: usize, byte_budget: Option<usize>) -> Self {
        Self {
            // A part must hold at least one quad.
            max_vertices_per_part: max_vertices_per_part.max(4),
            byte_budget,
            resident: HashMap::new(),
            next_id: 1,
            live_bytes: 0,
            uploads: 0,
            releases: 0,
        }
    }

    pub fn live_handles(&self) -> usize {
        self.resident.len()
    }

    pub fn live_bytes(&self) -> usize {
        self.live_bytes
    }

    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    pub fn releases(&self) -> u64 {
        self.releases
    }

    pub fn parts(&self, handle: &MeshHandle) -> Option<&[UploadedPart]> {
        self.resident.get(&handle.id).map(|r| r.parts.as_slice())
    }

    pub fn bounds(&self, handle: &MeshHandle) -> Option<Aabb> {
        self.resident.get(&handle.id).and_then(|r| r.bounds)
    }

    fn partition(&self, mesh: &MeshBuffer) -> Result<Vec<UploadedPart>, UploadError> {
        let verts = mesh.vertex_count();
        let idx = mesh.indices();
        if verts <= self.max_vertices_per_part {
            return Ok(vec![UploadedPart {
                v_start: 0,
                v_count: verts,
                i_count: idx.len(),
                bytes: part_bytes(verts, idx.len()),
            }]);
        }
        let quads = mesh.quad_count();
        if verts != quads * 4 || idx.len() != quads * 6 {
            return Err(UploadError::InvalidBuffer {
                reason: "oversized buffer is not laid out as whole quads",
            });
        }
        let mut parts = Vec::new();
        for (q0, nq) in quad_runs(quads, self.max_vertices_per_part) {
            let v_start = q0 * 4;
            let v_count = nq * 4;
            let local = &idx[q0 * 6..(q0 + nq) * 6];
            // Indices are rebased per part; none may reach outside it.
            let crosses = local
                .iter()
                .any(|&i| (i as usize) < v_start || (i as usize) >= v_start + v_count);
            if crosses {
                return Err(UploadError::InvalidBuffer {
                    reason: "index crosses a part boundary",
                });
            }
            parts.push(UploadedPart {
                v_start,
                v_count,
                i_count: local.len(),
                bytes: part_bytes(v_count, local.len()),
            });
        }
        Ok(parts)
    }
}

impl RenderSurface for HeadlessSurface {
    type Handle = MeshHandle;

    fn upload(&mut self, mesh: &MeshBuffer) -> Result<MeshHandle, UploadError> {
        if let Some(reason) = mesh.invariant_violation() {
            return Err(UploadError::InvalidBuffer { reason });
        }
        let bytes = mesh_bytes(mesh);
        if let Some(budget) = self.byte_budget {
            if self.live_bytes + bytes > budget {
                return Err(UploadError::BudgetExceeded {
                    requested: bytes,
                    live: self.live_bytes,
                    budget,
                });
            }
        }
        let parts = self.partition(mesh)?;
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        log::debug!(
            "headless upload #{}: verts={} tris={} parts={} bytes={}",
            id,
            mesh.vertex_count(),
            mesh.triangle_count(),
            parts.len(),
            bytes
        );
        self.resident.insert(
            id,
            Resident {
                parts,
                bytes,
                bounds: mesh.bounds(),
            },
        );
        self.live_bytes += bytes;
        self.uploads += 1;
        Ok(MeshHandle { id })
    }

    fn release(&mut self, handle: MeshHandle) {
        match self.resident.remove(&handle.id) {
            Some(r) => {
                self.live_bytes -= r.bytes;
                self.releases += 1;
                log::debug!("headless release #{}: bytes={}", handle.id, r.bytes);
            }
            None => log::warn!("release of unknown mesh handle #{}", handle.id),
        }
    }
}
