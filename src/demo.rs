use blockface_geom::VoxelCoord;
use blockface_mesh_cpu::{MeshBuffer, MeshBuilder};
use blockface_render::{HeadlessSurface, MeshHandle, MeshSlot, UploadError};
use blockface_voxels::VoxelSet;

use crate::config::{Clicks, SceneConfig};
use crate::event::{Event, EventQueue, log_event};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Added,
    Removed,
    Unchanged,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub clicks: u32,
    pub added: u32,
    pub removed: u32,
    pub unchanged: u32,
    pub rebuilds: u64,
    pub failed_uploads: u32,
}

/// Headless stand-in for the interactive scene: a voxel set, its current mesh,
/// and the surface slot that mesh is attached to.
pub struct Demo {
    voxels: VoxelSet,
    builder: MeshBuilder,
    mesh: MeshBuffer,
    built_rev: Option<u64>,
    rebuilds: u64,
    surface: HeadlessSurface,
    slot: MeshSlot<MeshHandle>,
    events: EventQueue,
    rng: fastrand::Rng,
    clicks: Clicks,
}

impl Demo {
    pub fn new(cfg: &SceneConfig) -> Self {
        Self {
            voxels: cfg.seed_cells().collect(),
            builder: MeshBuilder::new(),
            mesh: MeshBuffer::default(),
            built_rev: None,
            rebuilds: 0,
            surface: HeadlessSurface::new(
                cfg.surface.max_vertices_per_part,
                cfg.surface.byte_budget,
            ),
            slot: MeshSlot::new(),
            events: EventQueue::new(),
            rng: fastrand::Rng::with_seed(cfg.clicks.seed),
            clicks: cfg.clicks.clone(),
        }
    }

    pub fn voxels(&self) -> &VoxelSet {
        &self.voxels
    }

    pub fn mesh(&self) -> &MeshBuffer {
        &self.mesh
    }

    pub fn surface(&self) -> &HeadlessSurface {
        &self.surface
    }

    pub fn slot(&self) -> &MeshSlot<MeshHandle> {
        &self.slot
    }

    /// Builds and attaches the mesh for the seeded scene.
    pub fn start(&mut self) -> Result<(), UploadError> {
        let rev = self.voxels.revision();
        self.events.emit_now(Event::MeshRebuildRequested { rev });
        self.pump()
    }

    /// Picks a cell near the origin and whether to place or remove it.
    pub fn pick_click(&mut self) -> (VoxelCoord, bool) {
        let r = self.clicks.radius;
        let cell = VoxelCoord::new(
            self.rng.i32(-r..=r),
            self.rng.i32(-r..=r),
            self.rng.i32(-r..=r),
        );
        let place = self.rng.f64() < self.clicks.add_probability;
        (cell, place)
    }

    pub fn click(&mut self, cell: VoxelCoord, place: bool) -> Result<ClickOutcome, UploadError> {
        let before = self.voxels.revision();
        self.events.emit_now(Event::ClickRequested { cell, place });
        self.pump()?;
        Ok(self.outcome_since(before, place))
    }

    fn outcome_since(&self, before: u64, place: bool) -> ClickOutcome {
        match (self.voxels.revision() != before, place) {
            (false, _) => ClickOutcome::Unchanged,
            (true, true) => ClickOutcome::Added,
            (true, false) => ClickOutcome::Removed,
        }
    }

    /// Performs `n` random clicks. A failed upload keeps the previous mesh
    /// attached; the next click requests the rebuild again.
    pub fn run(&mut self, n: u32) -> RunStats {
        let mut stats = RunStats::default();
        for _ in 0..n {
            let (cell, place) = self.pick_click();
            let before = self.voxels.revision();
            let outcome = match self.click(cell, place) {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::warn!("mesh upload after click at {} failed: {}", cell, e);
                    stats.failed_uploads += 1;
                    self.outcome_since(before, place)
                }
            };
            match outcome {
                ClickOutcome::Added => stats.added += 1,
                ClickOutcome::Removed => stats.removed += 1,
                ClickOutcome::Unchanged => stats.unchanged += 1,
            }
            stats.clicks += 1;
        }
        stats.rebuilds = self.rebuilds;
        stats
    }

    /// Detaches the mesh from the surface.
    pub fn shutdown(&mut self) {
        self.slot.clear(&mut self.surface);
    }

    /// Drains the queue, then advances the tick whether or not an upload failed.
    fn pump(&mut self) -> Result<(), UploadError> {
        let drained = self.drain();
        self.events.advance_tick();
        drained
    }

    fn drain(&mut self) -> Result<(), UploadError> {
        while let Some(env) = self.events.pop_ready() {
            log_event(env.tick, &env.kind);
            match env.kind {
                Event::ClickRequested { cell, place } => {
                    if place {
                        if self.voxels.insert(cell) {
                            self.events.emit_now(Event::VoxelAdded { cell });
                        }
                    } else if self.voxels.remove_coord(cell) {
                        self.events.emit_now(Event::VoxelRemoved { cell });
                    }
                    let rev = self.voxels.revision();
                    if self.built_rev != Some(rev) {
                        self.events.emit_now(Event::MeshRebuildRequested { rev });
                    } else {
                        log::debug!("click left scene unchanged at rev {}; no rebuild", rev);
                    }
                }
                Event::MeshRebuildRequested { rev } => {
                    // Requests queued before a later edit are superseded by it.
                    if rev != self.voxels.revision() || self.built_rev == Some(rev) {
                        continue;
                    }
                    let mesh = self.builder.build(&self.voxels);
                    self.slot.replace(&mut self.surface, &mesh)?;
                    self.mesh = mesh;
                    self.built_rev = Some(rev);
                    self.rebuilds += 1;
                    self.events.emit_now(Event::MeshUploaded {
                        rev,
                        quads: self.mesh.quad_count(),
                        generation: self.slot.generation(),
                    });
                }
                Event::VoxelAdded { .. } | Event::VoxelRemoved { .. } | Event::MeshUploaded { .. } => {}
            }
        }
        Ok(())
    }
}
