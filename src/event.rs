use std::collections::VecDeque;

use blockface_geom::VoxelCoord;

pub enum Event {
    // Input-derived intents
    ClickRequested { cell: VoxelCoord, place: bool },

    // Occupancy changes
    VoxelAdded { cell: VoxelCoord },
    VoxelRemoved { cell: VoxelCoord },

    // Meshing & upload
    MeshRebuildRequested { rev: u64 },
    MeshUploaded { rev: u64, quads: usize, generation: u64 },
}

pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

/// FIFO of events for the current tick.
pub struct EventQueue {
    queue: VecDeque<EventEnvelope>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self { queue: VecDeque::new(), now: 0, next_id: 1 }
    }
}

impl EventQueue {
    pub fn new() -> Self { Self::default() }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        let id = self.alloc_id();
        self.queue.push_back(EventEnvelope { id, tick: self.now, kind });
        id
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn advance_tick(&mut self) {
        self.now = self.now.wrapping_add(1);
    }
}

pub fn log_event(tick: u64, ev: &Event) {
    use Event as E;
    match ev {
        E::ClickRequested { cell, place } => {
            if *place {
                log::info!(target: "events", "[tick {}] Adding voxel at {}", tick, cell);
            } else {
                log::info!(target: "events", "[tick {}] Removing voxel at {}", tick, cell);
            }
        }
        E::VoxelAdded { cell } => {
            log::debug!(target: "events", "[tick {}] VoxelAdded {}", tick, cell);
        }
        E::VoxelRemoved { cell } => {
            log::debug!(target: "events", "[tick {}] VoxelRemoved {}", tick, cell);
        }
        E::MeshRebuildRequested { rev } => {
            log::debug!(target: "events", "[tick {}] MeshRebuildRequested rev={}", tick, rev);
        }
        E::MeshUploaded { rev, quads, generation } => {
            log::info!(target: "events", "[tick {}] MeshUploaded rev={} quads={} gen={}",
                tick, rev, quads, generation);
        }
    }
}
