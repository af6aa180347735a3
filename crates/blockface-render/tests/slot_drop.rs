use std::sync::Mutex;

use blockface_geom::VoxelCoord;
use blockface_mesh_cpu::build_voxel_mesh;
use blockface_render::{HeadlessSurface, MeshSlot};
use blockface_voxels::VoxelSet;
use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct Capture;

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

fn drop_warnings() -> Vec<String> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, msg)| *level == Level::Warn && msg.starts_with("mesh slot dropped"))
        .map(|(_, msg)| msg.clone())
        .collect()
}

// One test per binary: the logger is process-global.
#[test]
fn dropping_an_attached_slot_warns_and_leaves_handle_live() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let voxels: VoxelSet = [VoxelCoord::ORIGIN].into_iter().collect();
    let mesh = build_voxel_mesh(&voxels);
    let mut surface = HeadlessSurface::default();

    {
        let mut slot = MeshSlot::new();
        slot.replace(&mut surface, &mesh).unwrap();
        slot.clear(&mut surface);
    }
    assert!(drop_warnings().is_empty());
    assert_eq!(surface.live_handles(), 0);

    {
        let mut slot = MeshSlot::new();
        slot.replace(&mut surface, &mesh).unwrap();
        slot.replace(&mut surface, &mesh).unwrap();
    }
    let warnings = drop_warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("gen 2"), "{}", warnings[0]);
    // Drop cannot reach the surface, so the resource stays accounted as live.
    assert_eq!(surface.live_handles(), 1);
    assert_eq!(surface.releases(), 2);
}
