mod config;
mod demo;
mod event;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{SceneConfig, load_scene_from_path};
use crate::demo::Demo;

#[derive(Parser, Debug)]
#[command(name = "blockface", about = "Face-culled voxel meshing demo")]
struct Args {
    /// Scene description (TOML); built-in three-voxel scene when omitted
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Number of random clicks to simulate
    #[arg(long)]
    clicks: Option<u32>,

    /// Seed for click generation
    #[arg(long)]
    seed: Option<u64>,

    /// Clicks land in [-radius, radius] on each axis
    #[arg(long)]
    radius: Option<i32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut cfg = match &args.scene {
        Some(path) => load_scene_from_path(path)?,
        None => SceneConfig::default(),
    };
    if let Some(n) = args.clicks {
        cfg.clicks.count = n;
    }
    if let Some(seed) = args.seed {
        cfg.clicks.seed = seed;
    }
    if let Some(r) = args.radius {
        cfg.clicks.radius = r;
    }
    cfg.validate()?;

    let mut demo = Demo::new(&cfg);
    let result = demo.start().map(|()| demo.run(cfg.clicks.count));
    let voxels = demo.voxels().len();
    let (quads, verts, tris) = {
        let mesh = demo.mesh();
        (mesh.quad_count(), mesh.vertex_count(), mesh.triangle_count())
    };
    let live_bytes = demo.surface().live_bytes();
    demo.shutdown();
    let stats = result?;

    log::info!(
        "{} clicks ({} added, {} removed, {} unchanged), {} rebuilds, {} failed uploads",
        stats.clicks,
        stats.added,
        stats.removed,
        stats.unchanged,
        stats.rebuilds,
        stats.failed_uploads
    );
    log::info!(
        "final scene: {} voxels, {} quads, {} verts, {} tris, {} bytes live before shutdown",
        voxels,
        quads,
        verts,
        tris,
        live_bytes
    );
    log::info!(
        "surface: {} uploads, {} releases",
        demo.surface().uploads(),
        demo.surface().releases()
    );
    Ok(())
}
