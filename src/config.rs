use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use blockface_geom::VoxelCoord;
use blockface_render::DEFAULT_MAX_VERTICES_PER_PART;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scene config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scene config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid scene config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SceneConfig {
    #[serde(default = "default_voxels")]
    pub voxels: Vec<[i32; 3]>,
    #[serde(default)]
    pub clicks: Clicks,
    #[serde(default)]
    pub surface: Surface,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            voxels: default_voxels(),
            clicks: Clicks::default(),
            surface: Surface::default(),
        }
    }
}

fn default_voxels() -> Vec<[i32; 3]> {
    vec![[0, 0, 0], [1, 0, 0], [0, 1, 0]]
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Clicks {
    #[serde(default = "default_click_count")]
    pub count: u32,
    #[serde(default = "default_click_seed")]
    pub seed: u64,
    /// Clicked cells fall in `[-radius, radius]` on every axis.
    #[serde(default = "default_click_radius")]
    pub radius: i32,
    #[serde(default = "default_add_probability")]
    pub add_probability: f64,
}
fn default_click_count() -> u32 {
    16
}
fn default_click_seed() -> u64 {
    1337
}
fn default_click_radius() -> i32 {
    2
}
fn default_add_probability() -> f64 {
    0.5
}
impl Default for Clicks {
    fn default() -> Self {
        Self {
            count: default_click_count(),
            seed: default_click_seed(),
            radius: default_click_radius(),
            add_probability: default_add_probability(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Surface {
    #[serde(default = "default_max_vertices_per_part")]
    pub max_vertices_per_part: usize,
    #[serde(default)]
    pub byte_budget: Option<usize>,
}
fn default_max_vertices_per_part() -> usize {
    DEFAULT_MAX_VERTICES_PER_PART
}
impl Default for Surface {
    fn default() -> Self {
        Self {
            max_vertices_per_part: default_max_vertices_per_part(),
            byte_budget: None,
        }
    }
}

impl SceneConfig {
    pub fn from_toml_str(s: &str, origin: &Path) -> Result<Self, ConfigError> {
        let cfg: SceneConfig = toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clicks.radius < 0 {
            return Err(ConfigError::Invalid(format!(
                "clicks.radius must be >= 0, got {}",
                self.clicks.radius
            )));
        }
        let p = self.clicks.add_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid(format!(
                "clicks.add_probability must be within [0, 1], got {p}"
            )));
        }
        if self.surface.max_vertices_per_part < 4 {
            return Err(ConfigError::Invalid(format!(
                "surface.max_vertices_per_part must hold one quad, got {}",
                self.surface.max_vertices_per_part
            )));
        }
        Ok(())
    }

    pub fn seed_cells(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.voxels.iter().copied().map(VoxelCoord::from)
    }
}

pub fn load_scene_from_path(path: &Path) -> Result<SceneConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    SceneConfig::from_toml_str(&s, path)
}
