//! Runtime configuration.
//!
//! Everything has a default that shows the lounge scene. Two settings can be
//! overridden from the environment:
//!
//! - `PARLOR_ASSET_DIR`: directory texture paths are resolved against
//! - `PARLOR_TEXTURE_UNITS`: texture units the registry may fill (1 to 16)

use std::path::PathBuf;

use crate::resources::texture::MAX_TEXTURE_UNITS;

pub const ASSET_DIR_VAR: &str = "PARLOR_ASSET_DIR";
pub const TEXTURE_UNITS_VAR: &str = "PARLOR_TEXTURE_UNITS";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 12.0, 28.0],
            target: [-2.0, 6.0, 0.0],
            fovy_degrees: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub asset_dir: PathBuf,
    pub texture_units: usize,
    pub window_title: String,
    pub window_size: (u32, u32),
    pub clear_colour: wgpu::Color,
    pub camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("./assets"),
            texture_units: MAX_TEXTURE_UNITS,
            window_title: String::from("parlor"),
            window_size: (1280, 720),
            clear_colour: wgpu::Color {
                r: 0.05,
                g: 0.05,
                b: 0.07,
                a: 1.0,
            },
            camera: CameraConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Defaults, overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(ASSET_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            config.asset_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(TEXTURE_UNITS_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(units) => {
                    let clamped = units.clamp(1, MAX_TEXTURE_UNITS);
                    if clamped != units {
                        log::warn!(
                            "{}={} is outside 1..={}, using {}",
                            TEXTURE_UNITS_VAR,
                            units,
                            MAX_TEXTURE_UNITS,
                            clamped
                        );
                    }
                    config.texture_units = clamped;
                }
                Err(e) => log::warn!(
                    "Ignoring {}={:?}: {}, using {}",
                    TEXTURE_UNITS_VAR,
                    raw,
                    e,
                    config.texture_units
                ),
            }
        }

        config
    }
}
