use crate::config::GalaxyConfig;
use nalgebra_glm::{vec3, Vec3};

/// One unit segment of the background reference grid. Built once,
/// never mutated.
pub struct GridSegment {
    pub a: Vec3,
    pub b: Vec3,
}

/// Vertical displacement of the reference plane: a well that is deepest
/// over the origin and levels off toward the rim.
fn warp(cfg: &GalaxyConfig, x: f32, z: f32) -> f32 {
    let d = (x * x + z * z).sqrt();
    cfg.grid_depth + cfg.warp_strength / (d + 45.0)
}

/// Weave the grid in both axis directions: every step along a line emits
/// the segment on that line plus the perpendicular one at the mirrored
/// coordinates.
pub fn build_warp_grid(cfg: &GalaxyConfig) -> Vec<GridSegment> {
    let ext = cfg.grid_lines as f32 * cfg.grid_spacing * 0.5;
    let steps = (2.0 * ext / cfg.grid_spacing).ceil() as usize;
    let mut grid = Vec::with_capacity(2 * (cfg.grid_lines + 1) * steps);

    for i in 0..=cfg.grid_lines {
        let f = -ext + i as f32 * cfg.grid_spacing;
        for j in 0..steps {
            let k = -ext + j as f32 * cfg.grid_spacing;
            let k1 = k + cfg.grid_spacing;
            grid.push(GridSegment {
                a: vec3(k, warp(cfg, k, f), f),
                b: vec3(k1, warp(cfg, k1, f), f),
            });
            grid.push(GridSegment {
                a: vec3(f, warp(cfg, f, k), k),
                b: vec3(f, warp(cfg, f, k1), k1),
            });
        }
    }
    grid
}
