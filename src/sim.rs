use crate::color::Color;
use crate::config::GalaxyConfig;
use crate::framebuffer::Framebuffer;
use crate::grid::{build_warp_grid, GridSegment};
use crate::projection::project;
use crate::rng::RandomSource;
use crate::starfield::{generate, Star};
use nalgebra_glm::{vec3, Vec2};

const GRID_COLOR: Color = Color::new(65, 65, 75, 70);
const SPEED_STEP: f32 = 1.2;
const JITTER_SIGMA: f32 = 0.02;
const HALO_FALLOFF: f32 = 0.25;
const BLOOM_ALPHA: u8 = 12;

/// The whole animated scene: the star population, the static backdrop
/// grid and the user-adjustable rotation rate. Sole owner of all of it.
pub struct Galaxy {
    stars: Vec<Star>,
    grid: Vec<GridSegment>,
    rotation_multiplier: f32,
    time_step: f32,
}

impl Galaxy {
    pub fn new(cfg: &GalaxyConfig, rng: &mut dyn RandomSource) -> Self {
        Self {
            stars: generate(cfg, rng),
            grid: build_warp_grid(cfg),
            rotation_multiplier: 1.0,
            time_step: cfg.time_step,
        }
    }

    pub fn star_count(&self) -> usize { self.stars.len() }
    pub fn grid_segment_count(&self) -> usize { self.grid.len() }
    pub fn rotation_multiplier(&self) -> f32 { self.rotation_multiplier }

    /// Unbounded in both directions; repeated presses compound.
    pub fn speed_up(&mut self) {
        self.rotation_multiplier *= SPEED_STEP;
        log::debug!("rotation multiplier {}", self.rotation_multiplier);
    }

    pub fn slow_down(&mut self) {
        self.rotation_multiplier /= SPEED_STEP;
        log::debug!("rotation multiplier {}", self.rotation_multiplier);
    }

    /// Advance every orbit by one fixed time step. The gaussian jitter
    /// flickers the orbital rate; it is redrawn each frame, never stored.
    pub fn advance(&mut self, rng: &mut dyn RandomSource) {
        for s in &mut self.stars {
            s.angle += (s.speed + rng.normal() * JITTER_SIGMA) * self.time_step * self.rotation_multiplier;
        }
    }

    /// Backdrop grid first, then bloom so the glow sits beneath the
    /// sharp star points drawn last.
    pub fn draw(&self, fb: &mut Framebuffer) {
        let cx = fb.width as f32 / 2.0;
        let cy = fb.height as f32 / 2.0;

        for seg in &self.grid {
            let a = project(seg.a, cx, cy);
            let b = project(seg.b, cx, cy);
            fb.blend_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, GRID_COLOR);
        }

        for s in self.stars.iter().filter(|s| s.is_core) {
            let p = screen_pos(s, cx, cy);
            let glow = faded(s).with_alpha(BLOOM_ALPHA);
            let (x, y) = (p.x as i32, p.y as i32);
            fb.blend_point(x + 1, y, glow);
            fb.blend_point(x - 1, y, glow);
            fb.blend_point(x, y + 1, glow);
            fb.blend_point(x, y - 1, glow);
        }

        for s in &self.stars {
            let p = screen_pos(s, cx, cy);
            fb.blend_point(p.x as i32, p.y as i32, faded(s));
        }
    }
}

fn screen_pos(s: &Star, cx: f32, cy: f32) -> Vec2 {
    let (sin, cos) = s.angle.sin_cos();
    project(vec3(cos * s.radius, s.y, sin * s.radius), cx, cy)
}

/// Base color attenuated by height above the galactic plane; recomputed
/// every frame rather than cached.
fn faded(s: &Star) -> Color {
    s.color.scale_alpha((-s.y.abs() * HALO_FALLOFF).exp())
}
