use crate::color::Color;
use crate::config::GalaxyConfig;
use crate::rng::RandomSource;
use nalgebra_glm::{rotate_vec2, vec2};
use std::f32::consts::TAU;

const CORE_FRACTION: f32 = 0.22;
const BAR_ANGLE: f32 = 0.35;
const ARMS: u32 = 4;
const ARM_WINDING: f32 = 1.35;
const ARM_KICK_CHANCE: f32 = 0.08;
const DISK_INNER: f32 = 10.0;
const DISK_ALPHA: f32 = 165.0;

const CORE_INNER: Color = Color::new(255, 255, 245, 230);
const CORE_OUTER: Color = Color::new(255, 200, 160, 210);
const DISK_WARM: Color = Color::rgb(245, 240, 235);
const DISK_BLUE: Color = Color::rgb(205, 215, 255);
const DISK_VIOLET: Color = Color::rgb(150, 120, 190);
const DUST_PURPLE: Color = Color::rgb(140, 95, 190);

/// One particle. Only `angle` changes after creation; positions are
/// re-derived from `(radius, angle)` every frame.
pub struct Star {
    pub radius: f32,
    pub angle: f32,
    pub speed: f32,
    pub y: f32,
    pub color: Color,
    pub is_core: bool,
}

/// Populate the galaxy. Disk candidates that land in a dust lane are
/// dropped without replacement, so the emitted count is below
/// `cfg.star_count` and varies run to run.
pub fn generate(cfg: &GalaxyConfig, rng: &mut dyn RandomSource) -> Vec<Star> {
    let mut stars = Vec::with_capacity(cfg.star_count);
    for _ in 0..cfg.star_count {
        let star = if is_core_pick(rng.uniform()) {
            Some(core_star(cfg, rng))
        } else {
            disk_star(cfg, rng)
        };
        if let Some(s) = star {
            stars.push(s);
        }
    }
    log::info!("star field: {} of {} candidates emitted", stars.len(), cfg.star_count);
    stars
}

fn is_core_pick(r_pick: f32) -> bool { r_pick < CORE_FRACTION }

/// Differential rotation: inner stars lap the outer disk. The +0.6 keeps
/// the value finite as radius approaches zero.
pub fn orbital_speed(radius: f32) -> f32 { 3.5 / (radius.sqrt() + 0.6) }

/// Survival roll against the dust field. Even the thickest dust keeps a
/// 10% survival floor so lanes thin out instead of going black.
fn dust_survives(dust_strength: f32, u: f32) -> bool { u <= dust_strength * 0.9 + 0.1 }

fn core_star(cfg: &GalaxyConfig, rng: &mut dyn RandomSource) -> Star {
    // elongated gaussian blob turned into the bar orientation
    let x = rng.normal() * cfg.core_size * 1.8;
    let z = rng.normal() * cfg.core_size * 0.6;
    let y = rng.normal() * 2.0;
    let p = rotate_vec2(&vec2(x, z), BAR_ANGLE);

    let radius = p.magnitude();
    let angle = p.y.atan2(p.x);
    // blend factor extrapolates past the bulge edge on purpose
    let color = CORE_INNER.lerp(CORE_OUTER, radius / cfg.core_size);

    Star { radius, angle, speed: orbital_speed(radius), y, color, is_core: true }
}

fn disk_star(cfg: &GalaxyConfig, rng: &mut dyn RandomSource) -> Option<Star> {
    let radius = DISK_INNER + rng.uniform() * cfg.galaxy_size;

    let arm = (rng.uniform() * ARMS as f32) as u32 as f32 * (TAU / ARMS as f32);
    let spiral = arm + ARM_WINDING * radius.ln();

    let turbulence = (radius * 0.06 + spiral * 1.3).sin() * 0.15
        + rng.normal() * 0.12 * (radius / cfg.galaxy_size);
    let mut angle = spiral + turbulence;

    // occasional stray star scattered across the arm gaps
    if rng.uniform() < ARM_KICK_CHANCE {
        angle += rng.normal() * 0.9;
    }

    let phase_jitter = (radius * 0.03 + rng.normal() * 0.6).sin()
        + (angle * 2.3 + radius * 0.01).sin();
    let dust = (angle * 3.7 + radius * 0.04 + phase_jitter).sin();
    let dust_strength = ((dust + 1.0) * 0.5).clamp(0.0, 1.0);
    if !dust_survives(dust_strength, rng.uniform()) {
        return None;
    }

    // disk flares with radius, clamped to bound the halo
    let y = (rng.normal() * (1.2 + radius * 0.008)).clamp(-8.0, 8.0);

    let mut color = DISK_WARM.lerp(DISK_BLUE, rng.uniform() * 0.35);
    let dust_mix = (radius / cfg.galaxy_size).powf(1.2).clamp(0.0, 1.0);
    color = color.lerp(DISK_VIOLET, dust_mix * 0.75);
    color = color.lerp(DUST_PURPLE, (1.0 - dust_strength) * 0.6);
    color.r = color.r.min(200);
    color.g = color.g.min(190);
    color.a = (DISK_ALPHA * dust_strength) as u8;

    Some(Star { radius, angle, speed: orbital_speed(radius), y, color, is_core: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::EntropySource;

    fn small_cfg() -> GalaxyConfig {
        GalaxyConfig { star_count: 5_000, ..GalaxyConfig::default() }
    }

    #[test]
    fn core_routing_boundaries() {
        assert!(is_core_pick(0.1));
        assert!(!is_core_pick(0.5));
        assert!(is_core_pick(0.0));
        assert!(!is_core_pick(0.22));
    }

    #[test]
    fn core_fraction_is_exact_over_a_pick_sweep() {
        let n = 100_000;
        let cores = (0..n).filter(|&i| is_core_pick(i as f32 / n as f32)).count();
        assert_eq!(cores, 22_000);
    }

    #[test]
    fn dust_survival_boundaries() {
        // saturated dust always passes, clear gaps only pass the floor
        assert!(dust_survives(1.0, 0.0));
        assert!(dust_survives(1.0, 0.999));
        assert!(!dust_survives(0.0, 1.0));
        assert!(dust_survives(0.0, 0.1));
        assert!(!dust_survives(0.0, 0.1001));
    }

    #[test]
    fn speed_strictly_decreases_with_radius() {
        let mut prev = orbital_speed(0.5);
        for i in 1..200 {
            let s = orbital_speed(i as f32 * 1.5);
            assert!(s < prev, "speed not monotonic at radius {}", i as f32 * 1.5);
            prev = s;
        }
    }

    #[test]
    fn disk_stars_stay_in_annulus() {
        let cfg = small_cfg();
        let mut rng = EntropySource::with_seed(11);
        for s in generate(&cfg, &mut rng).iter().filter(|s| !s.is_core) {
            assert!(s.radius >= DISK_INNER);
            assert!(s.radius < cfg.galaxy_size + DISK_INNER);
            assert!(s.y.abs() <= 8.0);
        }
    }

    #[test]
    fn disk_palette_clamps_hold() {
        let cfg = small_cfg();
        let mut rng = EntropySource::with_seed(23);
        let stars = generate(&cfg, &mut rng);
        assert!(stars.iter().any(|s| !s.is_core));
        for s in stars.iter().filter(|s| !s.is_core) {
            assert!(s.color.r <= 200);
            assert!(s.color.g <= 190);
            assert!(s.color.a <= DISK_ALPHA as u8);
        }
    }

    #[test]
    fn core_stars_keep_their_flag_and_finite_orbits() {
        let cfg = small_cfg();
        let mut rng = EntropySource::with_seed(5);
        let stars = generate(&cfg, &mut rng);
        let cores = stars.iter().filter(|s| s.is_core).count();
        // 22% of 5000 candidates, all retained; generous statistical band
        assert!((900..1300).contains(&cores), "core count {cores}");
        for s in stars.iter().filter(|s| s.is_core) {
            assert!(s.radius >= 0.0 && s.radius.is_finite());
            assert!(s.speed > 0.0);
        }
    }

    #[test]
    fn scripted_core_star_at_origin_gets_inner_palette() {
        use crate::rng::ScriptedSource;
        // normals all zero puts the star dead center of the bar
        let mut rng = ScriptedSource::new(vec![0.0], vec![0.0]);
        let s = core_star(&GalaxyConfig::default(), &mut rng);
        assert_eq!(s.radius, 0.0);
        assert!(s.is_core);
        assert_eq!(s.color, CORE_INNER);
    }
}
