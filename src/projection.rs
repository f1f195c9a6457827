use nalgebra_glm::{vec2, Vec2, Vec3};

/// Oblique view of the galactic plane. 0.866 is cos(30 degrees); the
/// constants fix the viewing angle and must not drift.
pub fn project(p: Vec3, cx: f32, cy: f32) -> Vec2 {
    vec2((p.x - p.z) * 0.866 + cx, p.y + (p.x + p.z) * 0.5 + cy)
}
