/// Fixed design constants of the scene. One instance is built at startup
/// and read everywhere; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct GalaxyConfig {
    /// Candidate particles; dust rejection makes the emitted count lower.
    pub star_count: usize,
    pub galaxy_size: f32,
    pub core_size: f32,
    pub time_step: f32,
    pub grid_lines: usize,
    pub grid_spacing: f32,
    pub grid_depth: f32,
    pub warp_strength: f32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            star_count: 88_000,
            galaxy_size: 220.0,
            core_size: 55.0,
            time_step: 0.008,
            grid_lines: 20,
            grid_spacing: 25.0,
            grid_depth: 90.0,
            warp_strength: 9000.0,
        }
    }
}
