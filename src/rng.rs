use std::f32::consts::TAU;

/// Source of randomness shared by generation and the frame loop.
/// Injectable so tests can script exact draw sequences.
pub trait RandomSource {
    /// Uniform draw in [0, 1).
    fn uniform(&mut self) -> f32;
    /// Standard normal draw (mean 0, sigma 1).
    fn normal(&mut self) -> f32;
}

/// Seeded wyrand-backed source; normals come from Box-Muller with the
/// second variate cached between calls.
pub struct EntropySource {
    rng: fastrand::Rng,
    spare: Option<f32>,
}

impl EntropySource {
    pub fn with_seed(seed: u64) -> Self { Self { rng: fastrand::Rng::with_seed(seed), spare: None } }
}

impl RandomSource for EntropySource {
    fn uniform(&mut self) -> f32 { self.rng.f32() }

    fn normal(&mut self) -> f32 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        // 1 - f32() keeps the log argument inside (0, 1]
        let r = (-2.0 * (1.0 - self.rng.f32()).ln()).sqrt();
        let (s, c) = (TAU * self.rng.f32()).sin_cos();
        self.spare = Some(r * s);
        r * c
    }
}

/// Replays fixed uniform/normal sequences, cycling when exhausted.
#[cfg(test)]
pub struct ScriptedSource {
    uniforms: Vec<f32>,
    normals: Vec<f32>,
    ui: usize,
    ni: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(uniforms: Vec<f32>, normals: Vec<f32>) -> Self {
        assert!(!uniforms.is_empty() && !normals.is_empty());
        Self { uniforms, normals, ui: 0, ni: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f32 {
        let v = self.uniforms[self.ui % self.uniforms.len()];
        self.ui += 1;
        v
    }

    fn normal(&mut self) -> f32 {
        let v = self.normals[self.ni % self.normals.len()];
        self.ni += 1;
        v
    }
}
