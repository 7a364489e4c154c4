use slither::fastrand::Rng;
use slither::glam::Vec2;

/// Fake pointer orbiting a point, with jitter on every sample like a shaky hand.
pub struct Pointer {
    pub center: Vec2,
    pub radius: f32,
    pub angular_speed: f32,
    pub jitter: f32,

    angle: f32,
    rng: Rng,
}

impl Pointer {
    pub fn new(center: Vec2, radius: f32, seed: u64) -> Self {
        Self { center, radius, angular_speed: 0.015, jitter: 6.0, angle: 0.0, rng: Rng::with_seed(seed) }
    }

    pub fn sample(&mut self) -> Vec2 {
        self.angle += self.angular_speed;

        let noise = Vec2::new(self.rng.f32() - 0.5, self.rng.f32() - 0.5) * 2.0 * self.jitter;
        self.center + Vec2::new(self.angle.cos(), self.angle.sin()) * self.radius + noise
    }
}
