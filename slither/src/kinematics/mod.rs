use crate::error::ensure_finite;
use crate::error::KinematicsError;
use glam::Vec2;

pub mod heading;

/// Position, radius and velocity shared by every segment kind. Waypoint handling lives in the segment owning it.
#[derive(Clone, Debug, PartialEq)]
pub struct Kinematics {
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub velocity: Vec2,
    pub target: Vec2,
}

impl Kinematics {
    pub fn new(position: Vec2, radius: f32, speed: f32) -> Self {
        Self { position, radius, speed, velocity: Vec2::ZERO, target: position }
    }

    /// Aims at `target` and recomputes the velocity so that it has magnitude `speed`,
    /// or zero when the target is the current position.
    pub fn move_to(&mut self, target: Vec2) -> Result<(), KinematicsError> {
        let target = ensure_finite(target)?;
        let offset = target - self.position;
        let distance = offset.x.hypot(offset.y);

        self.target = target;
        self.velocity = if distance == 0.0 { Vec2::ZERO } else { offset * (self.speed / distance) };

        Ok(())
    }

    pub fn step(&mut self) {
        self.position += self.velocity;
    }

    /// Snaps each axis onto the target once it is within one step of it.
    pub fn clamp_arrival(&mut self) {
        if (self.target.x - self.position.x).abs() <= self.speed {
            self.position.x = self.target.x;
        }

        if (self.target.y - self.position.y).abs() <= self.speed {
            self.position.y = self.target.y;
        }
    }

    pub fn has_arrived(&self) -> bool {
        self.position == self.target
    }
}
