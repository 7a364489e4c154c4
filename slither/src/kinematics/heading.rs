use crate::utils::math::F32MathUtils;
use crate::utils::math::Vec2MathUtils;
use glam::Vec2;
use std::f32::consts;

/// Offset every settled heading is re-based onto, keeps the unwrapped value positive and bounded.
pub const BASE_ANGLE: f32 = consts::TAU * 100.0;

/// Unwrapped heading: full turns accumulate instead of wrapping at TAU, so easing
/// toward the target always takes the short way around the 0/TAU seam.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heading {
    current: f32,
    target: f32,
}

impl Heading {
    pub fn new(angle: f32) -> Self {
        let angle = BASE_ANGLE + angle.wrap_angle();
        Self { current: angle, target: angle }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Picks a new target facing along `velocity`, adding or removing a full turn
    /// when the direction swept across the seam.
    pub fn turn_to(&mut self, velocity: Vec2) {
        if velocity == Vec2::ZERO {
            return;
        }

        let angle = velocity.heading_angle();
        let (mut turns, previous) = self.decompose();

        if previous >= consts::PI * 1.5 && angle <= consts::FRAC_PI_2 {
            turns += 1.0;
        } else if previous <= consts::FRAC_PI_2 && angle >= consts::PI * 1.5 {
            turns -= 1.0;
        }

        self.target = angle + turns * consts::TAU;
    }

    /// Splits the target into whole turns and the angle within the last turn, both taken
    /// from the same product so they agree right at the seam.
    fn decompose(&self) -> (f32, f32) {
        let mut turns = (self.target / consts::TAU).floor();
        let mut angle = self.target - turns * consts::TAU;

        if angle < 0.0 {
            turns -= 1.0;
            angle += consts::TAU;
        } else if angle >= consts::TAU {
            turns += 1.0;
            angle -= consts::TAU;
        }

        (turns, angle)
    }

    /// Moves `easing` of the remaining distance toward the target. Once close enough both
    /// values are snapped together and re-based onto `BASE_ANGLE`.
    pub fn ease(&mut self, easing: f32, snap_threshold: f32) {
        let delta = self.target - self.current;
        if delta == 0.0 {
            return;
        }

        self.current += delta * easing;

        if delta.abs() <= snap_threshold {
            self.target = BASE_ANGLE + self.target.wrap_angle();
            self.current = self.target;
        }
    }
}
