use glam::Vec2;
use std::f32::consts;

pub trait F32MathUtils {
    fn normalize_angle(&self) -> f32;
    fn wrap_angle(&self) -> f32;
}

pub trait Vec2MathUtils {
    fn heading_angle(&self) -> f32;
}

impl F32MathUtils for f32 {
    /// Maps the angle into (-PI, PI].
    fn normalize_angle(&self) -> f32 {
        let angle = self.wrap_angle();

        if angle > consts::PI {
            angle - consts::TAU
        } else {
            angle
        }
    }

    /// Maps the angle into [0, TAU).
    fn wrap_angle(&self) -> f32 {
        let angle = self.rem_euclid(consts::TAU);

        // rem_euclid may round tiny negative inputs up to exactly TAU
        if angle >= consts::TAU {
            0.0
        } else {
            angle
        }
    }
}

impl Vec2MathUtils for Vec2 {
    /// Direction of the vector measured clockwise from -Y (screen up), in [0, TAU).
    fn heading_angle(&self) -> f32 {
        (self.y.atan2(self.x) + consts::FRAC_PI_2).wrap_angle()
    }
}
