use crate::kinematics::heading::BASE_ANGLE;
use crate::utils::math::F32MathUtils;
use glam::Vec2;
use std::f32::consts;

pub mod body;
pub mod head;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SegmentKind {
    Head { heading: f32 },
    Body,
}

/// Read-only view of a segment handed to renderers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentSnapshot {
    pub position: Vec2,
    pub radius: f32,
    pub kind: SegmentKind,
}

impl SegmentSnapshot {
    pub fn heading(&self) -> Option<f32> {
        match self.kind {
            SegmentKind::Head { heading } => Some(heading),
            SegmentKind::Body => None,
        }
    }

    pub fn rotation(&self) -> f32 {
        match self.kind {
            SegmentKind::Head { heading } => (heading - BASE_ANGLE - consts::FRAC_PI_2).normalize_angle(),
            SegmentKind::Body => 0.0,
        }
    }
}
