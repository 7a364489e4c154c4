use super::SegmentKind;
use super::SegmentSnapshot;
use crate::error::ensure_finite;
use crate::error::KinematicsError;
use crate::kinematics::Kinematics;
use glam::Vec2;
use std::collections::VecDeque;

/// Trailing segment. Walks its leader's path point by point and only takes the next
/// waypoint after landing exactly on the current one.
#[derive(Clone, Debug)]
pub struct BodySegment {
    pub kinematics: Kinematics,
    waypoints: VecDeque<Vec2>,
}

impl BodySegment {
    pub fn new(position: Vec2, radius: f32, speed: f32) -> Self {
        Self { kinematics: Kinematics::new(position, radius, speed), waypoints: VecDeque::new() }
    }

    pub fn move_to(&mut self, target: Vec2) -> Result<(), KinematicsError> {
        self.waypoints.push_back(ensure_finite(target)?);

        if self.kinematics.has_arrived() {
            if let Some(next) = self.waypoints.pop_front() {
                self.kinematics.move_to(next)?;
            }
        }

        Ok(())
    }

    pub fn update(&mut self) {
        self.kinematics.step();
        self.kinematics.clamp_arrival();
    }

    pub fn position(&self) -> Vec2 {
        self.kinematics.position
    }

    pub fn waypoints(&self) -> impl Iterator<Item = &Vec2> {
        self.waypoints.iter()
    }

    pub fn snapshot(&self) -> SegmentSnapshot {
        SegmentSnapshot { position: self.kinematics.position, radius: self.kinematics.radius, kind: SegmentKind::Body }
    }
}
