use super::SegmentKind;
use super::SegmentSnapshot;
use crate::error::ensure_finite;
use crate::error::KinematicsError;
use crate::kinematics::heading::Heading;
use crate::kinematics::Kinematics;
use crate::world::WorldBounds;
use glam::Vec2;
use instant::Instant;
use log::trace;
use std::collections::VecDeque;
use std::f32::consts;
use std::time::Duration;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteeringSettings {
    pub waypoint_spacing: f32,
    pub waypoint_capacity: usize,
    pub advance_interval: Duration,
    pub easing: f32,
    pub snap_threshold: f32,
}

impl Default for SteeringSettings {
    fn default() -> Self {
        Self {
            waypoint_spacing: 20.0,
            waypoint_capacity: 30,
            advance_interval: Duration::from_millis(30),
            easing: 0.2,
            snap_threshold: 0.01,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HeadSegment {
    pub kinematics: Kinematics,
    pub heading: Heading,
    pub settings: SteeringSettings,

    waypoints: VecDeque<Vec2>,
    last_advance: Option<Instant>,
}

impl HeadSegment {
    /// Creates a head facing +X which keeps drifting that way until the first waypoint is consumed.
    pub fn new(position: Vec2, radius: f32, speed: f32, settings: SteeringSettings) -> Self {
        let mut kinematics = Kinematics::new(position, radius, speed);
        kinematics.velocity = Vec2::new(speed, 0.0);

        Self { kinematics, heading: Heading::new(consts::FRAC_PI_2), settings, waypoints: VecDeque::new(), last_advance: None }
    }

    /// Queues the target, subdividing long jumps into evenly spaced waypoints and merging
    /// ones too close to the previous waypoint into it.
    pub fn move_to(&mut self, target: Vec2) -> Result<(), KinematicsError> {
        let target = ensure_finite(target)?;

        let anchor = match self.waypoints.back() {
            Some(anchor) => *anchor,
            None => {
                self.waypoints.push_back(target);
                return Ok(());
            }
        };

        let offset = target - anchor;
        let distance = offset.x.hypot(offset.y);
        let spacing = self.settings.waypoint_spacing;

        if spacing <= 0.0 || spacing.is_nan() {
            self.push_waypoint(target);
        } else if distance > spacing {
            let parts = (distance / spacing).floor() as u64;

            // Anything older than the last `capacity` parts would be dropped right away
            let first = parts.saturating_sub(self.capacity() as u64) + 1;
            for i in first..=parts {
                self.push_waypoint(anchor + offset * i as f32 / parts as f32);
            }
        } else if let Some(last) = self.waypoints.back_mut() {
            *last = target;
        }

        Ok(())
    }

    pub fn update(&mut self, now: Instant, bounds: &WorldBounds) -> Result<(), KinematicsError> {
        let ready = match self.last_advance {
            Some(last_advance) => now - last_advance >= self.settings.advance_interval,
            None => true,
        };

        if ready {
            if let Some(waypoint) = self.waypoints.pop_front() {
                self.kinematics.move_to(waypoint)?;
                self.heading.turn_to(self.kinematics.velocity);
                self.last_advance = Some(now);

                trace!("Head advanced to waypoint {}, {} left", waypoint, self.waypoints.len());
            }
        }

        self.heading.ease(self.settings.easing, self.settings.snap_threshold);
        self.kinematics.step();
        self.kinematics.position = bounds.clamp(self.kinematics.position, self.kinematics.radius);

        Ok(())
    }

    pub fn position(&self) -> Vec2 {
        self.kinematics.position
    }

    pub fn waypoints(&self) -> impl Iterator<Item = &Vec2> {
        self.waypoints.iter()
    }

    pub fn snapshot(&self) -> SegmentSnapshot {
        SegmentSnapshot {
            position: self.kinematics.position,
            radius: self.kinematics.radius,
            kind: SegmentKind::Head { heading: self.heading.current() },
        }
    }

    fn capacity(&self) -> usize {
        self.settings.waypoint_capacity.max(1)
    }

    fn push_waypoint(&mut self, waypoint: Vec2) {
        while self.waypoints.len() >= self.capacity() {
            if let Some(dropped) = self.waypoints.pop_front() {
                trace!("Head waypoint queue full, dropping {}", dropped);
            }
        }

        self.waypoints.push_back(waypoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::math::F32MathUtils;

    fn head_at(position: Vec2) -> HeadSegment {
        HeadSegment::new(position, 10.0, 2.0, SteeringSettings::default())
    }

    #[test]
    fn test_first_target_is_queued_as_is() {
        let mut head = head_at(Vec2::ZERO);
        head.move_to(Vec2::new(123.0, 45.0)).unwrap();

        assert_eq!(head.waypoints().copied().collect::<Vec<_>>(), vec![Vec2::new(123.0, 45.0)]);
    }

    #[test]
    fn test_distant_target_is_subdivided() {
        let mut head = head_at(Vec2::ZERO);
        head.move_to(Vec2::new(0.0, 0.0)).unwrap();
        head.move_to(Vec2::new(100.0, 0.0)).unwrap();

        let xs = head.waypoints().skip(1).map(|p| p.x).collect::<Vec<_>>();
        assert_eq!(xs, vec![20.0, 40.0, 60.0, 80.0, 100.0]);
        assert!(head.waypoints().all(|p| p.y == 0.0));
    }

    #[test]
    fn test_uneven_distance_spreads_parts_evenly() {
        let mut head = head_at(Vec2::ZERO);
        head.move_to(Vec2::new(0.0, 0.0)).unwrap();
        head.move_to(Vec2::new(0.0, 50.0)).unwrap();

        let ys = head.waypoints().skip(1).map(|p| p.y).collect::<Vec<_>>();
        assert_eq!(ys, vec![25.0, 50.0]);
    }

    #[test]
    fn test_close_target_replaces_last_waypoint() {
        let mut head = head_at(Vec2::ZERO);
        head.move_to(Vec2::new(0.0, 0.0)).unwrap();
        head.move_to(Vec2::new(40.0, 0.0)).unwrap();
        head.move_to(Vec2::new(45.0, 5.0)).unwrap();

        assert_eq!(
            head.waypoints().copied().collect::<Vec<_>>(),
            vec![Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0), Vec2::new(45.0, 5.0)]
        );
    }

    #[test]
    fn test_queue_keeps_most_recent_waypoints() {
        let mut head = head_at(Vec2::ZERO);
        head.move_to(Vec2::new(0.0, 0.0)).unwrap();
        head.move_to(Vec2::new(700.0, 0.0)).unwrap();

        let expected = (6..=35).map(|i| i as f32 * 20.0).collect::<Vec<_>>();
        let xs = head.waypoints().map(|p| p.x).collect::<Vec<_>>();

        assert_eq!(xs.len(), 30);
        assert_eq!(xs, expected);
    }

    #[test]
    fn test_huge_jump_only_builds_kept_waypoints() {
        let mut head = head_at(Vec2::ZERO);
        head.move_to(Vec2::new(0.0, 0.0)).unwrap();
        head.move_to(Vec2::new(2.0e9, 0.0)).unwrap();

        let xs = head.waypoints().map(|p| p.x).collect::<Vec<_>>();

        assert_eq!(xs.len(), 30);
        assert!(xs.windows(2).all(|p| p[0] <= p[1]));
        assert!((xs[29] - 2.0e9).abs() / 2.0e9 < 1e-5);
        assert!(xs[0] > 1.9e9);
    }

    #[test]
    fn test_huge_jump_keeps_small_queue_order() {
        let settings = SteeringSettings { waypoint_capacity: 3, ..Default::default() };
        let mut head = HeadSegment::new(Vec2::ZERO, 10.0, 2.0, settings);
        head.move_to(Vec2::new(0.0, 0.0)).unwrap();
        head.move_to(Vec2::new(100.0, 0.0)).unwrap();

        let xs = head.waypoints().map(|p| p.x).collect::<Vec<_>>();
        assert_eq!(xs, vec![60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_non_positive_spacing_queues_targets_as_is() {
        for spacing in [0.0, -5.0] {
            let settings = SteeringSettings { waypoint_spacing: spacing, ..Default::default() };
            let mut head = HeadSegment::new(Vec2::ZERO, 10.0, 2.0, settings);
            head.move_to(Vec2::new(0.0, 0.0)).unwrap();
            head.move_to(Vec2::new(1.0e12, 0.0)).unwrap();
            head.move_to(Vec2::new(3.0, 4.0)).unwrap();

            assert_eq!(
                head.waypoints().copied().collect::<Vec<_>>(),
                vec![Vec2::new(0.0, 0.0), Vec2::new(1.0e12, 0.0), Vec2::new(3.0, 4.0)]
            );
        }
    }

    #[test]
    fn test_invalid_target_is_rejected() {
        let mut head = head_at(Vec2::ZERO);
        head.move_to(Vec2::new(0.0, 0.0)).unwrap();
        head.move_to(Vec2::new(60.0, 0.0)).unwrap();
        let waypoints = head.waypoints().copied().collect::<Vec<_>>();
        let kinematics = head.kinematics.clone();

        assert!(matches!(head.move_to(Vec2::new(f32::NAN, 5.0)), Err(KinematicsError::InvalidInput { .. })));
        assert!(matches!(head.move_to(Vec2::new(5.0, f32::INFINITY)), Err(KinematicsError::InvalidInput { .. })));

        assert_eq!(head.waypoints().copied().collect::<Vec<_>>(), waypoints);
        assert_eq!(head.kinematics, kinematics);
    }

    #[test]
    fn test_waypoints_are_consumed_at_most_once_per_interval() {
        let bounds = WorldBounds::new(1000.0, 1000.0);
        let mut head = head_at(Vec2::new(500.0, 500.0));
        head.move_to(Vec2::new(500.0, 400.0)).unwrap();
        head.move_to(Vec2::new(500.0, 300.0)).unwrap();
        assert_eq!(head.waypoints().count(), 6);

        let start = Instant::now();
        head.update(start, &bounds).unwrap();
        assert_eq!(head.waypoints().count(), 5);

        head.update(start + Duration::from_millis(10), &bounds).unwrap();
        head.update(start + Duration::from_millis(29), &bounds).unwrap();
        assert_eq!(head.waypoints().count(), 5);

        head.update(start + Duration::from_millis(30), &bounds).unwrap();
        assert_eq!(head.waypoints().count(), 4);
    }

    #[test]
    fn test_head_keeps_drifting_without_waypoints() {
        let bounds = WorldBounds::new(1000.0, 1000.0);
        let mut head = head_at(Vec2::new(100.0, 100.0));

        head.update(Instant::now(), &bounds).unwrap();
        head.update(Instant::now(), &bounds).unwrap();

        assert_eq!(head.position(), Vec2::new(104.0, 100.0));
    }

    #[test]
    fn test_head_settles_in_corner() {
        let bounds = WorldBounds::new(500.0, 500.0);
        let mut head = head_at(Vec2::new(250.0, 250.0));
        head.move_to(Vec2::new(-1000.0, -1000.0)).unwrap();

        let start = Instant::now();
        for frame in 0..400u64 {
            head.update(start + Duration::from_millis(frame * 16), &bounds).unwrap();
        }

        assert_eq!(head.position(), Vec2::new(10.0, 10.0));

        for frame in 400..420u64 {
            head.update(start + Duration::from_millis(frame * 16), &bounds).unwrap();
            assert_eq!(head.position(), Vec2::new(10.0, 10.0));
        }
    }

    #[test]
    fn test_heading_follows_smooth_circle() {
        let bounds = WorldBounds::new(2000.0, 2000.0);
        let center = Vec2::new(1000.0, 1000.0);
        let mut head = head_at(center + Vec2::new(150.0, 0.0));

        let start = Instant::now();
        let mut previous = head.heading.current();

        // Two full clockwise laps cross the 0/TAU seam twice
        for frame in 0..1200u64 {
            let angle = frame as f32 * 0.02;
            head.move_to(center + Vec2::new(angle.cos(), angle.sin()) * 150.0).unwrap();
            head.update(start + Duration::from_millis(frame * 16), &bounds).unwrap();

            let current = head.heading.current();
            let step = (current - previous).normalize_angle();
            assert!(step.abs() <= 0.2 * consts::PI + 1e-3, "frame {} step {}", frame, step);

            previous = current;
        }
    }

    #[test]
    fn test_snapshot_exposes_heading() {
        let head = head_at(Vec2::new(5.0, 6.0));
        let snapshot = head.snapshot();

        assert_eq!(snapshot.heading(), Some(head.heading.current()));
        assert_eq!(snapshot.position, Vec2::new(5.0, 6.0));
        assert!(snapshot.rotation().abs() < 1e-3);
    }
}
