use crate::error::KinematicsError;
use crate::renderer::Renderer;
use crate::renderer::Skin;
use crate::segment::body::BodySegment;
use crate::segment::head::HeadSegment;
use crate::segment::head::SteeringSettings;
use crate::segment::SegmentSnapshot;
use crate::world::Camera;
use crate::world::WorldBounds;
use glam::Vec2;
use instant::Instant;
use log::debug;
use log::error;
use log::warn;

pub const DEFAULT_SPEED: f32 = 1.8;
pub const SEGMENT_SPACING: f32 = 0.6;
pub const SEGMENT_SHRINK: f32 = 0.2;
pub const MIN_SEGMENT_RADIUS: f32 = 1.0;

#[derive(Clone, Debug)]
pub struct CreatureOptions {
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub length: usize,
    pub skin: Skin,
    pub steering: SteeringSettings,
}

impl Default for CreatureOptions {
    fn default() -> Self {
        Self {
            position: Vec2::new(400.0, 300.0),
            radius: 15.0,
            speed: DEFAULT_SPEED,
            length: 40,
            skin: Default::default(),
            steering: Default::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Creature {
    pub speed: f32,
    pub skin: Skin,

    head: HeadSegment,
    segments: Vec<BodySegment>,
}

impl Creature {
    /// Builds the head at `options.position` and lays the body out behind it along -X,
    /// every segment a bit smaller than the previous one.
    pub fn new(options: CreatureOptions) -> Self {
        let head = HeadSegment::new(options.position, options.radius, options.speed, options.steering);
        let spacing = options.radius * SEGMENT_SPACING;
        let mut clamped = false;

        let segments = (1..=options.length)
            .map(|i| {
                let mut radius = options.radius - i as f32 * SEGMENT_SHRINK;
                if radius < MIN_SEGMENT_RADIUS {
                    radius = MIN_SEGMENT_RADIUS;
                    clamped = true;
                }

                let position = options.position - Vec2::new(i as f32 * spacing, 0.0);
                BodySegment::new(position, radius, options.speed)
            })
            .collect::<Vec<_>>();

        if clamped {
            warn!("Creature of length {} too long for radius {}, tail radius clamped to {}", options.length, options.radius, MIN_SEGMENT_RADIUS);
        }

        debug!("Creature created at {} with {} segments", options.position, segments.len());

        Self { speed: options.speed, skin: options.skin, head, segments }
    }

    pub fn move_to(&mut self, target: Vec2) -> Result<(), KinematicsError> {
        self.head.move_to(target).map_err(|err| {
            error!("Rejected creature target ({})", err);
            err
        })
    }

    /// Runs one frame. Segments go from the tail toward the head so each one reads
    /// its leader's position from the previous frame; the head moves last.
    pub fn update(&mut self, now: Instant, bounds: &WorldBounds) -> Result<(), KinematicsError> {
        for i in (0..self.segments.len()).rev() {
            let leader = match i {
                0 => self.head.position(),
                _ => self.segments[i - 1].position(),
            };

            let segment = &mut self.segments[i];
            segment.move_to(leader)?;
            segment.update();
        }

        self.head.update(now, bounds)
    }

    /// Hands every visible segment to the renderer, tail first so the head ends up on top.
    /// Returns the number of segments drawn.
    pub fn render<R>(&self, camera: &Camera, renderer: &mut R) -> usize
    where
        R: Renderer,
    {
        let mut drawn = 0;

        for snapshot in self.snapshots() {
            if !camera.is_visible(snapshot.position, snapshot.radius) {
                continue;
            }

            renderer.draw_segment(&snapshot, camera.from_world_to_paint_coordinates(snapshot.position), &self.skin);
            drawn += 1;
        }

        drawn
    }

    /// Segment views in draw order: tail first, head last.
    pub fn snapshots(&self) -> impl Iterator<Item = SegmentSnapshot> + '_ {
        self.segments.iter().rev().map(|p| p.snapshot()).chain(std::iter::once(self.head.snapshot()))
    }

    pub fn position(&self) -> Vec2 {
        self.head.position()
    }

    pub fn head(&self) -> &HeadSegment {
        &self.head
    }

    pub fn segments(&self) -> &[BodySegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
