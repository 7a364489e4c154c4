use crate::pointer::Pointer;
use log::info;
use log::Level;
use slither::anyhow::Result;
use slither::config::ConfigLoader;
use slither::creature::Creature;
use slither::error_return;
use slither::glam::Vec2;
use slither::instant::Instant;
use slither::renderer::Renderer;
use slither::renderer::Skin;
use slither::segment::SegmentSnapshot;
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

pub struct Core {
    pub config: ConfigLoader,
}

#[derive(Default)]
pub struct StatsRenderer {
    pub segments: usize,
    pub heads: usize,
}

impl Renderer for StatsRenderer {
    fn draw_segment(&mut self, segment: &SegmentSnapshot, _paint: Vec2, _skin: &Skin) {
        self.segments += 1;
        if segment.heading().is_some() {
            self.heads += 1;
        }
    }
}

impl Core {
    pub fn new(path: &str) -> Self {
        if let Err(err) = Self::init_logger() {
            println!("Failed to initialize logger ({})", err);
        }

        Self { config: ConfigLoader::new(path) }
    }

    /// Simulates `frames` frames at a fixed 60 Hz step on a synthetic clock.
    pub fn run(&mut self, frames: u64) {
        let data = &self.config.data;
        let mut creature = Creature::new(data.creature.clone());
        let mut camera = data.camera();
        let mut pointer = Pointer::new(data.world.get_center_position(), data.world.width.min(data.world.height) / 4.0, 42);
        let mut renderer = StatsRenderer::default();

        info!("Simulating {} frames with a creature of {} segments", frames, creature.len());

        let start = Instant::now();
        for frame in 0..frames {
            let now = start + FRAME_INTERVAL * frame as u32;

            if let Err(err) = creature.move_to(pointer.sample()) {
                error_return!("Pointer produced an invalid target ({})", err);
            }

            if let Err(err) = creature.update(now, &data.world) {
                error_return!("Frame {} failed ({})", frame, err);
            }

            camera.set_center_position(creature.position());
            creature.render(&camera, &mut renderer);

            if frame % 60 == 59 {
                let head = creature.head();
                info!(
                    "Frame {}: head at {:.1}, rotation {:.2}, {} waypoints queued, {} segments drawn",
                    frame + 1,
                    head.position(),
                    head.snapshot().rotation(),
                    head.waypoints().count(),
                    renderer.segments
                );
            }
        }

        info!("Done, {} segments drawn ({} heads)", renderer.segments, renderer.heads);
    }

    fn init_logger() -> Result<()> {
        #[cfg(debug_assertions)]
        simple_logger::init_with_level(Level::Debug)?;

        #[cfg(not(debug_assertions))]
        simple_logger::init_with_level(Level::Info)?;

        Ok(())
    }
}
