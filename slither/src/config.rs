use crate::creature::CreatureOptions;
use crate::creature::DEFAULT_SPEED;
use crate::error_return;
use crate::renderer::Skin;
use crate::segment::head::SteeringSettings;
use crate::utils::json::*;
use crate::world::Camera;
use crate::world::WorldBounds;
use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::str;
use std::time::Duration;
use tinyjson::JsonValue;

#[derive(Debug, Default)]
pub struct ConfigLoader {
    pub path: String,
    pub data: ConfigData,
}

#[derive(Clone, Debug)]
pub struct ConfigData {
    pub world: WorldBounds,
    pub camera_size: Vec2,
    pub creature: CreatureOptions,
}

impl ConfigLoader {
    pub fn new(path: &str) -> Self {
        let mut config = Self { path: path.to_string(), ..Default::default() };

        config.reload();
        config
    }

    /// Reads the file again, on any failure the error is logged and defaults are kept.
    pub fn reload(&mut self) {
        self.data = Default::default();

        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) => error_return!("Failed to open configuration file {} ({})", self.path, err),
        };

        let mut buffer = Vec::new();
        if let Err(err) = file.read_to_end(&mut buffer) {
            error_return!("Failed to read configuration file ({})", err);
        }

        let content = match str::from_utf8(&buffer) {
            Ok(content) => content,
            Err(err) => error_return!("Failed to parse configuration content ({})", err),
        };

        match ConfigData::parse_str(content) {
            Ok(data) => self.data = data,
            Err(err) => error_return!("Failed to parse configuration ({})", err),
        }
    }
}

impl ConfigData {
    pub fn parse_str(content: &str) -> Result<Self> {
        let json = content.parse::<JsonValue>().map_err(|err| anyhow!("Failed to parse JSON ({})", err))?;
        let data = json.get::<HashMap<_, _>>().ok_or_else(|| anyhow!("Configuration root is not an object"))?;

        Self::parse(data)
    }

    fn parse(data: &HashMap<String, JsonValue>) -> Result<Self> {
        let world = WorldBounds::new(read_positive(data, "world_width")?, read_positive(data, "world_height")?);
        let camera_size = Vec2::new(read_positive(data, "camera_width")?, read_positive(data, "camera_height")?);

        let mut steering = SteeringSettings::default();
        if let Some(spacing) = read_value_nullable::<f64>(data, "waypoint_spacing")? {
            steering.waypoint_spacing = ensure_positive(spacing, "waypoint_spacing")?;
        }
        if let Some(capacity) = read_value_nullable::<f64>(data, "waypoint_capacity")? {
            steering.waypoint_capacity = ensure_count(capacity, "waypoint_capacity")?;
            if steering.waypoint_capacity == 0 {
                bail!("waypoint_capacity must be at least 1");
            }
        }
        if let Some(interval) = read_value_nullable::<f64>(data, "advance_interval_ms")? {
            steering.advance_interval = Duration::from_millis(ensure_count(interval, "advance_interval_ms")? as u64);
        }

        let speed = match read_value_nullable::<f64>(data, "speed")? {
            Some(speed) => ensure_positive(speed, "speed")?,
            None => DEFAULT_SPEED,
        };

        let creature = CreatureOptions {
            position: read_position(data, "position")?,
            radius: read_positive(data, "radius")?,
            speed,
            length: ensure_count(read_value::<f64>(data, "length")?, "length")?,
            skin: Skin::new(read_color(data, "color")?),
            steering,
        };

        Ok(Self { world, camera_size, creature })
    }

    pub fn camera(&self) -> Camera {
        let mut camera = Camera::new(Vec2::ZERO, self.camera_size);
        camera.set_center_position(self.creature.position);

        camera
    }
}

fn read_positive(data: &HashMap<String, JsonValue>, name: &str) -> Result<f32> {
    ensure_positive(read_value::<f64>(data, name)?, name)
}

fn ensure_positive(value: f64, name: &str) -> Result<f32> {
    if !value.is_finite() || value <= 0.0 {
        bail!("{} must be a positive number, got {}", name, value);
    }

    Ok(value as f32)
}

fn ensure_count(value: f64, name: &str) -> Result<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        bail!("{} must be a non-negative integer, got {}", name, value);
    }

    Ok(value as usize)
}

impl Default for ConfigData {
    fn default() -> Self {
        Self { world: Default::default(), camera_size: Vec2::new(800.0, 600.0), creature: Default::default() }
    }
}
