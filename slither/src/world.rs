use glam::Vec2;

/// Size of the playable area, origin in the left-top corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Keeps a circle of `radius` fully inside the world, stopping hard at the border.
    pub fn clamp(&self, position: Vec2, radius: f32) -> Vec2 {
        let mut position = position;

        if position.x < radius {
            position.x = radius;
        } else if position.x + radius > self.width {
            position.x = self.width - radius;
        }

        if position.y < radius {
            position.y = radius;
        } else if position.y + radius > self.height {
            position.y = self.height - radius;
        }

        position
    }

    pub fn get_center_position(&self) -> Vec2 {
        Vec2::new(self.width, self.height) / 2.0
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(3000.0, 3000.0)
    }
}

/// Viewport frame in world units: `position` is the world-space offset of the left-top corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub size: Vec2,
}

impl Camera {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn get_center_position(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    pub fn set_center_position(&mut self, position: Vec2) {
        self.position = position - self.size / 2.0;
    }

    pub fn from_world_to_paint_coordinates(&self, position: Vec2) -> Vec2 {
        position - self.position
    }

    pub fn is_visible(&self, position: Vec2, radius: f32) -> bool {
        let paint = self.from_world_to_paint_coordinates(position);

        paint.x + radius > 0.0 && paint.x - radius < self.size.x && paint.y + radius > 0.0 && paint.y - radius < self.size.y
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO)
    }
}
