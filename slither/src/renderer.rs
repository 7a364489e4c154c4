use crate::segment::SegmentSnapshot;
use crate::utils::color::Vec4Color;
use glam::Vec2;
use glam::Vec4;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Skin {
    pub fill: Vec4,
    pub outline: Vec4,
}

impl Skin {
    pub fn new(fill: Vec4) -> Self {
        Self { fill, outline: Vec4::new_rgb(0, 0, 0, 255) }
    }
}

impl Default for Skin {
    fn default() -> Self {
        Self::new(Vec4::new_rgb(80, 160, 60, 255))
    }
}

/// Drawing backend. Receives only segments which passed the camera visibility test,
/// `paint` is already relative to the camera.
pub trait Renderer {
    fn draw_segment(&mut self, segment: &SegmentSnapshot, paint: Vec2, skin: &Skin);
}
