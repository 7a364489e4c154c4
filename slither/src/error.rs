use glam::Vec2;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error)]
pub enum KinematicsError {
    #[error("target ({x}, {y}) is not a finite point")]
    InvalidInput { x: f32, y: f32 },
}

/// Rejects targets with a NaN or infinite coordinate before any state is touched.
pub fn ensure_finite(target: Vec2) -> Result<Vec2, KinematicsError> {
    if target.is_finite() {
        Ok(target)
    } else {
        Err(KinematicsError::InvalidInput { x: target.x, y: target.y })
    }
}
