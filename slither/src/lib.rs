pub mod config;
pub mod creature;
pub mod error;
pub mod kinematics;
pub mod renderer;
pub mod segment;
pub mod utils;
pub mod world;

pub use anyhow;
pub use fastrand;
pub use glam;
pub use instant;
pub use log;

#[macro_export]
macro_rules! error_return {
    ($($arg:tt)+) => { { log::error!($($arg)+); return; } };
}
