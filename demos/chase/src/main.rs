pub mod core;
pub mod pointer;

use crate::core::Core;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let frames = std::env::args().nth(2).and_then(|p| p.parse().ok()).unwrap_or(600);

    Core::new(&path).run(frames);
}
