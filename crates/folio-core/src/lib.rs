pub mod camera;
pub mod constants;
pub mod field;
pub mod gate;
pub mod hold;
pub mod loader;
pub mod magnetic;
pub mod params;
pub mod pointer;
pub mod scramble;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use field::*;
pub use gate::*;
pub use hold::*;
pub use loader::*;
pub use magnetic::*;
pub use params::*;
pub use pointer::*;
pub use scramble::*;
