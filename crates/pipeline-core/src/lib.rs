pub mod constants;
pub mod error;
pub mod selector;
pub mod space;
pub mod transform;
pub mod uniforms;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use constants::*;
pub use error::*;
pub use selector::*;
pub use space::*;
pub use transform::*;
pub use uniforms::*;
