use crate::space::CoordinateSpace;
use crate::transform::FrameTransforms;

/// Uniform block uploaded once per frame. Layout matches `Uniforms` in
/// `scene.wgsl`: three column-major matrices, the stage index, then padding
/// up to the 16-byte struct alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub active_space: u32,
    pub _pad: [u32; 3],
}

impl FrameUniforms {
    pub fn new(frame: &FrameTransforms, space: CoordinateSpace) -> Self {
        Self {
            model: frame.model.to_cols_array_2d(),
            view: frame.view.to_cols_array_2d(),
            projection: frame.projection.to_cols_array_2d(),
            active_space: space.index(),
            _pad: [0; 3],
        }
    }
}
