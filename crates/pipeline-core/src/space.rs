//! The four coordinate spaces the visualizer can highlight, and the
//! per-stage position/color contract the scene shader implements.

use crate::transform::FrameTransforms;
use glam::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CoordinateSpace {
    #[default]
    Model,
    World,
    View,
    Clip,
}

/// Display color per stage, indexed by [`CoordinateSpace::index`].
pub const STAGE_COLORS: [[f32; 3]; 4] = [
    [1.0, 0.0, 0.0], // red: model
    [0.0, 1.0, 0.0], // green: world
    [0.0, 0.0, 1.0], // blue: view
    [1.0, 1.0, 0.0], // yellow: clip
];

impl CoordinateSpace {
    pub const ALL: [CoordinateSpace; 4] = [Self::Model, Self::World, Self::View, Self::Clip];

    /// Stage index uploaded to the shader.
    #[inline]
    pub fn index(self) -> u32 {
        match self {
            Self::Model => 0,
            Self::World => 1,
            Self::View => 2,
            Self::Clip => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Model => "MODEL SPACE",
            Self::World => "WORLD SPACE",
            Self::View => "VIEW SPACE",
            Self::Clip => "CLIP SPACE",
        }
    }

    #[inline]
    pub fn color(self) -> Vec3 {
        Vec3::from(STAGE_COLORS[self.index() as usize])
    }
}

/// Host-side mirror of the vertex stage in `scene.wgsl`.
///
/// The model stage deliberately leaves the model matrix out, so the red cube
/// stays still while the other stages rotate. View and clip reuse the world
/// formula; only their colors differ.
pub fn stage_clip_position(space: CoordinateSpace, frame: &FrameTransforms, pos: Vec3) -> Vec4 {
    let p = pos.extend(1.0);
    match space {
        CoordinateSpace::Model => frame.projection * frame.view * p,
        CoordinateSpace::World | CoordinateSpace::View | CoordinateSpace::Clip => {
            frame.projection * frame.view * frame.model * p
        }
    }
}
