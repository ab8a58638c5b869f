//! Per-frame model, view and projection matrices.
//!
//! Everything here is a pure function of elapsed time and the viewport, so a
//! given `(t, viewport)` pair always yields bit-identical matrices.

use crate::constants::{
    rotation_axis_vec3, CAMERA_DISTANCE, FOVY_DEGREES, WINDOW_HEIGHT, WINDOW_WIDTH, Z_FAR, Z_NEAR,
};
use crate::error::PipelineError;
use glam::{Mat4, Vec3};

/// Drawable extent in physical pixels. Both sides are guaranteed non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, PipelineError> {
        if width == 0 || height == 0 {
            return Err(PipelineError::ZeroViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTransforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

/// Fixed camera looking down -Z at the origin from `distance` units away.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub distance: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            distance: CAMERA_DISTANCE,
            fovy_radians: FOVY_DEGREES.to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }
}

impl CameraRig {
    /// Compute the clip-space projection matrix (wgpu depth range 0..1).
    pub fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, viewport.aspect(), self.znear, self.zfar)
    }

    /// Translation only; there is no look-at.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
    }

    pub fn compute_frame(&self, elapsed_seconds: f32, viewport: Viewport) -> FrameTransforms {
        FrameTransforms {
            model: model_matrix(elapsed_seconds),
            view: self.view_matrix(),
            projection: self.projection_matrix(viewport),
        }
    }
}

/// Rotation of `elapsed_seconds` radians about the fixed model axis.
#[inline]
pub fn model_matrix(elapsed_seconds: f32) -> Mat4 {
    Mat4::from_axis_angle(rotation_axis_vec3().normalize(), elapsed_seconds)
}

/// Matrices for one frame with the default camera rig.
///
/// The projection is `Mat4::perspective_rh`, which maps depth to wgpu's
/// [0, 1] clip range. Its z row therefore differs from an OpenGL-style
/// [-1, 1] perspective matrix; the x, y and w rows are the same.
pub fn compute_frame(elapsed_seconds: f32, viewport: Viewport) -> FrameTransforms {
    CameraRig::default().compute_frame(elapsed_seconds, viewport)
}
