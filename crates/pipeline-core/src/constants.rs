use glam::Vec3;

// Window and camera tuning constants shared by the core and the native frontend.

// Window
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "Vertex Transformation Pipeline";
pub const TITLE_HINT: &str = "(Press 1-4 to change)";

// Model rotation
pub const ROTATION_AXIS: [f32; 3] = [0.5, 1.0, 0.0]; // normalized by the rotation primitive

// Camera
pub const CAMERA_DISTANCE: f32 = 3.0; // view translates the scene by -distance along Z
pub const FOVY_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

// Clear color behind the cube
pub const CLEAR_RGB: [f64; 3] = [0.1, 0.1, 0.1];

// Unit cube centered on the origin: front face (z = +0.5) then back face (z = -0.5)
pub const CUBE_VERTICES: [[f32; 3]; 8] = [
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
];

#[rustfmt::skip]
pub const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 2, 3, 0, // front
    1, 5, 6, 6, 2, 1, // right
    5, 4, 7, 7, 6, 5, // back
    4, 0, 3, 3, 7, 4, // left
    3, 2, 6, 6, 7, 3, // top
    4, 5, 1, 1, 0, 4, // bottom
];

#[inline]
pub fn rotation_axis_vec3() -> Vec3 {
    Vec3::from(ROTATION_AXIS)
}
