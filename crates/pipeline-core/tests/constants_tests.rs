// Host-side tests for constants and the cube mesh.

use pipeline_core::*;

#[test]
fn cube_mesh_shape() {
    assert_eq!(CUBE_VERTICES.len(), 8);
    assert_eq!(CUBE_INDICES.len(), 36);
    assert!(CUBE_INDICES.iter().all(|&i| (i as usize) < CUBE_VERTICES.len()));
    for v in CUBE_VERTICES {
        assert!(v.iter().all(|c| c.abs() == 0.5));
    }
}

#[test]
fn every_cube_vertex_is_referenced() {
    for i in 0..CUBE_VERTICES.len() as u32 {
        assert!(CUBE_INDICES.contains(&i), "vertex {i} unused");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    assert!(Z_NEAR > 0.0);
    assert!(Z_FAR > Z_NEAR);
    assert!(FOVY_DEGREES > 0.0 && FOVY_DEGREES < 180.0);
    // cube (half extent 0.5, up to ~0.87 from center) sits between the planes
    assert!(CAMERA_DISTANCE - 0.87 > Z_NEAR);
    assert!(CAMERA_DISTANCE + 0.87 < Z_FAR);
    assert!(rotation_axis_vec3().length() > 0.0);
}
