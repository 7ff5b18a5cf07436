//! Camera description shared with the renderer, plus the pointer projection
//! convention.
//!
//! The pointer's normalized-device coordinate is projected orthographically
//! onto the z=0 view plane: the plane's visible extent follows from the
//! perspective frustum at the camera's distance, and the pointer scales
//! linearly into it. The attraction field in [`crate::field`] consumes the
//! result.

use crate::constants::{CAMERA_FOVY_DEG, CAMERA_Z};
use glam::{Mat4, Vec2, Vec3};

/// Right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed front-on framing used by the hero scene.
    pub fn front(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Visible (width, height) of the z=0 plane through the frustum.
    pub fn plane_extent_at_origin(&self) -> Vec2 {
        let dist = (self.eye - self.target).length();
        let height = 2.0 * (self.fovy_radians * 0.5).tan() * dist;
        Vec2::new(height * self.aspect, height)
    }

    /// Project a pointer NDC position (x right, y up, both in [-1, 1]) onto
    /// the z=0 view plane.
    pub fn pointer_to_plane(&self, ndc: Vec2) -> Vec2 {
        ndc * self.plane_extent_at_origin() * 0.5
    }
}
