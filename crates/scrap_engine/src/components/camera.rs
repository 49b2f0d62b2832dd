//! Camera components

use std::any::Any;

use crate::foundation::math::{utils, Mat4};
use crate::scene::Component;

/// Perspective camera attached to a game object
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    fov_y: f32,
    near: f32,
    far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y: utils::deg_to_rad(60.0),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// Camera with the given vertical field of view in radians
    pub fn new(fov_y: f32, near: f32, far: f32) -> Self {
        Self { fov_y, near, far }
    }

    /// Vertical field of view in radians
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Projection matrix for the given aspect ratio
    pub fn projection(&self, aspect: f32) -> Mat4 {
        utils::perspective(self.fov_y, aspect, self.near, self.far)
    }
}

impl Component for Camera {
    fn type_name(&self) -> &'static str {
        "Camera"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Shadow-casting light camera with an explicit projection
#[derive(Debug, Clone, Copy)]
pub struct ShadowCamera {
    projection: Mat4,
}

impl Default for ShadowCamera {
    fn default() -> Self {
        Self {
            projection: Mat4::identity(),
        }
    }
}

impl ShadowCamera {
    /// Shadow camera with an identity projection
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shadow projection matrix
    pub fn set_projection(&mut self, projection: Mat4) {
        self.projection = projection;
    }

    /// Shadow projection matrix
    pub fn projection(&self) -> Mat4 {
        self.projection
    }
}

impl Component for ShadowCamera {
    fn type_name(&self) -> &'static str {
        "ShadowCamera"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_projection_is_not_identity() {
        let camera = Camera::default();
        let projection = camera.projection(16.0 / 9.0);
        assert!(projection != Mat4::identity());
    }

    #[test]
    fn test_shadow_projection_roundtrip() {
        let mut shadow = ShadowCamera::new();
        let projection = utils::perspective(utils::deg_to_rad(120.0), 1.0, 0.1, 100.0);
        shadow.set_projection(projection);
        assert_relative_eq!(shadow.projection()[(0, 0)], projection[(0, 0)]);
    }
}
