//! Viewport-space frustum classification
//!
//! A point is inside the view frustum when its normalized viewport position
//! lies strictly within (0, 1) on both axes and it sits in front of the
//! camera. Points exactly on the boundary count as outside.

use crate::camera::CameraState;
use crate::consts::CLIP_EPSILON;
use glam::Vec3;

/// A world point expressed in normalized viewport space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportPoint {
    /// Horizontal position, 0 = left edge, 1 = right edge
    pub x: f32,
    /// Vertical position, 0 = bottom edge, 1 = top edge
    pub y: f32,
    /// Depth ahead of the camera in world units
    pub depth: f32,
}

impl ViewportPoint {
    #[inline]
    pub const fn new(x: f32, y: f32, depth: f32) -> Self {
        Self { x, y, depth }
    }

    /// Check if the point is strictly inside the frustum
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.depth > 0.0 && self.x > 0.0 && self.x < 1.0 && self.y > 0.0 && self.y < 1.0
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.depth)
    }
}

/// Project a world point into the camera's normalized viewport space
pub fn world_to_viewport(camera: &CameraState, point: Vec3) -> ViewportPoint {
    let view_pos = camera.view.transform_point3(point);
    let depth = -view_pos.z;
    let clip = camera.projection * view_pos.extend(1.0);

    // Degenerate projection (point on the camera plane): park it on the
    // viewport edge so it classifies as outside.
    if clip.w.abs() < CLIP_EPSILON {
        return ViewportPoint::new(0.0, 0.0, depth);
    }

    let ndc = clip.truncate() / clip.w;
    ViewportPoint::new(ndc.x * 0.5 + 0.5, ndc.y * 0.5 + 0.5, depth)
}

/// Check if a world point is inside the camera frustum
#[inline]
pub fn is_visible(camera: &CameraState, point: Vec3) -> bool {
    world_to_viewport(camera, point).is_inside()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Mat4;

    /// 90 degree square perspective at the origin looking down -Z
    fn wide_camera() -> CameraState {
        CameraState::look_at(
            Vec3::ZERO,
            Vec3::NEG_Z,
            Vec3::Y,
            std::f32::consts::FRAC_PI_2,
            1.0,
            0.1,
            100.0,
        )
    }

    /// Unit orthographic box at the origin with an identity view
    fn unit_ortho() -> CameraState {
        CameraState::new(
            Vec3::ZERO,
            Mat4::IDENTITY,
            Mat4::orthographic_rh(-1.0, 1.0, -1.0, 1.0, 0.1, 100.0),
        )
    }

    #[test]
    fn test_center_projects_to_middle() {
        let vp = world_to_viewport(&wide_camera(), Vec3::new(0.0, 0.0, -10.0));
        assert_relative_eq!(vp.x, 0.5, epsilon = 1e-5);
        assert_relative_eq!(vp.y, 0.5, epsilon = 1e-5);
        assert_relative_eq!(vp.depth, 10.0, epsilon = 1e-4);
        assert!(vp.is_inside());
    }

    #[test]
    fn test_point_behind_camera_is_never_visible() {
        let camera = wide_camera();
        for point in [
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.5, -0.5, 2.0),
            Vec3::new(0.0, 0.0, 0.0),
        ] {
            assert!(world_to_viewport(&camera, point).depth <= 0.0);
            assert!(!is_visible(&camera, point));
        }
    }

    #[test]
    fn test_viewport_boundary_is_exclusive() {
        assert!(!ViewportPoint::new(0.0, 0.5, 5.0).is_inside());
        assert!(!ViewportPoint::new(1.0, 0.5, 5.0).is_inside());
        assert!(!ViewportPoint::new(0.5, 0.0, 5.0).is_inside());
        assert!(!ViewportPoint::new(0.5, 1.0, 5.0).is_inside());
        assert!(ViewportPoint::new(0.5, 0.5, 5.0).is_inside());
        assert!(!ViewportPoint::new(0.5, 0.5, 0.0).is_inside());
    }

    #[test]
    fn test_projected_boundary_is_outside() {
        let camera = unit_ortho();

        let left = world_to_viewport(&camera, Vec3::new(-1.0, 0.0, -5.0));
        assert_eq!(left.x, 0.0);
        assert!(!is_visible(&camera, Vec3::new(-1.0, 0.0, -5.0)));

        let top = world_to_viewport(&camera, Vec3::new(0.0, 1.0, -5.0));
        assert_eq!(top.y, 1.0);
        assert!(!is_visible(&camera, Vec3::new(0.0, 1.0, -5.0)));

        assert!(is_visible(&camera, Vec3::new(-0.99, 0.99, -5.0)));
    }

    #[test]
    fn test_side_points() {
        let camera = wide_camera();
        assert!(is_visible(&camera, Vec3::new(4.0, 0.0, -10.0)));
        assert!(!is_visible(&camera, Vec3::new(12.0, 0.0, -10.0)));
        assert!(!is_visible(&camera, Vec3::new(0.0, -12.0, -10.0)));
    }
}
