//! Viewing camera state

use glam::{Mat4, Vec3};

/// Snapshot of a camera for one tick.
///
/// Right-handed: the camera looks down its local -Z axis, so the depth of a
/// point ahead of the camera is `-view_space.z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// World position of the camera
    pub position: Vec3,
    /// World to view transform
    pub view: Mat4,
    /// View to clip transform
    pub projection: Mat4,
}

impl CameraState {
    /// Default vertical field of view (60 degrees)
    pub const DEFAULT_FOV_Y: f32 = std::f32::consts::FRAC_PI_3;
    pub const DEFAULT_NEAR: f32 = 0.3;
    pub const DEFAULT_FAR: f32 = 1000.0;

    #[inline]
    pub fn new(position: Vec3, view: Mat4, projection: Mat4) -> Self {
        Self {
            position,
            view,
            projection,
        }
    }

    /// Perspective camera at `eye` looking at `target`
    pub fn look_at(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self::new(
            eye,
            Mat4::look_at_rh(eye, target, up),
            Mat4::perspective_rh(fov_y, aspect, near, far),
        )
    }

    /// Orthographic camera at `eye` looking at `target`
    pub fn orthographic(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        half_width: f32,
        half_height: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self::new(
            eye,
            Mat4::look_at_rh(eye, target, up),
            Mat4::orthographic_rh(-half_width, half_width, -half_height, half_height, near, far),
        )
    }

    /// Combined world to clip transform
    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Distance ahead of the camera along its view axis
    #[inline]
    pub fn depth_of(&self, point: Vec3) -> f32 {
        -self.view.transform_point3(point).z
    }

    /// Straight-line distance from the camera to a point
    #[inline]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }

    /// Camera forward direction in world space
    pub fn forward(&self) -> Vec3 {
        let world = self.view.inverse();
        -world.z_axis.truncate().normalize_or_zero()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::look_at(
            Vec3::ZERO,
            Vec3::NEG_Z,
            Vec3::Y,
            Self::DEFAULT_FOV_Y,
            16.0 / 9.0,
            Self::DEFAULT_NEAR,
            Self::DEFAULT_FAR,
        )
    }
}
