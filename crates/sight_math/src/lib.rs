//! # sight_math - Camera Visibility Geometry
//!
//! Small geometry layer answering "can this camera see that point or box?".
//! Built on `glam` so any renderer can hand over its own matrices.
//!
//! - [`CameraState`]: position, view and projection of the viewing camera
//! - [`frustum`]: world to viewport projection and the inside/outside classifier
//! - [`bounds`]: axis-aligned boxes and any/all corner sampling

pub mod bounds;
pub mod camera;
pub mod frustum;

pub use bounds::*;
pub use camera::*;
pub use frustum::*;

/// Common math constants
pub mod consts {
    /// Smallest clip-space `w` treated as non-degenerate
    pub const CLIP_EPSILON: f32 = 1e-6;
}

pub mod prelude {
    pub use crate::bounds::{
        all_corners_outside, all_corners_visible, any_corner_outside, any_corner_visible, Aabb,
        BoxQuantifier,
    };
    pub use crate::camera::CameraState;
    pub use crate::frustum::{is_visible, world_to_viewport, ViewportPoint};
    pub use glam::{Mat4, Vec3};
}
