//! Engine-facing query interfaces
//!
//! The condition core never talks to a renderer or physics world directly.
//! An engine adapter implements these traits and hands them over each tick
//! through a [`TickContext`].

use crate::target::TargetId;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use sight_math::{Aabb, CameraState};

/// Identity of a camera in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CameraId(pub u64);

/// First hit of a raycast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Object that was hit
    pub target: TargetId,
    /// Distance from the ray origin
    pub distance: f32,
}

impl RayHit {
    pub fn new(target: TargetId, distance: f32) -> Self {
        Self { target, distance }
    }
}

/// Raycasting against scene geometry
pub trait SpatialQuery {
    /// Cast a ray and return the first hit within `max_distance`.
    ///
    /// `direction` is normalized by the caller.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

/// Per-tick visibility flag of rendered surfaces
pub trait SurfaceVisibility {
    /// Whether the renderer currently considers the target's surface visible
    fn is_surface_visible(&self, target: TargetId) -> bool;
}

/// Camera lookup
pub trait CameraSource {
    fn camera(&self, id: CameraId) -> Option<CameraState>;

    /// Camera used when a condition has none assigned
    fn main_camera(&self) -> Option<CameraState>;
}

/// Everything a condition asks of the engine during a tick
pub trait SceneQuery: SpatialQuery + SurfaceVisibility + CameraSource {}

impl<T: SpatialQuery + SurfaceVisibility + CameraSource> SceneQuery for T {}

/// Setup-time target lookup
pub trait TargetSource {
    fn target_position(&self, id: TargetId) -> Option<Vec3>;

    fn target_bounds(&self, id: TargetId) -> Option<Aabb>;

    fn has_surface(&self, id: TargetId) -> bool;
}

/// Inputs for one evaluation tick
#[derive(Clone, Copy)]
pub struct TickContext<'a> {
    /// Engine queries
    pub scene: &'a dyn SceneQuery,
    /// Monotonic clock at this tick (seconds)
    pub now: f32,
    /// Fixed step since the previous tick (seconds)
    pub delta: f32,
}

impl<'a> TickContext<'a> {
    pub fn new(scene: &'a dyn SceneQuery, now: f32, delta: f32) -> Self {
        Self { scene, now, delta }
    }
}

impl std::fmt::Debug for TickContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickContext")
            .field("now", &self.now)
            .field("delta", &self.delta)
            .finish()
    }
}
