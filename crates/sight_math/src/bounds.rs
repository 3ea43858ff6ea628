//! Axis-aligned boxes and corner sampling against the view frustum

use crate::camera::CameraState;
use crate::frustum::is_visible;
use glam::Vec3;

/// Axis-Aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create from min and max points
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if the box is well formed (min <= max on every axis)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// The 8 corners: min, max and the 6 mixed combinations
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

/// How many corners of a box must pass a test
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoxQuantifier {
    /// At least one corner
    Any,
    /// Every corner
    All,
}

impl BoxQuantifier {
    /// Apply the quantifier to a per-corner predicate, stopping at the
    /// first deciding corner.
    pub fn test<F>(self, bounds: &Aabb, mut predicate: F) -> bool
    where
        F: FnMut(Vec3) -> bool,
    {
        let corners = bounds.corners();
        match self {
            Self::Any => corners.into_iter().any(&mut predicate),
            Self::All => corners.into_iter().all(&mut predicate),
        }
    }

    /// Corners inside the frustum under this quantifier
    #[inline]
    pub fn inside(self, camera: &CameraState, bounds: &Aabb) -> bool {
        self.test(bounds, |corner| is_visible(camera, corner))
    }

    /// Corners outside the frustum under this quantifier
    #[inline]
    pub fn outside(self, camera: &CameraState, bounds: &Aabb) -> bool {
        self.test(bounds, |corner| !is_visible(camera, corner))
    }
}

/// True if at least one corner is inside the frustum
pub fn any_corner_visible(camera: &CameraState, bounds: &Aabb) -> bool {
    BoxQuantifier::Any.inside(camera, bounds)
}

/// True if every corner is inside the frustum
pub fn all_corners_visible(camera: &CameraState, bounds: &Aabb) -> bool {
    BoxQuantifier::All.inside(camera, bounds)
}

/// True if at least one corner is outside the frustum
pub fn any_corner_outside(camera: &CameraState, bounds: &Aabb) -> bool {
    BoxQuantifier::Any.outside(camera, bounds)
}

/// True if every corner is outside the frustum
pub fn all_corners_outside(camera: &CameraState, bounds: &Aabb) -> bool {
    BoxQuantifier::All.outside(camera, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraState {
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

    #[test]
    fn test_corners_are_distinct() {
        let aabb = Aabb::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
        let corners = aabb.corners();
        assert_eq!(corners.len(), 8);
        for (i, a) in corners.iter().enumerate() {
            for b in corners.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert!(corners.contains(&aabb.min));
        assert!(corners.contains(&aabb.max));
    }

    #[test]
    fn test_center_half_extents() {
        let aabb = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, -10.0), Vec3::ONE);
        assert_eq!(aabb.center(), Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(aabb.half_extents(), Vec3::ONE);
        assert!(aabb.is_valid());
    }

    #[test]
    fn test_box_straddling_frustum_edge() {
        // Frustum edge at x = 10 for depth 10; box spans x in [8, 12]
        let aabb = Aabb::new(Vec3::new(8.0, -1.0, -11.0), Vec3::new(12.0, 1.0, -9.0));
        let camera = camera();

        assert!(any_corner_visible(&camera, &aabb));
        assert!(!all_corners_visible(&camera, &aabb));
        assert!(any_corner_outside(&camera, &aabb));
        assert!(!all_corners_outside(&camera, &aabb));
    }

    #[test]
    fn test_outside_is_dual_of_visible() {
        let camera = camera();
        let boxes = [
            Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, -10.0), Vec3::ONE),
            Aabb::new(Vec3::new(8.0, -1.0, -11.0), Vec3::new(12.0, 1.0, -9.0)),
            Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, 10.0), Vec3::ONE),
            Aabb::from_center_half_extents(Vec3::new(0.0, 50.0, -10.0), Vec3::splat(2.0)),
        ];

        for aabb in &boxes {
            assert_eq!(any_corner_outside(&camera, aabb), !all_corners_visible(&camera, aabb));
            assert_eq!(all_corners_outside(&camera, aabb), !any_corner_visible(&camera, aabb));
        }
    }

    #[test]
    fn test_quantifier_short_circuits() {
        let aabb = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::ONE);

        let mut calls = 0;
        assert!(BoxQuantifier::Any.test(&aabb, |_| {
            calls += 1;
            true
        }));
        assert_eq!(calls, 1);

        let mut calls = 0;
        assert!(!BoxQuantifier::Any.test(&aabb, |_| {
            calls += 1;
            false
        }));
        assert_eq!(calls, 8);

        let mut calls = 0;
        assert!(BoxQuantifier::All.test(&aabb, |_| {
            calls += 1;
            true
        }));
        assert_eq!(calls, 8);
    }
}
