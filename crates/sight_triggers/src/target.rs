//! Resolved view targets

use crate::config::TargetKind;
use crate::error::{ConditionError, Result};
use crate::query::TargetSource;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use sight_math::Aabb;

/// Identity of a scene object, used to match raycast hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub u64);

/// The object a condition watches, resolved once at setup.
///
/// Position and bounds are cached; only the mesh visibility flag is asked
/// of the engine on each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTarget {
    /// Scene identity
    pub id: TargetId,
    /// World-space origin
    pub position: Vec3,
    /// World-space bounds, if the target has a box volume
    pub bounds: Option<Aabb>,
    /// Whether the target owns a rendered surface
    pub has_surface: bool,
}

impl ViewTarget {
    /// A bare point target
    pub fn point(id: TargetId, position: Vec3) -> Self {
        Self {
            id,
            position,
            bounds: None,
            has_surface: false,
        }
    }

    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_surface(mut self) -> Self {
        self.has_surface = true;
        self
    }

    /// Look the target up once and cache what the engine reports
    pub fn resolve(source: &dyn TargetSource, id: TargetId) -> Result<Self> {
        let position = source
            .target_position(id)
            .ok_or(ConditionError::TargetNotFound(id))?;

        Ok(Self {
            id,
            position,
            bounds: source.target_bounds(id),
            has_surface: source.has_surface(id),
        })
    }

    /// Check if the target has what `kind` samples
    pub fn supports(&self, kind: TargetKind) -> bool {
        match kind {
            TargetKind::Point => true,
            TargetKind::MinBox | TargetKind::FullBox => self.bounds.is_some(),
            TargetKind::Mesh => self.has_surface,
        }
    }
}
