//! Camera condition configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sight_math::BoxQuantifier;

/// Camera closer than this to the target never satisfies the condition
pub const MIN_VIEW_DISTANCE: f32 = 2.0;

/// Probe cooldown after an obstructed hit at `VeryLow` intensity (seconds)
pub const VERY_LOW_COOLDOWN: f32 = 1.0;

/// Probe cooldown after an obstructed hit at `Low` intensity (seconds)
pub const LOW_COOLDOWN: f32 = 0.1;

/// Whether the camera should be looking at or away from the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookType {
    LookingAt,
    LookingAway,
}

impl Default for LookType {
    fn default() -> Self {
        Self::LookingAt
    }
}

/// Which part of the target is sampled against the frustum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// Target origin only
    Point,
    /// Any corner of the target bounds
    MinBox,
    /// Every corner of the target bounds
    FullBox,
    /// Engine-reported visibility of the target's rendered surface
    Mesh,
}

impl TargetKind {
    /// Corner quantifier for box kinds
    pub fn quantifier(self) -> Option<BoxQuantifier> {
        match self {
            Self::MinBox => Some(BoxQuantifier::Any),
            Self::FullBox => Some(BoxQuantifier::All),
            Self::Point | Self::Mesh => None,
        }
    }

    /// Check if this kind samples the target bounds
    pub fn needs_bounds(self) -> bool {
        self.quantifier().is_some()
    }
}

impl Default for TargetKind {
    fn default() -> Self {
        Self::Point
    }
}

/// Occlusion raycast sampling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaycastIntensity {
    /// No occlusion testing
    None,
    /// Probe the origin, pause 1s after an obstruction
    VeryLow,
    /// Probe the origin, pause 0.1s after an obstruction
    Low,
    /// Probe the origin every tick
    Med,
    /// Probe every sample point every tick
    High,
}

impl RaycastIntensity {
    /// Check if this intensity casts rays at all
    #[inline]
    pub fn probes(self) -> bool {
        self != Self::None
    }

    /// Cooldown started by an obstructed probe
    pub fn cooldown(self) -> Option<f32> {
        match self {
            Self::VeryLow => Some(VERY_LOW_COOLDOWN),
            Self::Low => Some(LOW_COOLDOWN),
            Self::None | Self::Med | Self::High => Option::None,
        }
    }

    /// Check if each sample point gets its own probe
    #[inline]
    pub fn per_sample(self) -> bool {
        self == Self::High
    }
}

impl Default for RaycastIntensity {
    fn default() -> Self {
        Self::None
    }
}

/// Configuration for a camera visibility condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionConfig {
    /// Looking at or away from the target
    pub look_type: LookType,
    /// How the target is sampled
    pub target_kind: TargetKind,
    /// Occlusion sampling policy (ignored when looking away)
    pub raycast_intensity: RaycastIntensity,
    /// Seconds the condition must hold before it passes
    pub min_duration: f32,
    /// Clear accumulated time on a failing tick
    pub reset_on_failure: bool,
}

impl Default for ConditionConfig {
    fn default() -> Self {
        Self {
            look_type: LookType::LookingAt,
            target_kind: TargetKind::Point,
            raycast_intensity: RaycastIntensity::None,
            min_duration: 0.0,
            reset_on_failure: false,
        }
    }
}

impl ConditionConfig {
    /// Config for looking at the target
    pub fn looking_at(target_kind: TargetKind) -> Self {
        Self {
            look_type: LookType::LookingAt,
            target_kind,
            ..Default::default()
        }
    }

    /// Config for looking away from the target
    pub fn looking_away(target_kind: TargetKind) -> Self {
        Self {
            look_type: LookType::LookingAway,
            target_kind,
            ..Default::default()
        }
    }

    pub fn with_raycast_intensity(mut self, intensity: RaycastIntensity) -> Self {
        self.raycast_intensity = intensity;
        self
    }

    pub fn with_min_duration(mut self, seconds: f32) -> Self {
        self.min_duration = seconds;
        self
    }

    pub fn with_reset_on_failure(mut self, reset: bool) -> Self {
        self.reset_on_failure = reset;
        self
    }

    /// Intensity actually applied during evaluation
    pub fn effective_intensity(&self) -> RaycastIntensity {
        match (self.look_type, self.target_kind, self.raycast_intensity) {
            (LookType::LookingAway, _, _) => RaycastIntensity::None,
            (_, TargetKind::Mesh | TargetKind::Point, RaycastIntensity::High) => {
                RaycastIntensity::Med
            }
            (_, _, intensity) => intensity,
        }
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
