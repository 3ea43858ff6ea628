//! Sight Triggers - Camera Visibility Conditions
//!
//! Conditions that pass once a camera has been looking at, or away from, a
//! target for long enough.
//!
//! # Features
//!
//! - Point, any-corner box, full box and rendered-mesh targets
//! - Looking-at and looking-away modes
//! - Raycast occlusion with tunable sampling intensity and cooldowns
//! - Minimum duration timer
//! - Setup-time advisory diagnostics
//!
//! # Example
//!
//! ```ignore
//! use sight_triggers::prelude::*;
//!
//! let config = ConditionConfig::looking_at(TargetKind::FullBox)
//!     .with_raycast_intensity(RaycastIntensity::Med)
//!     .with_min_duration(2.0);
//!
//! let target = ViewTarget::resolve(&scene, TargetId(42))?;
//! let mut condition = CameraCondition::new(config).with_target(target);
//!
//! // Each fixed tick
//! let ctx = TickContext::new(&scene, now, 1.0 / 60.0);
//! if condition.evaluate(&ctx) {
//!     println!("Player has watched the door for two seconds");
//! }
//! ```

pub mod component;
pub mod condition;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod probe;
pub mod query;
pub mod system;
pub mod target;

pub mod prelude {
    pub use crate::component::TriggerCondition;
    pub use crate::condition::{CameraCondition, EvaluationPhase, EvaluationState};
    pub use crate::config::{
        ConditionConfig, LookType, RaycastIntensity, TargetKind, LOW_COOLDOWN,
        MIN_VIEW_DISTANCE, VERY_LOW_COOLDOWN,
    };
    pub use crate::diagnostics::{Diagnostic, DiagnosticKind};
    pub use crate::error::{ConditionError, Result};
    pub use crate::events::{ConditionEvent, ConditionEventType};
    pub use crate::probe::{OcclusionProber, ProbeCooldownState};
    pub use crate::query::{
        CameraId, CameraSource, RayHit, SceneQuery, SpatialQuery, SurfaceVisibility,
        TargetSource, TickContext,
    };
    pub use crate::system::ConditionSystem;
    pub use crate::target::{TargetId, ViewTarget};
    pub use sight_math::{Aabb, CameraState};
}

pub use prelude::*;
