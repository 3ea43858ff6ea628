//! Setup-time advisory diagnostics

use crate::config::{RaycastIntensity, TargetKind};
use crate::target::TargetId;
use thiserror::Error;

/// Category of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Questionable configuration, evaluation still behaves sensibly
    ConfigurationWarning,
    /// Target lacks the geometry the condition samples; the condition can
    /// never pass
    MissingCapability,
}

/// An advisory message produced by validation.
///
/// Diagnostics never block evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    #[error("No target object set, the condition will never pass")]
    MissingTarget,

    #[error("No camera assigned, falling back to the main camera")]
    DefaultCamera,

    #[error("Target {target:?} has no box bounds but the condition samples {kind:?}")]
    MissingBounds { target: TargetId, kind: TargetKind },

    #[error("Target {0:?} has no rendered surface to report visibility")]
    MissingSurface(TargetId),

    #[error("High raycast intensity has no extra effect over Med for mesh targets")]
    HighIntensityOnMesh,

    #[error("Raycast intensity {0:?} is ignored when looking away")]
    IntensityIgnoredLookingAway(RaycastIntensity),

    #[error("Minimum duration {0}s is negative")]
    NegativeDuration(f32),
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::MissingBounds { .. } | Self::MissingSurface(_) => {
                DiagnosticKind::MissingCapability
            }
            _ => DiagnosticKind::ConfigurationWarning,
        }
    }

    /// Check if the condition can never pass with this diagnostic present
    pub fn is_blocking_pass(&self) -> bool {
        matches!(
            self,
            Self::MissingTarget | Self::MissingBounds { .. } | Self::MissingSurface(_)
        )
    }
}
