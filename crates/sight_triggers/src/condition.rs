//! Camera visibility condition

use crate::component::TriggerCondition;
use crate::config::{ConditionConfig, LookType, RaycastIntensity, TargetKind, MIN_VIEW_DISTANCE};
use crate::diagnostics::Diagnostic;
use crate::probe::OcclusionProber;
use crate::query::{CameraId, TickContext};
use crate::target::ViewTarget;
use sight_math::{is_visible, CameraState};

/// Outcome of the most recent evaluated tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationPhase {
    /// Instantaneous test failed
    NotSatisfiedThisTick,
    /// Instantaneous test passed, minimum duration not yet reached
    SatisfiedThisTick,
    /// Instantaneous test passed and the minimum duration is reached
    SatisfiedAndTimerElapsed,
}

impl Default for EvaluationPhase {
    fn default() -> Self {
        Self::NotSatisfiedThisTick
    }
}

/// Qualifying-time accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvaluationState {
    /// Seconds spent satisfied
    pub accumulated_time: f32,
    /// Phase after the last evaluated tick
    pub phase: EvaluationPhase,
}

impl EvaluationState {
    /// Record one tick's instantaneous result and report overall pass.
    ///
    /// A failing tick leaves the accumulator alone unless
    /// `reset_on_failure` is set.
    pub fn record(
        &mut self,
        satisfied: bool,
        delta: f32,
        min_duration: f32,
        reset_on_failure: bool,
    ) -> bool {
        if !satisfied {
            if reset_on_failure {
                self.accumulated_time = 0.0;
            }
            self.phase = EvaluationPhase::NotSatisfiedThisTick;
            return false;
        }

        self.accumulated_time += delta;
        if self.accumulated_time >= min_duration {
            self.phase = EvaluationPhase::SatisfiedAndTimerElapsed;
            true
        } else {
            self.phase = EvaluationPhase::SatisfiedThisTick;
            false
        }
    }

    #[inline]
    pub fn passed(&self) -> bool {
        self.phase == EvaluationPhase::SatisfiedAndTimerElapsed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Passes once the camera has been looking at (or away from) a target for a
/// minimum duration.
#[derive(Debug, Clone)]
pub struct CameraCondition {
    name: String,
    config: ConditionConfig,
    target: Option<ViewTarget>,
    camera: Option<CameraId>,
    prober: OcclusionProber,
    state: EvaluationState,
}

impl CameraCondition {
    pub fn new(config: ConditionConfig) -> Self {
        let prober = OcclusionProber::new(config.effective_intensity());
        Self {
            name: String::from("camera_condition"),
            config,
            target: None,
            camera: None,
            prober,
            state: EvaluationState::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_target(mut self, target: ViewTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Watch from a specific camera instead of the main camera
    pub fn with_camera(mut self, camera: CameraId) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn config(&self) -> &ConditionConfig {
        &self.config
    }

    pub fn target(&self) -> Option<&ViewTarget> {
        self.target.as_ref()
    }

    pub fn state(&self) -> &EvaluationState {
        &self.state
    }

    pub fn prober(&self) -> &OcclusionProber {
        &self.prober
    }

    fn resolve_camera(&self, ctx: &TickContext<'_>) -> Option<CameraState> {
        match self.camera {
            Some(id) => ctx.scene.camera(id),
            None => ctx.scene.main_camera(),
        }
    }

    /// Instantaneous geometric test, including occlusion when looking at
    fn is_satisfied(
        &mut self,
        target: &ViewTarget,
        camera: &CameraState,
        ctx: &TickContext<'_>,
    ) -> bool {
        match self.config.look_type {
            LookType::LookingAway => {
                Self::is_looking_away(self.config.target_kind, target, camera, ctx)
            }
            LookType::LookingAt => self.is_looking_at(target, camera, ctx),
        }
    }

    fn is_looking_away(
        kind: TargetKind,
        target: &ViewTarget,
        camera: &CameraState,
        ctx: &TickContext<'_>,
    ) -> bool {
        match kind {
            TargetKind::Point => !is_visible(camera, target.position),
            TargetKind::MinBox | TargetKind::FullBox => match (target.bounds, kind.quantifier()) {
                (Some(bounds), Some(quantifier)) => quantifier.outside(camera, &bounds),
                _ => false,
            },
            TargetKind::Mesh => target.has_surface && !ctx.scene.is_surface_visible(target.id),
        }
    }

    fn is_looking_at(
        &mut self,
        target: &ViewTarget,
        camera: &CameraState,
        ctx: &TickContext<'_>,
    ) -> bool {
        let kind = self.config.target_kind;
        let from = camera.position;
        let prober = &mut self.prober;

        match kind {
            TargetKind::Point => {
                is_visible(camera, target.position)
                    && prober.is_unobstructed(ctx, from, target.position - from, target.id)
            }
            TargetKind::MinBox | TargetKind::FullBox => {
                let (Some(bounds), Some(quantifier)) = (target.bounds, kind.quantifier()) else {
                    return false;
                };

                if prober.intensity() == RaycastIntensity::High {
                    quantifier.test(&bounds, |corner| {
                        is_visible(camera, corner)
                            && prober.is_unobstructed(ctx, from, corner - from, target.id)
                    })
                } else {
                    quantifier.inside(camera, &bounds)
                        && prober.is_unobstructed(ctx, from, target.position - from, target.id)
                }
            }
            TargetKind::Mesh => {
                target.has_surface
                    && ctx.scene.is_surface_visible(target.id)
                    && prober.is_unobstructed(ctx, from, target.position - from, target.id)
            }
        }
    }
}

impl TriggerCondition for CameraCondition {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let config = &self.config;

        match &self.target {
            None => diagnostics.push(Diagnostic::MissingTarget),
            Some(target) => {
                if config.target_kind.needs_bounds() && target.bounds.is_none() {
                    diagnostics.push(Diagnostic::MissingBounds {
                        target: target.id,
                        kind: config.target_kind,
                    });
                }
                if config.target_kind == TargetKind::Mesh && !target.has_surface {
                    diagnostics.push(Diagnostic::MissingSurface(target.id));
                }
            }
        }

        if self.camera.is_none() {
            diagnostics.push(Diagnostic::DefaultCamera);
        }

        match config.look_type {
            LookType::LookingAt => {
                if config.target_kind == TargetKind::Mesh
                    && config.raycast_intensity == RaycastIntensity::High
                {
                    diagnostics.push(Diagnostic::HighIntensityOnMesh);
                }
            }
            LookType::LookingAway => {
                if config.raycast_intensity.probes() {
                    diagnostics.push(Diagnostic::IntensityIgnoredLookingAway(
                        config.raycast_intensity,
                    ));
                }
            }
        }

        if config.min_duration < 0.0 {
            diagnostics.push(Diagnostic::NegativeDuration(config.min_duration));
        }

        diagnostics
    }

    fn evaluate(&mut self, ctx: &TickContext<'_>) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let Some(camera) = self.resolve_camera(ctx) else {
            log::trace!("{}: no camera available this tick", self.name);
            return false;
        };

        if camera.distance_to(target.position) < MIN_VIEW_DISTANCE {
            log::trace!("{}: camera too close to {:?}", self.name, target.id);
            return false;
        }

        let satisfied = self.is_satisfied(&target, &camera, ctx);
        let was_passed = self.state.passed();
        let passed = self.state.record(
            satisfied,
            ctx.delta,
            self.config.min_duration,
            self.config.reset_on_failure,
        );

        if passed && !was_passed {
            log::debug!(
                "{}: satisfied for {:.2}s, condition passes",
                self.name,
                self.state.accumulated_time
            );
        }
        log::trace!("{}: {:?}", self.name, self.state.phase);

        passed
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::TargetId;
    use glam::Vec3;

    #[test]
    fn test_timer_passes_on_fourth_tick() {
        let mut state = EvaluationState::default();
        assert!(!state.record(true, 0.5, 2.0, false));
        assert!(!state.record(true, 0.5, 2.0, false));
        assert!(!state.record(true, 0.5, 2.0, false));
        assert_eq!(state.phase, EvaluationPhase::SatisfiedThisTick);
        assert!(state.record(true, 0.5, 2.0, false));
        assert_eq!(state.phase, EvaluationPhase::SatisfiedAndTimerElapsed);
    }

    #[test]
    fn test_failing_tick_keeps_accumulated_time() {
        let mut state = EvaluationState::default();
        state.record(true, 0.5, 2.0, false);
        state.record(true, 0.5, 2.0, false);
        assert!(!state.record(false, 0.5, 2.0, false));
        assert_eq!(state.accumulated_time, 1.0);
        assert_eq!(state.phase, EvaluationPhase::NotSatisfiedThisTick);
    }

    #[test]
    fn test_reset_on_failure() {
        let mut state = EvaluationState::default();
        state.record(true, 0.5, 2.0, true);
        state.record(false, 0.5, 2.0, true);
        assert_eq!(state.accumulated_time, 0.0);
    }

    #[test]
    fn test_zero_duration_passes_immediately() {
        let mut state = EvaluationState::default();
        assert!(state.record(true, 0.02, 0.0, false));
    }

    #[test]
    fn test_validate_missing_target() {
        let condition = CameraCondition::new(ConditionConfig::default()).with_camera(CameraId(1));
        assert_eq!(condition.validate(), vec![Diagnostic::MissingTarget]);
    }

    #[test]
    fn test_validate_collects_every_warning() {
        let config = ConditionConfig::looking_at(TargetKind::Mesh)
            .with_raycast_intensity(RaycastIntensity::High)
            .with_min_duration(-1.0);
        let condition = CameraCondition::new(config)
            .with_target(ViewTarget::point(TargetId(4), Vec3::new(0.0, 0.0, -10.0)));

        let diagnostics = condition.validate();
        assert!(diagnostics.contains(&Diagnostic::MissingSurface(TargetId(4))));
        assert!(diagnostics.contains(&Diagnostic::DefaultCamera));
        assert!(diagnostics.contains(&Diagnostic::HighIntensityOnMesh));
        assert!(diagnostics.contains(&Diagnostic::NegativeDuration(-1.0)));
        assert_eq!(diagnostics.len(), 4);
    }

    #[test]
    fn test_validate_box_without_bounds() {
        let condition = CameraCondition::new(ConditionConfig::looking_away(TargetKind::MinBox))
            .with_camera(CameraId(0))
            .with_target(ViewTarget::point(TargetId(2), Vec3::ZERO));

        assert_eq!(
            condition.validate(),
            vec![Diagnostic::MissingBounds {
                target: TargetId(2),
                kind: TargetKind::MinBox,
            }]
        );
    }

    #[test]
    fn test_looking_away_uses_no_prober() {
        let config = ConditionConfig::looking_away(TargetKind::Point)
            .with_raycast_intensity(RaycastIntensity::Med);
        let condition = CameraCondition::new(config);
        assert_eq!(condition.prober().intensity(), RaycastIntensity::None);
    }
}
