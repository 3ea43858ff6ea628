//! Occlusion probing
//!
//! Line-of-sight raycasts from the camera to the target. A hit on anything
//! other than the target counts as obstructed. Low intensities back off for
//! a while after an obstruction and fail open in the meantime.

use crate::config::RaycastIntensity;
use crate::query::TickContext;
use crate::target::TargetId;
use glam::Vec3;

/// Cooldown bookkeeping owned by a single prober
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeCooldownState {
    /// Clock time before which probes are skipped
    pub next_allowed_probe_time: f32,
    /// Outcome of the last cast ray, if any was cast
    pub last_probe_result: Option<bool>,
}

impl Default for ProbeCooldownState {
    fn default() -> Self {
        Self {
            next_allowed_probe_time: f32::NEG_INFINITY,
            last_probe_result: None,
        }
    }
}

/// Raycast line-of-sight tester
#[derive(Debug, Clone)]
pub struct OcclusionProber {
    intensity: RaycastIntensity,
    state: ProbeCooldownState,
    rays_cast: u64,
}

impl OcclusionProber {
    pub fn new(intensity: RaycastIntensity) -> Self {
        Self {
            intensity,
            state: ProbeCooldownState::default(),
            rays_cast: 0,
        }
    }

    pub fn intensity(&self) -> RaycastIntensity {
        self.intensity
    }

    pub fn state(&self) -> &ProbeCooldownState {
        &self.state
    }

    /// Total rays cast over the prober's lifetime
    pub fn rays_cast(&self) -> u64 {
        self.rays_cast
    }

    /// Check if probes are currently suppressed
    #[inline]
    pub fn is_cooling_down(&self, now: f32) -> bool {
        now < self.state.next_allowed_probe_time
    }

    /// Test the line from `from` along `direction` (length-limited to
    /// `|direction|`) for anything other than `target`.
    ///
    /// Returns `true` without casting when probing is disabled or cooling
    /// down.
    pub fn is_unobstructed(
        &mut self,
        ctx: &TickContext<'_>,
        from: Vec3,
        direction: Vec3,
        target: TargetId,
    ) -> bool {
        if !self.intensity.probes() {
            return true;
        }

        if self.is_cooling_down(ctx.now) {
            log::trace!(
                "Probe for {:?} skipped, cooling down until {}",
                target,
                self.state.next_allowed_probe_time
            );
            return true;
        }

        let max_distance = direction.length();
        self.rays_cast += 1;

        let clear = match ctx
            .scene
            .cast_ray(from, direction.normalize_or_zero(), max_distance)
        {
            None => true,
            Some(hit) => hit.target == target,
        };

        if !clear {
            if let Some(cooldown) = self.intensity.cooldown() {
                self.state.next_allowed_probe_time = ctx.now + cooldown;
                log::debug!(
                    "View of {:?} obstructed, pausing {:?} probes for {}s",
                    target,
                    self.intensity,
                    cooldown
                );
            }
        }

        self.state.last_probe_result = Some(clear);
        clear
    }
}
