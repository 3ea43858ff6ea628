//! Condition system for ticking many conditions

use crate::component::TriggerCondition;
use crate::diagnostics::Diagnostic;
use crate::events::ConditionEvent;
use crate::query::TickContext;
use std::collections::{BTreeMap, HashSet};

/// Registry that ticks conditions and reports pass/lose transitions
pub struct ConditionSystem {
    /// Registered conditions (id -> condition), ticked in id order
    conditions: BTreeMap<u64, Box<dyn TriggerCondition>>,
    /// Conditions that passed on the last tick
    passing: HashSet<u64>,
    /// Collected events from last update
    last_events: Vec<ConditionEvent>,
}

impl ConditionSystem {
    pub fn new() -> Self {
        Self {
            conditions: BTreeMap::new(),
            passing: HashSet::new(),
            last_events: Vec::new(),
        }
    }

    /// Register a condition, logging its setup diagnostics.
    ///
    /// Returns the diagnostics so callers can surface them in their own UI.
    pub fn register(&mut self, id: u64, condition: Box<dyn TriggerCondition>) -> Vec<Diagnostic> {
        let diagnostics = condition.validate();
        for diagnostic in &diagnostics {
            log::warn!("Condition '{}' ({}): {}", condition.name(), id, diagnostic);
        }
        self.passing.remove(&id);
        self.conditions.insert(id, condition);
        diagnostics
    }

    pub fn unregister(&mut self, id: u64) -> Option<Box<dyn TriggerCondition>> {
        self.passing.remove(&id);
        self.conditions.remove(&id)
    }

    pub fn get(&self, id: u64) -> Option<&dyn TriggerCondition> {
        self.conditions.get(&id).map(|c| c.as_ref())
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut (dyn TriggerCondition + 'static)> {
        self.conditions.get_mut(&id).map(|c| c.as_mut())
    }

    /// Diagnostics of every registered condition
    pub fn validate_all(&self) -> Vec<(u64, Diagnostic)> {
        self.conditions
            .iter()
            .flat_map(|(&id, condition)| condition.validate().into_iter().map(move |d| (id, d)))
            .collect()
    }

    /// Evaluate every condition once.
    ///
    /// All conditions are ticked even after one fails so their timers keep
    /// running. Returns true when every condition passes (vacuously true
    /// with none registered).
    pub fn update(&mut self, ctx: &TickContext<'_>) -> bool {
        self.last_events.clear();
        let mut all_passed = true;

        for (&id, condition) in self.conditions.iter_mut() {
            let passed = condition.evaluate(ctx);
            let was_passing = self.passing.contains(&id);

            if passed && !was_passing {
                self.passing.insert(id);
                self.last_events.push(ConditionEvent::passed(id, ctx.now));
            } else if !passed && was_passing {
                self.passing.remove(&id);
                self.last_events.push(ConditionEvent::lost(id, ctx.now));
            }

            all_passed &= passed;
        }

        all_passed
    }

    /// Check if a condition passed on the last update
    pub fn is_passing(&self, id: u64) -> bool {
        self.passing.contains(&id)
    }

    /// Reset every condition's accumulated state
    pub fn reset(&mut self) {
        for condition in self.conditions.values_mut() {
            condition.reset();
        }
        self.passing.clear();
        self.last_events.clear();
    }

    /// Get events from the last update
    pub fn get_events(&self) -> &[ConditionEvent] {
        &self.last_events
    }

    /// Drain events from the last update
    pub fn drain_events(&mut self) -> Vec<ConditionEvent> {
        std::mem::take(&mut self.last_events)
    }

    pub fn condition_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.conditions.keys().copied()
    }

    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }
}

impl Default for ConditionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConditionSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionSystem")
            .field("condition_count", &self.conditions.len())
            .field("passing", &self.passing)
            .finish()
    }
}
