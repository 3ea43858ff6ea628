//! Condition capability interface

use crate::diagnostics::Diagnostic;
use crate::query::TickContext;

/// A condition a trigger waits on.
///
/// `validate` runs once at setup and only reports; `evaluate` runs every
/// tick and never fails.
pub trait TriggerCondition {
    /// Human readable name for logs
    fn name(&self) -> &str;

    /// Advisory diagnostics for the current setup
    fn validate(&self) -> Vec<Diagnostic>;

    /// Advance one tick and report whether the condition passes
    fn evaluate(&mut self, ctx: &TickContext<'_>) -> bool;

    /// Drop any accumulated per-run state
    fn reset(&mut self) {}
}
