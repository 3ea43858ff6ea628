//! Condition events

/// Type of condition event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionEventType {
    /// Condition started passing this tick
    Passed,
    /// Condition stopped passing this tick
    Lost,
}

/// A pass/lose transition of a registered condition
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionEvent {
    /// Type of event
    pub event_type: ConditionEventType,
    /// Id the condition was registered under
    pub condition: u64,
    /// Clock time of the tick that produced the event
    pub time: f32,
}

impl ConditionEvent {
    pub fn passed(condition: u64, time: f32) -> Self {
        Self {
            event_type: ConditionEventType::Passed,
            condition,
            time,
        }
    }

    pub fn lost(condition: u64, time: f32) -> Self {
        Self {
            event_type: ConditionEventType::Lost,
            condition,
            time,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.event_type == ConditionEventType::Passed
    }

    pub fn is_lost(&self) -> bool {
        self.event_type == ConditionEventType::Lost
    }
}
