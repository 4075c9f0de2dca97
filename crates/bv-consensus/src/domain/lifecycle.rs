//! Participant lifecycle.

/// Lifecycle of a consensus participant.
///
/// `Idle → Running → Decided`, one-way. The orthogonal stopped flag lives on
/// the round state, not here: stopping suppresses protocol activity from any
/// lifecycle state without transitioning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, consensus not yet triggered.
    Idle,
    /// Round loop in progress.
    Running,
    /// Round budget exhausted; terminal.
    Decided,
}

impl Lifecycle {
    /// The three-valued `decided` field of the wire snapshot:
    /// `null` before consensus starts, `false` while running, `true` once
    /// finalized.
    pub fn decided_flag(self) -> Option<bool> {
        match self {
            Lifecycle::Idle => None,
            Lifecycle::Running => Some(false),
            Lifecycle::Decided => Some(true),
        }
    }
}

/// Health as reported by the control surface: unhealthy iff faulty,
/// independent of lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}
