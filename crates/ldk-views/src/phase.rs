//! Controller phase machine: idle → loading → settled.

/// Lifecycle of a controller's current operation.
///
/// While `Loading`, no other operation may be triggered on the same
/// controller (the UI equivalent of disabled buttons). Independent
/// controllers are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No operation has run yet, or state was just constructed.
    #[default]
    Idle,
    /// A transport call is in flight.
    Loading,
    /// The last operation resolved or rejected.
    Settled(Outcome),
}

/// Terminal result of a settled operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

impl Phase {
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Settled(Outcome::Error))
    }
}

#[cfg(test)]
mod tests {
    use super::{Outcome, Phase};

    #[test]
    fn default_phase_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
        assert!(!Phase::default().is_loading());
        assert!(!Phase::default().is_error());
    }

    #[test]
    fn settled_error_is_terminal_error() {
        let phase = Phase::Settled(Outcome::Error);
        assert!(phase.is_error());
        assert!(!phase.is_loading());
    }
}
