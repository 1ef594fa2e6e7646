// Monitoring session state machine
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Idle,
    Armed,
}

/// Decides whether ticks produce samples. Only real edges transition;
/// repeated commands are no-ops.
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    state: SessionState,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the session moved from Idle to Armed.
    pub fn start(&mut self) -> bool {
        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Armed;
                true
            }
            SessionState::Armed => false,
        }
    }

    /// Returns true if the session moved from Armed to Idle.
    pub fn stop(&mut self) -> bool {
        match self.state {
            SessionState::Armed => {
                self.state = SessionState::Idle;
                true
            }
            SessionState::Idle => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.state == SessionState::Armed
    }

    pub fn state(&self) -> SessionState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let controller = SessionController::new();
        assert_eq!(controller.state(), SessionState::Idle);
        assert!(!controller.is_armed());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut controller = SessionController::new();
        assert!(controller.start());
        assert!(!controller.start());
        assert_eq!(controller.state(), SessionState::Armed);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut controller = SessionController::new();
        assert!(!controller.stop());
        assert_eq!(controller.state(), SessionState::Idle);

        controller.start();
        assert!(controller.stop());
        assert!(!controller.stop());
        assert_eq!(controller.state(), SessionState::Idle);
    }
}
