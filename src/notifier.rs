//! Completion Notifier
//!
//! Edge-triggered state machine gating the one-shot celebration.

/// Notifier state; starts `Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierState {
    #[default]
    Idle,
    Alerted,
}

/// Edge produced when the completion predicate changes value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Idle -> Alerted: show the banner and fire the effect once
    Celebrate,
    /// Alerted -> Idle: hide the banner
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionNotifier {
    state: NotifierState,
}

impl CompletionNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NotifierState {
        self.state
    }

    pub fn is_alerted(&self) -> bool {
        self.state() == NotifierState::Alerted
    }

    /// Feed the current predicate value; returns the edge, if any
    pub fn observe(&mut self, complete: bool) -> Option<Transition> {
        match (self.state, complete) {
            (NotifierState::Idle, true) => {
                self.state = NotifierState::Alerted;
                log::info!("[NOTIFIER] list complete");
                Some(Transition::Celebrate)
            }
            (NotifierState::Alerted, false) => {
                self.state = NotifierState::Idle;
                log::info!("[NOTIFIER] list no longer complete");
                Some(Transition::Dismiss)
            }
            _ => None,
        }
    }
}
