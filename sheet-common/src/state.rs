//! Close state machine
//!
//! `Open → Closing → Closed`, one way only. Re-rendering is a side effect the
//! caller observes after a transition, not part of the machine.

/// Lifecycle phase of one sheet instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetPhase {
    #[default]
    Open,
    /// Close transition running; dismissal not yet delivered
    Closing,
    /// Dismissal delivered. Terminal.
    Closed,
}

/// What the renderer needs to know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    pub closing: bool,
}

impl SheetPhase {
    pub fn panel_state(self) -> PanelState {
        PanelState {
            closing: self != SheetPhase::Open,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    /// Mask click, explicit close, or an autoclose item activation
    CloseRequested,
    /// The completion protocol reported the close transition finished
    TransitionEnded,
}

/// Side effect the owner must perform after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start waiting for the close transition
    ArmCompletion,
    /// Deliver the dismissal callback (and any queued item action)
    Deliver,
    Ignore,
}

pub fn transition(phase: SheetPhase, event: SheetEvent) -> (SheetPhase, Effect) {
    match (phase, event) {
        (SheetPhase::Open, SheetEvent::CloseRequested) => {
            (SheetPhase::Closing, Effect::ArmCompletion)
        }
        (SheetPhase::Closing, SheetEvent::TransitionEnded) => {
            (SheetPhase::Closed, Effect::Deliver)
        }
        // Stray completions before a close, repeated requests, anything after delivery
        (phase, _) => (phase, Effect::Ignore),
    }
}
