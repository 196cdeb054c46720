use crate::submit::SubmitError;
use crossterm::event::Event as CrosstermEvent;

/// Monotonic id of a submission attempt. Settle and dismiss events carry the
/// attempt they belong to so a stale event can never act on a newer state.
pub type AttemptId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The in-flight request produced a response or a transport failure.
    SubmitSettled {
        attempt: AttemptId,
        outcome: Result<(), SubmitError>,
    },

    /// The dismiss timer armed after settlement fired.
    DismissToast { attempt: AttemptId },

    /// Tick for UI refresh
    Tick,
}
