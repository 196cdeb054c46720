//! The submission state machine.
//!
//! Every external input arrives here as a single [`AppEvent`] and is applied
//! to [`AppState`] in one step; the side effects to perform come back as
//! [`Action`] values for the main loop. Events are processed one at a time,
//! so status, errors, and fields are never observable mid-update.

use crate::app::action::Action;
use crate::app::event::{AppEvent, AttemptId};
use crate::app::state::{AppState, Focus, SubmissionStatus};
use crate::form::{validate, Field};
use crate::submit::SubmitError;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::SubmitSettled { attempt, outcome } => handle_settled(state, attempt, outcome),
        AppEvent::DismissToast { attempt } => {
            handle_dismiss(state, attempt);
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_settled(
    state: &mut AppState,
    attempt: AttemptId,
    outcome: Result<(), SubmitError>,
) -> Vec<Action> {
    // Only the live attempt may settle; one request in flight by construction.
    if attempt != state.attempt || !state.status.is_submitting() {
        tracing::warn!(attempt, "ignoring settle event for superseded attempt");
        return vec![];
    }

    match outcome {
        Ok(()) => {
            state.status = SubmissionStatus::Success;
            state.inputs.clear();
            state.record_submission(true, "delivered".to_string());
            tracing::info!(attempt, "submission accepted");
        }
        Err(e) => {
            state.status = SubmissionStatus::Error;
            state.record_submission(false, e.to_string());
            tracing::warn!(attempt, error = %e, "submission failed");
        }
    }
    state.dirty = true;

    // Toast is withdrawn after a fixed delay regardless of outcome.
    vec![Action::ArmDismissTimer { attempt }]
}

fn handle_dismiss(state: &mut AppState, attempt: AttemptId) {
    if attempt != state.attempt {
        return;
    }
    if matches!(
        state.status,
        SubmissionStatus::Success | SubmissionStatus::Error
    ) {
        state.status = SubmissionStatus::Idle;
        state.dirty = true;
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    // Spinner only animates while a request is in flight.
    if state.status.is_submitting() {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Esc {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            vec![]
        }
        KeyCode::Down => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Up => {
            state.cycle_focus_back();
            vec![]
        }
        KeyCode::Enter => try_submit(state),
        _ => match state.focus {
            Focus::Field(field) => {
                handle_field_key(state, field, key);
                vec![]
            }
            Focus::Submit => vec![],
        },
    }
}

fn handle_field_key(state: &mut AppState, field: Field, key: KeyEvent) {
    let input = state.inputs.get_mut(field);
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('w') => input.delete_word_back(),
            KeyCode::Char('u') => input.clear(),
            KeyCode::Char('a') => input.move_home(),
            KeyCode::Char('e') => input.move_end(),
            _ => {}
        }
        return;
    }
    match key.code {
        // Editing never revalidates: errors are recomputed on submit only.
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

/// Run one submit attempt from the current status.
///
/// Invalid input replaces the error map and stays put; valid input clears it,
/// bumps the attempt id, and hands the payload to the submit manager. While
/// a request is in flight this is a no-op, which keeps at most one request
/// outstanding no matter how often the trigger fires.
fn try_submit(state: &mut AppState) -> Vec<Action> {
    if state.status.is_submitting() {
        return vec![];
    }

    let fields = state.fields();
    let errors = validate::validate(&fields);
    if !errors.is_empty() {
        state.errors = errors;
        return vec![];
    }

    state.errors.clear();
    state.attempt += 1;
    state.status = SubmissionStatus::Submitting;
    tracing::info!(attempt = state.attempt, "submitting contact form");

    vec![Action::SubmitForm {
        attempt: state.attempt,
        fields,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn test_state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn set_field(state: &mut AppState, field: Field, text: &str) {
        let input = state.inputs.get_mut(field);
        input.text = text.to_string();
        input.cursor = input.text.len();
    }

    fn fill_valid(state: &mut AppState) {
        set_field(state, Field::Name, "Al");
        set_field(state, Field::Email, "a@b.co");
        set_field(state, Field::Phone, "");
        set_field(state, Field::Message, "Hello there, this works");
    }

    fn settle(state: &mut AppState, attempt: u64, outcome: Result<(), SubmitError>) -> Vec<Action> {
        handle_event(state, AppEvent::SubmitSettled { attempt, outcome })
    }

    #[test]
    fn test_valid_submit_enters_submitting() {
        let mut state = test_state();
        fill_valid(&mut state);

        let actions = try_submit(&mut state);
        assert_eq!(state.status, SubmissionStatus::Submitting);
        assert!(state.errors.is_empty());
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            Action::SubmitForm { attempt, fields } => {
                assert_eq!(*attempt, 1);
                assert_eq!(fields.name, "Al");
                assert_eq!(fields.phone, "");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_submit_stays_put_and_keeps_errors() {
        let mut state = test_state();
        set_field(&mut state, Field::Name, "");
        set_field(&mut state, Field::Email, "bad");
        set_field(&mut state, Field::Phone, "123");
        set_field(&mut state, Field::Message, "short");

        let actions = try_submit(&mut state);
        assert!(actions.is_empty());
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert_eq!(state.errors.len(), 4);
        assert_eq!(state.attempt, 0);
    }

    #[test]
    fn test_editing_does_not_clear_errors() {
        let mut state = test_state();
        try_submit(&mut state);
        assert!(!state.errors.is_empty());

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        assert!(!state.errors.is_empty());
        assert_eq!(state.inputs.get(Field::Name).text, "x");
    }

    #[test]
    fn test_success_clears_fields_and_arms_timer() {
        let mut state = test_state();
        fill_valid(&mut state);
        try_submit(&mut state);

        let actions = settle(&mut state, 1, Ok(()));
        assert_eq!(state.status, SubmissionStatus::Success);
        assert_eq!(state.fields(), crate::form::FormFields::default());
        assert_eq!(actions, vec![Action::ArmDismissTimer { attempt: 1 }]);
        assert_eq!(state.history.len(), 1);
        assert!(state.history[0].accepted);
    }

    #[test]
    fn test_rejection_keeps_fields() {
        let mut state = test_state();
        fill_valid(&mut state);
        let before = state.fields();
        try_submit(&mut state);

        let actions = settle(&mut state, 1, Err(SubmitError::Rejected { status: 500 }));
        assert_eq!(state.status, SubmissionStatus::Error);
        assert_eq!(state.fields(), before);
        assert_eq!(actions, vec![Action::ArmDismissTimer { attempt: 1 }]);
        assert!(!state.history[0].accepted);
    }

    #[test]
    fn test_dismiss_returns_to_idle() {
        let mut state = test_state();
        fill_valid(&mut state);
        try_submit(&mut state);
        settle(&mut state, 1, Ok(()));

        handle_event(&mut state, AppEvent::DismissToast { attempt: 1 });
        assert_eq!(state.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_stale_dismiss_cannot_clobber_newer_attempt() {
        let mut state = test_state();
        fill_valid(&mut state);
        try_submit(&mut state);
        settle(&mut state, 1, Err(SubmitError::Rejected { status: 503 }));

        // Second attempt supersedes the first before its timer fires.
        fill_valid(&mut state);
        try_submit(&mut state);
        assert_eq!(state.attempt, 2);
        assert_eq!(state.status, SubmissionStatus::Submitting);

        handle_event(&mut state, AppEvent::DismissToast { attempt: 1 });
        assert_eq!(state.status, SubmissionStatus::Submitting);

        settle(&mut state, 2, Ok(()));
        handle_event(&mut state, AppEvent::DismissToast { attempt: 2 });
        assert_eq!(state.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_resubmit_while_in_flight_is_noop() {
        let mut state = test_state();
        fill_valid(&mut state);
        let first = try_submit(&mut state);
        assert_eq!(first.len(), 1);

        let second = try_submit(&mut state);
        assert!(second.is_empty());
        assert_eq!(state.attempt, 1);

        // Enter on the submit trigger is equally suppressed.
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let third = handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        assert!(third.is_empty());
        assert_eq!(state.attempt, 1);
    }

    #[test]
    fn test_resubmit_allowed_from_error_status() {
        let mut state = test_state();
        fill_valid(&mut state);
        try_submit(&mut state);
        settle(&mut state, 1, Err(SubmitError::Rejected { status: 500 }));
        assert_eq!(state.status, SubmissionStatus::Error);

        let actions = try_submit(&mut state);
        assert_eq!(actions.len(), 1);
        assert_eq!(state.attempt, 2);
        assert_eq!(state.status, SubmissionStatus::Submitting);
    }

    #[test]
    fn test_fields_stay_editable_while_submitting() {
        let mut state = test_state();
        fill_valid(&mut state);
        try_submit(&mut state);

        state.focus = Focus::Field(Field::Name);
        let key = KeyEvent::new(KeyCode::Char('!'), KeyModifiers::NONE);
        handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        assert_eq!(state.inputs.get(Field::Name).text, "Al!");
        assert_eq!(state.status, SubmissionStatus::Submitting);
    }

    #[test]
    fn test_focus_cycles_through_fields_and_trigger() {
        let mut state = test_state();
        assert_eq!(state.focus, Focus::Field(Field::Name));
        for _ in 0..4 {
            state.cycle_focus();
        }
        assert_eq!(state.focus, Focus::Submit);
        state.cycle_focus();
        assert_eq!(state.focus, Focus::Field(Field::Name));
    }
}
