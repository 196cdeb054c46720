use crate::app::event::AttemptId;
use crate::config::AppConfig;
use crate::form::{Field, FormFields};
use crate::form::validate::ValidationErrors;
use chrono::Local;

/// Lifecycle of a submission attempt. `Idle` is both the initial and the
/// long-run resting state; `Success`/`Error` are toast states that the
/// dismiss timer returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Derived flag the presentation layer uses to disable the trigger.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

/// One settled attempt, as shown in the submissions panel.
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub timestamp: String,
    pub summary: String,
    pub accepted: bool,
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// The editable form: one cursor-tracked input per field.
#[derive(Debug)]
pub struct FormInputs {
    name: InputState,
    email: InputState,
    phone: InputState,
    message: InputState,
}

impl FormInputs {
    pub fn new() -> Self {
        Self {
            name: InputState::new(),
            email: InputState::new(),
            phone: InputState::new(),
            message: InputState::new(),
        }
    }

    pub fn get(&self, field: Field) -> &InputState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut InputState {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    /// Current contents as the submission payload.
    pub fn snapshot(&self) -> FormFields {
        FormFields {
            name: self.name.text.clone(),
            email: self.email.text.clone(),
            phone: self.phone.text.clone(),
            message: self.message.text.clone(),
        }
    }

    pub fn clear(&mut self) {
        for field in Field::ALL {
            self.get_mut(field).clear();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Focus {
    pub fn field(&self) -> Option<Field> {
        match self {
            Focus::Field(f) => Some(*f),
            Focus::Submit => None,
        }
    }

    pub fn next(&self) -> Focus {
        match self {
            Focus::Field(Field::Name) => Focus::Field(Field::Email),
            Focus::Field(Field::Email) => Focus::Field(Field::Phone),
            Focus::Field(Field::Phone) => Focus::Field(Field::Message),
            Focus::Field(Field::Message) => Focus::Submit,
            Focus::Submit => Focus::Field(Field::Name),
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::Field(Field::Name) => Focus::Submit,
            Focus::Field(Field::Email) => Focus::Field(Field::Name),
            Focus::Field(Field::Phone) => Focus::Field(Field::Email),
            Focus::Field(Field::Message) => Focus::Field(Field::Phone),
            Focus::Submit => Focus::Field(Field::Message),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Focus::Field(Field::Name) => "NAME",
            Focus::Field(Field::Email) => "EMAIL",
            Focus::Field(Field::Phone) => "PHONE",
            Focus::Field(Field::Message) => "MESSAGE",
            Focus::Submit => "SUBMIT",
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub inputs: FormInputs,
    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
    /// Id of the latest accepted submission. Settle and dismiss events from
    /// older attempts are ignored against it.
    pub attempt: AttemptId,
    pub focus: Focus,
    pub history: Vec<SubmissionRecord>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            inputs: FormInputs::new(),
            errors: ValidationErrors::new(),
            status: SubmissionStatus::Idle,
            attempt: 0,
            focus: Focus::Field(Field::Name),
            history: Vec::new(),
            tick_count: 0,
            should_quit: false,
            dirty: true,
            timestamp_format,
        }
    }

    pub fn fields(&self) -> FormFields {
        self.inputs.snapshot()
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }

    pub fn record_submission(&mut self, accepted: bool, summary: String) {
        let record = SubmissionRecord {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            summary,
            accepted,
        };
        self.history.push(record);
        let max = self.config.ui.max_history;
        if self.history.len() > max {
            self.history.remove(0);
        }
    }

    pub fn status_line(&self) -> &'static str {
        match self.status {
            SubmissionStatus::Idle => "Ready",
            SubmissionStatus::Submitting => "Submitting...",
            SubmissionStatus::Success => "Submitted",
            SubmissionStatus::Error => "Failed",
        }
    }
}
