use crate::app::event::AttemptId;
use crate::form::FormFields;

#[derive(Debug, PartialEq)]
pub enum Action {
    SubmitForm { attempt: AttemptId, fields: FormFields },
    ArmDismissTimer { attempt: AttemptId },
    Quit,
}
