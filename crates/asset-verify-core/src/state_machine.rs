use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Submitted,
}

impl fmt::Display for FormPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormPhase::Editing => "editing",
            FormPhase::Submitting => "submitting",
            FormPhase::Submitted => "submitted",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    BeginSubmit,
    SubmitSucceeded,
    SubmitFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal form transition: {from:?} --{action:?}-->")]
pub struct TransitionError {
    pub from: FormPhase,
    pub action: FormAction,
}

pub fn form_transition(from: FormPhase, action: FormAction) -> Result<FormPhase, TransitionError> {
    match (from, action) {
        (FormPhase::Editing, FormAction::BeginSubmit) => Ok(FormPhase::Submitting),
        (FormPhase::Submitting, FormAction::SubmitSucceeded) => Ok(FormPhase::Submitted),
        (FormPhase::Submitting, FormAction::SubmitFailed) => Ok(FormPhase::Editing),
        _ => Err(TransitionError { from, action }),
    }
}
