//! Presentation-layer description of the reset form.

use serde::Serialize;

use crate::disambiguation::{self, ChoicePrompt};
use crate::workflow::{Requester, WorkflowState};

/// What the form should show for a given requester and state. This is a
/// description for the presentation layer, not rendered markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum FormView {
    /// Ask for a username or email address. For a logged-in requester the
    /// field is locked to their own email address.
    NameEntry { locked_value: Option<String> },
    /// Ask the requester to pick one of the matched accounts.
    AccountChoice { prompt: ChoicePrompt },
}

impl FormView {
    pub fn for_state(requester: &Requester, state: &WorkflowState) -> Self {
        match state {
            WorkflowState::AwaitingInput => {
                let locked_value = match requester {
                    Requester::Authenticated { email } => Some(email.clone()),
                    Requester::Anonymous => None,
                };
                FormView::NameEntry { locked_value }
            }
            WorkflowState::AwaitingDisambiguation { input, candidates } => {
                FormView::AccountChoice {
                    prompt: disambiguation::present(input, candidates),
                }
            }
        }
    }
}
