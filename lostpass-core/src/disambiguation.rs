//! Choosing between multiple matched accounts.

use serde::Serialize;

use crate::account::Account;
use crate::candidates::CandidateSet;
use crate::error::{FlowError, FlowResult};
use crate::token::CandidateToken;

/// How a candidate is described to the requester. The label repeats what
/// the requester already typed, never the other identifier, so presenting
/// a choice leaks nothing about the matched accounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChoiceLabel {
    /// The input matched this account's registered email address.
    ByEmail { email: String },
    /// The input matched this account's username.
    ByUsername { username: String },
}

/// One selectable account, identified only by its token and label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountChoice {
    pub token: CandidateToken,
    pub label: ChoiceLabel,
}

/// The disambiguation question put to the requester.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoicePrompt {
    /// The trimmed input the choices were resolved from.
    pub input: String,
    /// Choices in resolution order.
    pub choices: Vec<AccountChoice>,
    /// Preselected choice: the first candidate, when there is one.
    pub default_token: Option<CandidateToken>,
}

/// Build the prompt for a set of candidates.
///
/// A candidate whose email address equals the input (ignoring ASCII case)
/// is labeled by that email; any other candidate matched by username and is
/// labeled so. The first candidate is preselected.
pub fn present(input: &str, candidates: &CandidateSet) -> ChoicePrompt {
    let choices = candidates
        .iter()
        .map(|candidate| {
            let label = if candidate.account.email.eq_ignore_ascii_case(input) {
                ChoiceLabel::ByEmail {
                    email: candidate.account.email.clone(),
                }
            } else {
                ChoiceLabel::ByUsername {
                    username: candidate.account.username.clone(),
                }
            };
            AccountChoice {
                token: candidate.token.clone(),
                label,
            }
        })
        .collect();

    ChoicePrompt {
        input: input.to_string(),
        choices,
        default_token: candidates.first().map(|c| c.token.clone()),
    }
}

/// Resolve a submitted token back to its account.
///
/// Returns `FlowError::InvalidChoice` when the token does not belong to
/// this candidate set, whether it was tampered with or minted under a
/// different salt.
pub fn choose<'c>(candidates: &'c CandidateSet, token: &CandidateToken) -> FlowResult<&'c Account> {
    candidates
        .get(token)
        .map(|candidate| &candidate.account)
        .ok_or(FlowError::InvalidChoice)
}
