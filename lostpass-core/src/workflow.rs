//! The reset request state machine.

use serde::{Deserialize, Serialize};

use crate::audit::AuditLog;
use crate::candidates::CandidateSet;
use crate::disambiguation::{self, ChoicePrompt};
use crate::dispatch::ResetDispatcher;
use crate::error::{FlowError, FlowResult};
use crate::notify::NotificationService;
use crate::resolver::AccountResolver;
use crate::store::AccountStore;
use crate::token::{CandidateToken, TokenSalt};

/// Who is asking for the reset.
#[derive(Debug, Clone, PartialEq)]
pub enum Requester {
    Anonymous,
    /// A logged-in user. Their session email is the only identity they may
    /// request a reset for; any submitted name is ignored.
    Authenticated { email: String },
}

impl Requester {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Requester::Authenticated { .. })
    }
}

/// Where a flow currently stands. A flow with no saved state is at
/// `AwaitingInput`; completion and cancellation both return there, so the
/// machine never needs terminal states of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum WorkflowState {
    /// Waiting for a username or email address.
    #[default]
    AwaitingInput,
    /// Several accounts matched; waiting for the requester to pick one.
    AwaitingDisambiguation {
        input: String,
        candidates: CandidateSet,
    },
}

/// What the requester submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A username or email address.
    Name { name: String },
    /// A token picked from a disambiguation prompt.
    Choice { token: CandidateToken },
    /// Abandon the flow.
    Cancel,
}

/// What a successful step produced. `InstructionsSent` deliberately carries
/// no account data: which account received the mail stays out of responses.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    InstructionsSent,
    ChoiceRequired(ChoicePrompt),
    Cancelled,
}

/// The state to continue from plus the outcome to report.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub state: WorkflowState,
    pub outcome: StepOutcome,
}

/// Drives one reset flow through its states.
///
/// The workflow itself is pure: it takes the current state and a submission
/// and returns the next state, leaving persistence to the caller. Errors
/// never produce a new state, so a failed step leaves the flow exactly
/// where it was.
pub struct ResetWorkflow<'a, A, N, G>
where
    A: AccountStore + ?Sized,
    N: NotificationService + ?Sized,
    G: AuditLog + ?Sized,
{
    accounts: &'a A,
    notifier: &'a N,
    audit: &'a G,
    salt: &'a TokenSalt,
    default_language: &'a str,
}

impl<'a, A, N, G> ResetWorkflow<'a, A, N, G>
where
    A: AccountStore + ?Sized,
    N: NotificationService + ?Sized,
    G: AuditLog + ?Sized,
{
    pub fn new(
        accounts: &'a A,
        notifier: &'a N,
        audit: &'a G,
        salt: &'a TokenSalt,
        default_language: &'a str,
    ) -> Self {
        Self {
            accounts,
            notifier,
            audit,
            salt,
            default_language,
        }
    }

    /// Apply one submission to the flow.
    ///
    /// Cancelling is accepted at any point. A name is only accepted while
    /// awaiting input and a choice only while awaiting disambiguation;
    /// anything else is `FlowError::WrongStep`.
    pub fn step(
        &self,
        requester: &Requester,
        state: &WorkflowState,
        submission: Submission,
    ) -> FlowResult<StepResult> {
        match (state, submission) {
            (_, Submission::Cancel) => Ok(StepResult {
                state: WorkflowState::AwaitingInput,
                outcome: StepOutcome::Cancelled,
            }),
            (WorkflowState::AwaitingInput, Submission::Name { name }) => {
                self.begin(requester, &name)
            }
            (
                WorkflowState::AwaitingDisambiguation { candidates, .. },
                Submission::Choice { token },
            ) => {
                let account = disambiguation::choose(candidates, &token)?;
                self.dispatcher().dispatch(account)?;
                Ok(StepResult {
                    state: WorkflowState::AwaitingInput,
                    outcome: StepOutcome::InstructionsSent,
                })
            }
            (WorkflowState::AwaitingInput, Submission::Choice { .. })
            | (WorkflowState::AwaitingDisambiguation { .. }, Submission::Name { .. }) => {
                Err(FlowError::WrongStep)
            }
        }
    }

    fn begin(&self, requester: &Requester, name: &str) -> FlowResult<StepResult> {
        let (input, authenticated) = match requester {
            Requester::Authenticated { email } => (email.as_str(), true),
            Requester::Anonymous => (name, false),
        };

        let resolver = AccountResolver::new(self.accounts, self.salt);
        let candidates = resolver.resolve(input, authenticated)?;

        if let Some(only) = candidates.single() {
            self.dispatcher().dispatch(&only.account)?;
            return Ok(StepResult {
                state: WorkflowState::AwaitingInput,
                outcome: StepOutcome::InstructionsSent,
            });
        }

        let input = input.trim().to_string();
        let prompt = disambiguation::present(&input, &candidates);
        Ok(StepResult {
            state: WorkflowState::AwaitingDisambiguation { input, candidates },
            outcome: StepOutcome::ChoiceRequired(prompt),
        })
    }

    fn dispatcher(&self) -> ResetDispatcher<'a, N, G> {
        ResetDispatcher::new(self.notifier, self.audit, self.default_language)
    }
}
