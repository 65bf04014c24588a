//! Session-bound flows: the workflow plus stored state.

use crate::audit::AuditLog;
use crate::form::FormView;
use crate::notify::NotificationService;
use crate::session::{FlowId, FlowStore};
use crate::store::AccountStore;
use crate::token::TokenSalt;
use crate::workflow::{Requester, ResetWorkflow, StepOutcome, Submission, WorkflowState};
use crate::error::FlowResult;

/// A `ResetWorkflow` wired to a `FlowStore`, so callers deal in flow ids
/// instead of explicit state values.
///
/// State is only persisted for flows that are mid-disambiguation; a flow
/// back at the start has its entry cleared rather than stored. Failed steps
/// leave storage untouched.
pub struct ResetFlow<'a, A, F, N, G>
where
    A: AccountStore + ?Sized,
    F: FlowStore + ?Sized,
    N: NotificationService + ?Sized,
    G: AuditLog + ?Sized,
{
    workflow: ResetWorkflow<'a, A, N, G>,
    flows: &'a F,
}

impl<'a, A, F, N, G> ResetFlow<'a, A, F, N, G>
where
    A: AccountStore + ?Sized,
    F: FlowStore + ?Sized,
    N: NotificationService + ?Sized,
    G: AuditLog + ?Sized,
{
    pub fn new(
        accounts: &'a A,
        flows: &'a F,
        notifier: &'a N,
        audit: &'a G,
        salt: &'a TokenSalt,
        default_language: &'a str,
    ) -> Self {
        Self {
            workflow: ResetWorkflow::new(accounts, notifier, audit, salt, default_language),
            flows,
        }
    }

    /// The current state of a flow. Unknown and expired flows are at the
    /// start of the workflow.
    pub fn state(&self, flow: &FlowId) -> FlowResult<WorkflowState> {
        Ok(self.flows.load(flow)?.unwrap_or_default())
    }

    /// Describe the form a requester should currently see.
    pub fn view(&self, flow: &FlowId, requester: &Requester) -> FlowResult<FormView> {
        let state = self.state(flow)?;
        Ok(FormView::for_state(requester, &state))
    }

    /// Apply one submission to a flow and persist the resulting state.
    pub fn submit(
        &self,
        flow: &FlowId,
        requester: &Requester,
        submission: Submission,
    ) -> FlowResult<StepOutcome> {
        let state = self.state(flow)?;
        let result = self.workflow.step(requester, &state, submission)?;

        match &result.state {
            WorkflowState::AwaitingInput => self.flows.clear(flow)?,
            state => self.flows.save(flow, state)?,
        }
        Ok(result.outcome)
    }
}
