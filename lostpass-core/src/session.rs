//! Per-flow state storage contract.

use serde::{Deserialize, Serialize};

use crate::error::FlowResult;
use crate::workflow::WorkflowState;

/// Opaque identifier for one reset flow, typically bound to a browser
/// session by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowId(pub String);

impl FlowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for FlowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage for in-progress flow state.
///
/// A flow with no stored state is at the start of the workflow; `clear`
/// returns it there. Implementations may expire stored state at any time,
/// which the workflow tolerates by restarting the flow.
pub trait FlowStore: Send + Sync {
    /// Load the stored state for a flow, if any.
    fn load(&self, flow: &FlowId) -> FlowResult<Option<WorkflowState>>;

    /// Store the state for a flow, replacing any previous state.
    fn save(&self, flow: &FlowId, state: &WorkflowState) -> FlowResult<()>;

    /// Remove any stored state for a flow.
    fn clear(&self, flow: &FlowId) -> FlowResult<()>;
}
