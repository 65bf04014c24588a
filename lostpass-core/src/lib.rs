//! Lostpass Core Library
//!
//! Implements the "forgot password" request flow, independent of any
//! web framework:
//! - A submitted name resolves to accounts by email first, then username
//! - Ambiguous matches become a tokenized choice the requester picks from
//! - The chosen account gets reset instructions in its preferred language
//!
//! The crate deals only in traits for account lookup, flow storage,
//! notification delivery and auditing; hosts supply the implementations.

pub mod account;
pub mod audit;
pub mod candidates;
pub mod disambiguation;
pub mod dispatch;
pub mod error;
pub mod flow;
pub mod form;
pub mod notify;
pub mod resolver;
pub mod session;
pub mod store;
pub mod token;
pub mod workflow;

pub use account::{Account, AccountId, AccountStatus};
pub use audit::{AuditEvent, AuditLog};
pub use candidates::{Candidate, CandidateSet};
pub use disambiguation::{AccountChoice, ChoiceLabel, ChoicePrompt, choose, present};
pub use dispatch::ResetDispatcher;
pub use error::{FlowError, FlowResult};
pub use flow::ResetFlow;
pub use form::FormView;
pub use notify::NotificationService;
pub use resolver::AccountResolver;
pub use session::{FlowId, FlowStore};
pub use store::AccountStore;
pub use token::{CandidateToken, TokenSalt, derive_token};
pub use workflow::{
    Requester, ResetWorkflow, StepOutcome, StepResult, Submission, WorkflowState,
};
