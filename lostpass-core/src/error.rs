//! Error types for the reset flow.

use thiserror::Error;

/// Errors surfaced at the form-submission boundary.
///
/// All of them are recoverable: when a step fails, no transition has
/// happened and the flow keeps its previous state.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The input matched no active account, by email or by username.
    /// This is the one place the flow may reveal non-existence; every other
    /// message stays silent about which accounts exist.
    #[error("Sorry, {input} is not recognized as a username or an e-mail address.")]
    NotFound { input: String },

    /// The submitted token matched no persisted candidate (tampered with,
    /// or left over from an expired flow).
    #[error("An illegal choice has been detected. Please contact the site administrator.")]
    InvalidChoice,

    /// The notification collaborator could not send the instructions. The
    /// detail is for logs; hosts should report a generic failure.
    #[error("Failed to send password reset instructions: {0}")]
    DispatchFailed(String),

    /// The submission does not belong to the step the flow is in.
    #[error("Submission does not match the current step of this request")]
    WrongStep,

    /// A storage collaborator failed.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for flow operations.
pub type FlowResult<T> = Result<T, FlowError>;
