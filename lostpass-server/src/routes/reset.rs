//! Password reset flow endpoints

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};
use uuid::Uuid;

use lostpass_core::{
    AccountStore, AuditLog, CandidateToken, ChoicePrompt, FlowId, FlowStore, FormView,
    NotificationService, Requester, StepOutcome, Submission,
};

use crate::error::ApiError;
use crate::state::AppState;

const FLOW_COOKIE: &str = "lostpass_flow";

/// Header the surrounding framework sets for logged-in requesters. Session
/// handling itself lives outside this host.
const AUTHENTICATED_EMAIL_HEADER: &str = "x-authenticated-email";

/// The one user-facing success message for a dispatched reset. Identical on
/// every path so responses never hint at which account was matched.
const INSTRUCTIONS_SENT: &str = "Further instructions have been sent to your e-mail address.";

const CANCELLED: &str = "The password reset request has been cancelled.";

#[derive(Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct ChoiceRequest {
    pub token: String,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<ChoicePrompt>,
}

impl From<StepOutcome> for SubmitResponse {
    fn from(outcome: StepOutcome) -> Self {
        match outcome {
            StepOutcome::InstructionsSent => Self {
                success: true,
                message: Some(INSTRUCTIONS_SENT.to_string()),
                prompt: None,
            },
            StepOutcome::ChoiceRequired(prompt) => Self {
                success: true,
                message: None,
                prompt: Some(prompt),
            },
            StepOutcome::Cancelled => Self {
                success: true,
                message: Some(CANCELLED.to_string()),
                prompt: None,
            },
        }
    }
}

/// Flow id from the `lostpass_flow` cookie, minting one on first contact.
fn flow_id(cookies: &Cookies) -> FlowId {
    if let Some(cookie) = cookies.get(FLOW_COOKIE) {
        return FlowId::new(cookie.value().to_string());
    }
    let id = Uuid::new_v4().to_string();
    let cookie = Cookie::build((FLOW_COOKIE, id.clone()))
        .path("/")
        .http_only(true)
        .build();
    cookies.add(cookie);
    FlowId::new(id)
}

/// Requester identity from the framework-injected header.
fn requester(headers: &HeaderMap) -> Requester {
    headers
        .get(AUTHENTICATED_EMAIL_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|email| Requester::Authenticated {
            email: email.to_string(),
        })
        .unwrap_or(Requester::Anonymous)
}

/// GET /reset
/// Describe the form for the flow's current step
pub async fn form_view<A, F, N, G>(
    State(state): State<Arc<AppState<A, F, N, G>>>,
    cookies: Cookies,
    headers: HeaderMap,
) -> Result<Json<FormView>, ApiError>
where
    A: AccountStore,
    F: FlowStore,
    N: NotificationService,
    G: AuditLog,
{
    let flow = flow_id(&cookies);
    let view = state.flow().view(&flow, &requester(&headers))?;
    Ok(Json(view))
}

/// POST /reset/name
/// Submit a username or email address
pub async fn submit_name<A, F, N, G>(
    State(state): State<Arc<AppState<A, F, N, G>>>,
    cookies: Cookies,
    headers: HeaderMap,
    Json(req): Json<NameRequest>,
) -> Result<Json<SubmitResponse>, ApiError>
where
    A: AccountStore,
    F: FlowStore,
    N: NotificationService,
    G: AuditLog,
{
    let flow = flow_id(&cookies);
    let outcome = state.flow().submit(
        &flow,
        &requester(&headers),
        Submission::Name { name: req.name },
    )?;
    Ok(Json(outcome.into()))
}

/// POST /reset/choice
/// Pick one of the matched accounts by its token
pub async fn submit_choice<A, F, N, G>(
    State(state): State<Arc<AppState<A, F, N, G>>>,
    cookies: Cookies,
    headers: HeaderMap,
    Json(req): Json<ChoiceRequest>,
) -> Result<Json<SubmitResponse>, ApiError>
where
    A: AccountStore,
    F: FlowStore,
    N: NotificationService,
    G: AuditLog,
{
    let flow = flow_id(&cookies);
    let outcome = state.flow().submit(
        &flow,
        &requester(&headers),
        Submission::Choice {
            token: CandidateToken(req.token),
        },
    )?;
    Ok(Json(outcome.into()))
}

/// POST /reset/cancel
/// Abandon the flow, discarding any stored state
pub async fn cancel<A, F, N, G>(
    State(state): State<Arc<AppState<A, F, N, G>>>,
    cookies: Cookies,
    headers: HeaderMap,
) -> Result<Json<SubmitResponse>, ApiError>
where
    A: AccountStore,
    F: FlowStore,
    N: NotificationService,
    G: AuditLog,
{
    let flow = flow_id(&cookies);
    let outcome = state
        .flow()
        .submit(&flow, &requester(&headers), Submission::Cancel)?;
    Ok(Json(outcome.into()))
}
