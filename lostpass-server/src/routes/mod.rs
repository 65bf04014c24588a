//! HTTP routes for the reference host

mod reset;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use lostpass_core::{AccountStore, AuditLog, FlowStore, NotificationService};

use crate::state::AppState;

/// Create the router with all routes
pub fn create_router<A, F, N, G>(state: Arc<AppState<A, F, N, G>>) -> Router
where
    A: AccountStore + 'static,
    F: FlowStore + 'static,
    N: NotificationService + 'static,
    G: AuditLog + 'static,
{
    Router::new()
        .route("/reset", get(reset::form_view))
        .route("/reset/name", post(reset::submit_name))
        .route("/reset/choice", post(reset::submit_choice))
        .route("/reset/cancel", post(reset::cancel))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
