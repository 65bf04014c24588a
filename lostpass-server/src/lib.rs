//! Lostpass Reference Host
//!
//! A small axum host that drives the `lostpass-core` reset flow through an
//! HTTP request/response cycle. It supplies in-memory implementations of
//! the core's collaborator traits, a console notifier, and a tracing-backed
//! audit log; rendering, translation, and real mail delivery stay out.

pub mod audit;
pub mod config;
pub mod error;
pub mod notify;
pub mod routes;
pub mod state;
pub mod store;

pub use audit::TracingAuditLog;
pub use config::{Config, SeedAccount};
pub use error::ApiError;
pub use notify::ConsoleNotifier;
pub use state::AppState;
pub use store::{InMemoryAccountStore, InMemoryFlowStore, InsertError};
