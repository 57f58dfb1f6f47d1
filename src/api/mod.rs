//! HTTP adapter
//!
//! Exposes the ledger over JSON/HTTP with axum. Records are serialized as flat
//! objects; money amounts are decimal strings.

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{status_for, ApiError};
pub use routes::{create_router, AppState};
