//! HTTP surface for the sales-operations backend.
//!
//! Exposes the chat endpoint, advanced analytics, entity CRUD, dashboard
//! charts, and health over axum. Store absence is a first-class degraded
//! mode: chat and the roster endpoint fall back to static content instead
//! of erroring.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use session::{SessionStore, TurnRecord};
pub use state::AppState;
