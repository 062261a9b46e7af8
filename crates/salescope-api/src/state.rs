//! Application state shared across all route handlers.
//!
//! AppState holds the configuration, the (possibly absent) database, the
//! in-memory session store, and the chart renderer. It is passed to
//! handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use salescope_chart::ChartRenderer;
use salescope_core::config::SalescopeConfig;
use salescope_storage::Database;

use crate::session::SessionStore;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks. The
/// database is optional: `None` is the degraded mode in which endpoints
/// serve fallback content instead of failing.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<SalescopeConfig>,
    /// SQLite database, absent when the store could not be opened.
    pub database: Option<Arc<Database>>,
    /// In-memory conversation logs.
    pub sessions: Arc<SessionStore>,
    /// Chart renderer sized from the configuration.
    pub renderer: ChartRenderer,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState.
    pub fn new(config: SalescopeConfig, database: Option<Arc<Database>>) -> Self {
        let renderer = ChartRenderer::new(config.chart.width, config.chart.height);
        Self {
            config: Arc::new(config),
            database,
            sessions: Arc::new(SessionStore::new()),
            renderer,
            start_time: Instant::now(),
        }
    }
}
