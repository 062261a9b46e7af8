//! Database schema migrations.
//!
//! Applies the initial schema: salespersons, dealers, meetings, leads,
//! login_sessions, sales_records, conversation_history, and the
//! schema_migrations tracking table.

use rusqlite::Connection;
use tracing::info;

use salescope_core::error::SalescopeError;

/// Run all pending database migrations.
///
/// Currently implements the initial schema (version 1). Future migrations
/// can be added by checking the current version and applying incremental
/// changes.
pub fn run_migrations(conn: &Connection) -> Result<(), SalescopeError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            applied_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(|e| SalescopeError::Storage(format!("Failed to create migrations table: {}", e)))?;

    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| SalescopeError::Storage(format!("Failed to query migration version: {}", e)))?;

    if current_version < 1 {
        apply_v1(conn)?;
        info!("Applied migration v1: initial_schema");
    }

    Ok(())
}

/// Version 1: Initial schema.
fn apply_v1(conn: &Connection) -> Result<(), SalescopeError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS salespersons (
            id              TEXT PRIMARY KEY NOT NULL,
            name            TEXT NOT NULL,
            region          TEXT NOT NULL,
            gps_location    TEXT NOT NULL DEFAULT '',
            phone           TEXT NOT NULL DEFAULT '',
            email           TEXT NOT NULL DEFAULT '',
            total_revenue   REAL NOT NULL DEFAULT 0,
            monthly_target  REAL NOT NULL DEFAULT 0,
            is_active       INTEGER NOT NULL DEFAULT 1,
            created_at      INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        CREATE TABLE IF NOT EXISTS dealers (
            id              TEXT PRIMARY KEY NOT NULL,
            name            TEXT NOT NULL,
            location        TEXT NOT NULL DEFAULT '',
            contact_person  TEXT NOT NULL DEFAULT '',
            phone           TEXT NOT NULL DEFAULT '',
            email           TEXT NOT NULL DEFAULT '',
            -- observed values: active, prospect, inactive
            status          TEXT NOT NULL DEFAULT 'active',
            created_at      INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        CREATE TABLE IF NOT EXISTS meetings (
            id               TEXT PRIMARY KEY NOT NULL,
            salesperson_id   TEXT NOT NULL REFERENCES salespersons(id),
            dealer_id        TEXT REFERENCES dealers(id),
            notes            TEXT NOT NULL DEFAULT '',
            -- observed values: successful, follow_up_needed, no_interest
            outcome          TEXT NOT NULL DEFAULT '',
            follow_up_date   INTEGER,
            location         TEXT NOT NULL DEFAULT '',
            duration_minutes INTEGER NOT NULL DEFAULT 0,
            created_at       INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_meetings_salesperson
            ON meetings (salesperson_id, created_at DESC);

        CREATE TABLE IF NOT EXISTS leads (
            id              TEXT PRIMARY KEY NOT NULL,
            name            TEXT NOT NULL,
            company         TEXT NOT NULL DEFAULT '',
            phone           TEXT NOT NULL DEFAULT '',
            email           TEXT NOT NULL DEFAULT '',
            location        TEXT NOT NULL DEFAULT '',
            source          TEXT NOT NULL DEFAULT '',
            -- observed values: new, qualified, contacted, converted
            status          TEXT NOT NULL DEFAULT 'new',
            score           INTEGER NOT NULL DEFAULT 50,
            notes           TEXT NOT NULL DEFAULT '',
            assigned_to     TEXT REFERENCES salespersons(id),
            created_at      INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_leads_assigned_to
            ON leads (assigned_to);

        CREATE TABLE IF NOT EXISTS login_sessions (
            id                        TEXT PRIMARY KEY NOT NULL,
            salesperson_id            TEXT NOT NULL REFERENCES salespersons(id),
            login_time                INTEGER NOT NULL,
            logout_time               INTEGER,
            session_duration_minutes  INTEGER,
            location                  TEXT,
            device_info               TEXT,
            created_at                INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_login_sessions_salesperson
            ON login_sessions (salesperson_id, login_time DESC);

        CREATE TABLE IF NOT EXISTS sales_records (
            id                TEXT PRIMARY KEY NOT NULL,
            salesperson_id    TEXT NOT NULL REFERENCES salespersons(id),
            sale_amount       REAL NOT NULL,
            product_name      TEXT NOT NULL,
            customer_name     TEXT NOT NULL,
            sale_date         INTEGER NOT NULL,
            commission_rate   REAL NOT NULL DEFAULT 0.1,
            commission_amount REAL NOT NULL,
            created_at        INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_sales_records_salesperson
            ON sales_records (salesperson_id, sale_date DESC);

        CREATE TABLE IF NOT EXISTS conversation_history (
            id              TEXT PRIMARY KEY NOT NULL,
            session_id      TEXT NOT NULL,
            user_message    TEXT NOT NULL,
            agent_response  TEXT NOT NULL,
            agent_type      TEXT NOT NULL,
            created_at      INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_conversation_session
            ON conversation_history (session_id, created_at ASC);

        INSERT INTO schema_migrations (version, name) VALUES (1, 'initial_schema');
        ",
    )
    .map_err(|e| SalescopeError::Storage(format!("Failed to apply v1 schema: {}", e)))?;

    Ok(())
}
