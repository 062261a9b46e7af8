//! Route handler functions for all API endpoints.
//!
//! Each handler extracts its JSON body or path parameters via axum
//! extractors, interacts with AppState services, and returns JSON.
//! Degraded-store behavior: chat, the roster list, advanced analytics,
//! and the dashboard serve fallback content when the database is absent;
//! writes return 503.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use salescope_agents::{respond, AdvancedAnalytics, AgentKind};
use salescope_chart::render_dashboard;
use salescope_core::types::{
    ConversationEntry, Dealer, Lead, LoginSession, Meeting, SalesRecord, Salesperson,
};
use salescope_storage::{
    ConversationRepository, Database, DealerRepository, LeadRepository, LoginSessionRepository,
    MeetingRepository, SalesRecordRepository, SalespersonRepository,
};

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_agent_type")]
    pub agent_type: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

fn default_agent_type() -> String {
    "manager".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SalespersonCreate {
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub gps_location: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub monthly_target: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct DealerCreate {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_dealer_status")]
    pub status: String,
}

fn default_dealer_status() -> String {
    "active".to_string()
}

#[derive(Debug, Deserialize)]
pub struct MeetingCreate {
    pub salesperson_id: Uuid,
    #[serde(default)]
    pub dealer_id: Option<Uuid>,
    #[serde(default)]
    pub notes: String,
    pub outcome: String,
    #[serde(default)]
    pub follow_up_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
    pub duration_minutes: i64,
}

#[derive(Debug, Deserialize)]
pub struct LeadCreate {
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub source: String,
    #[serde(default = "default_lead_status")]
    pub status: String,
    #[serde(default = "default_lead_score")]
    pub score: i64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub assigned_to: Option<Uuid>,
}

fn default_lead_status() -> String {
    "new".to_string()
}

fn default_lead_score() -> i64 {
    50
}

#[derive(Debug, Deserialize)]
pub struct LoginSessionCreate {
    pub salesperson_id: Uuid,
    pub login_time: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub device_info: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginSessionLogout {
    pub logout_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SalesRecordCreate {
    pub salesperson_id: Uuid,
    pub sale_amount: f64,
    pub product_name: String,
    pub customer_name: String,
    pub sale_date: DateTime<Utc>,
    #[serde(default = "default_commission_rate")]
    pub commission_rate: f64,
}

fn default_commission_rate() -> f64 {
    0.10
}

// =============================================================================
// Response types
// =============================================================================

/// A (name, value) record in chat responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub agent_type: String,
    pub session_id: String,
    pub charts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<SeriesPoint>>,
}

/// The raw advanced-analytics result: data stays as (label, value) pairs.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdvancedAnalyticsResponse {
    pub response: String,
    pub charts: Vec<String>,
    pub data: Vec<(String, f64)>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub sessions: usize,
    pub database: String,
}

// =============================================================================
// Chat
// =============================================================================

/// POST /chat - dispatch a message to the selected responder.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".to_string()));
    }
    if request.message.len() > state.config.chat.max_message_length {
        return Err(ApiError::BadRequest(format!(
            "message exceeds maximum length of {} characters",
            state.config.chat.max_message_length
        )));
    }

    // Resolve or create the session id; it is always echoed back so the
    // client can resume the same log.
    let session_id = request
        .session_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    state.sessions.get_or_create(&session_id);

    // Unknown tags fall back to the manager; the resolved tag is echoed.
    let kind = AgentKind::from_tag(&request.agent_type);

    let reply = respond(kind, &request.message, state.database.as_deref());

    // Best-effort persistence of the text exchange; failure never fails
    // the request.
    if let Some(db) = &state.database {
        let repo = ConversationRepository::new(Arc::clone(db));
        let entry =
            ConversationEntry::new(&session_id, &request.message, &reply.text, kind.as_str());
        if let Err(e) = repo.save(&entry) {
            warn!(error = %e, "Could not persist conversation entry");
        }
    }

    // The in-memory log is appended regardless of persistence outcome.
    state
        .sessions
        .append_exchange(&session_id, &request.message, &reply.text, kind.as_str());

    let data = reply.data.map(|pairs| {
        pairs
            .into_iter()
            .map(|(name, value)| SeriesPoint { name, value })
            .collect()
    });

    Ok(Json(ChatResponse {
        response: reply.text,
        agent_type: kind.as_str().to_string(),
        session_id,
        charts: reply.charts,
        data,
    }))
}

/// POST /analytics/advanced - the raw advanced-analytics structure.
pub async fn advanced_analytics(
    Json(request): Json<ChatRequest>,
) -> Result<Json<AdvancedAnalyticsResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".to_string()));
    }

    let report = AdvancedAnalytics::new().process(&request.message);
    Ok(Json(AdvancedAnalyticsResponse {
        response: report.response,
        charts: report.charts,
        data: report.data,
    }))
}

// =============================================================================
// Salespersons
// =============================================================================

/// GET /salespersons - the roster, or the fixed fallback list when the
/// store is unavailable or errors. Always HTTP 200.
pub async fn list_salespersons(State(state): State<AppState>) -> Json<Vec<Salesperson>> {
    if let Some(db) = &state.database {
        let repo = SalespersonRepository::new(Arc::clone(db));
        match repo.list() {
            Ok(roster) => return Json(roster),
            Err(e) => warn!(error = %e, "Roster query failed; serving fallback"),
        }
    }
    Json(fallback_roster())
}

/// POST /salespersons
pub async fn create_salesperson(
    State(state): State<AppState>,
    Json(body): Json<SalespersonCreate>,
) -> Result<Json<Salesperson>, ApiError> {
    let db = require_db(&state)?;
    let mut sp = Salesperson::new(
        &body.name,
        &body.region,
        &body.gps_location,
        &body.phone,
        &body.email,
    );
    sp.total_revenue = body.total_revenue;
    sp.monthly_target = body.monthly_target;
    sp.is_active = body.is_active;

    SalespersonRepository::new(db).save(&sp)?;
    Ok(Json(sp))
}

/// GET /salespersons/{id}
pub async fn get_salesperson(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Salesperson>, ApiError> {
    let db = require_db(&state)?;
    SalespersonRepository::new(db)
        .find_by_id(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("salesperson {} not found", id)))
}

/// The six-entry roster served when the store is unreachable.
fn fallback_roster() -> Vec<Salesperson> {
    let rows: [(&str, &str, &str, &str, &str, f64, f64, bool); 6] = [
        ("Alice Johnson", "North", "12.9716,77.5946", "+1-555-0101", "alice@company.com", 45000.0, 15000.0, true),
        ("Bob Smith", "South", "13.0827,80.2707", "+1-555-0102", "bob@company.com", 38500.0, 12000.0, true),
        ("Carol Williams", "East", "22.5726,88.3639", "+1-555-0103", "carol@company.com", 52000.0, 18000.0, true),
        ("David Brown", "West", "19.0760,72.8777", "+1-555-0104", "david@company.com", 29000.0, 10000.0, false),
        ("Emily Davis", "Central", "23.2599,77.4126", "+1-555-0105", "emily@company.com", 61000.0, 20000.0, true),
        ("Frank Miller", "Northeast", "26.1445,91.7362", "+1-555-0106", "frank@company.com", 33500.0, 14000.0, true),
    ];

    rows.iter()
        .map(|(name, region, gps, phone, email, revenue, target, active)| {
            let mut sp = Salesperson::new(name, region, gps, phone, email);
            sp.total_revenue = *revenue;
            sp.monthly_target = *target;
            sp.is_active = *active;
            sp
        })
        .collect()
}

// =============================================================================
// Dealers
// =============================================================================

/// GET /dealers
pub async fn list_dealers(State(state): State<AppState>) -> Result<Json<Vec<Dealer>>, ApiError> {
    let db = require_db(&state)?;
    Ok(Json(DealerRepository::new(db).list()?))
}

/// POST /dealers
pub async fn create_dealer(
    State(state): State<AppState>,
    Json(body): Json<DealerCreate>,
) -> Result<Json<Dealer>, ApiError> {
    let db = require_db(&state)?;
    let mut dealer = Dealer::new(
        &body.name,
        &body.location,
        &body.contact_person,
        &body.phone,
        &body.email,
    );
    dealer.status = body.status;

    DealerRepository::new(db).save(&dealer)?;
    Ok(Json(dealer))
}

/// GET /dealers/{id}
pub async fn get_dealer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Dealer>, ApiError> {
    let db = require_db(&state)?;
    DealerRepository::new(db)
        .find_by_id(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("dealer {} not found", id)))
}

// =============================================================================
// Meetings
// =============================================================================

/// GET /meetings
pub async fn list_meetings(State(state): State<AppState>) -> Result<Json<Vec<Meeting>>, ApiError> {
    let db = require_db(&state)?;
    Ok(Json(MeetingRepository::new(db).list()?))
}

/// POST /meetings
pub async fn create_meeting(
    State(state): State<AppState>,
    Json(body): Json<MeetingCreate>,
) -> Result<Json<Meeting>, ApiError> {
    let db = require_db(&state)?;
    let meeting = Meeting {
        id: Uuid::new_v4(),
        salesperson_id: body.salesperson_id,
        dealer_id: body.dealer_id,
        notes: body.notes,
        outcome: body.outcome,
        follow_up_date: body.follow_up_date,
        location: body.location,
        duration_minutes: body.duration_minutes,
        created_at: Utc::now(),
    };

    MeetingRepository::new(db).save(&meeting)?;
    Ok(Json(meeting))
}

// =============================================================================
// Leads
// =============================================================================

/// GET /leads
pub async fn list_leads(State(state): State<AppState>) -> Result<Json<Vec<Lead>>, ApiError> {
    let db = require_db(&state)?;
    Ok(Json(LeadRepository::new(db).list()?))
}

/// POST /leads
pub async fn create_lead(
    State(state): State<AppState>,
    Json(body): Json<LeadCreate>,
) -> Result<Json<Lead>, ApiError> {
    let db = require_db(&state)?;
    let lead = Lead {
        id: Uuid::new_v4(),
        name: body.name,
        company: body.company,
        phone: body.phone,
        email: body.email,
        location: body.location,
        source: body.source,
        status: body.status,
        score: body.score,
        notes: body.notes,
        assigned_to: body.assigned_to,
        created_at: Utc::now(),
    };

    LeadRepository::new(db).save(&lead)?;
    Ok(Json(lead))
}

// =============================================================================
// Login sessions
// =============================================================================

/// GET /login-sessions
pub async fn list_login_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<LoginSession>>, ApiError> {
    let db = require_db(&state)?;
    Ok(Json(LoginSessionRepository::new(db).list()?))
}

/// POST /login-sessions
pub async fn create_login_session(
    State(state): State<AppState>,
    Json(body): Json<LoginSessionCreate>,
) -> Result<Json<LoginSession>, ApiError> {
    let db = require_db(&state)?;
    let session = LoginSession {
        id: Uuid::new_v4(),
        salesperson_id: body.salesperson_id,
        login_time: body.login_time,
        logout_time: None,
        session_duration_minutes: None,
        location: body.location,
        device_info: body.device_info,
        created_at: Utc::now(),
    };

    LoginSessionRepository::new(db).save(&session)?;
    Ok(Json(session))
}

/// PUT /login-sessions/{id}/logout
pub async fn logout_login_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<LoginSessionLogout>,
) -> Result<Json<LoginSession>, ApiError> {
    let db = require_db(&state)?;
    LoginSessionRepository::new(db)
        .close(id, body.logout_time)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("login session {} not found", id)))
}

// =============================================================================
// Sales records
// =============================================================================

/// GET /sales-records
pub async fn list_sales_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<SalesRecord>>, ApiError> {
    let db = require_db(&state)?;
    Ok(Json(SalesRecordRepository::new(db).list()?))
}

/// POST /sales-records
pub async fn create_sales_record(
    State(state): State<AppState>,
    Json(body): Json<SalesRecordCreate>,
) -> Result<Json<SalesRecord>, ApiError> {
    let db = require_db(&state)?;
    let record = SalesRecordRepository::new(db).create(
        body.salesperson_id,
        body.sale_amount,
        &body.product_name,
        &body.customer_name,
        body.sale_date,
        body.commission_rate,
    )?;
    Ok(Json(record))
}

// =============================================================================
// Dashboard & health
// =============================================================================

/// GET /dashboard/charts - four named charts; a failed chart is an empty
/// string, never a failed response.
pub async fn dashboard_charts(State(state): State<AppState>) -> Json<HashMap<String, String>> {
    Json(render_dashboard(&state.renderer))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        sessions: state.sessions.session_count(),
        database: if state.database.is_some() {
            "available".to_string()
        } else {
            "degraded".to_string()
        },
    })
}

// =============================================================================
// Helpers
// =============================================================================

fn require_db(state: &AppState) -> Result<Arc<Database>, ApiError> {
    state
        .database
        .as_ref()
        .map(Arc::clone)
        .ok_or_else(|| ApiError::ServiceUnavailable("persistence layer unavailable".to_string()))
}
