//! Integration tests for the HTTP surface.
//!
//! Covers the chat/session contract, degraded-store fallbacks, the
//! advanced analytics payload, entity CRUD, and the dashboard map. Each
//! test builds its own state with an in-memory database (or none, for
//! degraded-mode tests).

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use uuid::Uuid;

use salescope_api::create_router;
use salescope_api::handlers::{AdvancedAnalyticsResponse, ChatResponse, HealthResponse};
use salescope_api::state::AppState;
use salescope_core::config::SalescopeConfig;
use salescope_core::types::{LoginSession, Meeting, SalesRecord, Salesperson};
use salescope_storage::{ConversationRepository, Database, SalespersonRepository};

// =============================================================================
// Helpers
// =============================================================================

/// State with a small chart size so renders stay fast, backed by an
/// in-memory database.
fn make_state() -> AppState {
    let mut config = SalescopeConfig::default();
    config.chart.width = 400;
    config.chart.height = 300;
    let db = Arc::new(Database::in_memory().unwrap());
    AppState::new(config, Some(db))
}

/// State with no database at all (degraded mode).
fn make_degraded_state() -> AppState {
    let mut config = SalescopeConfig::default();
    config.chart.width = 400;
    config.chart.height = 300;
    AppState::new(config, None)
}

fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

fn put_json(uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), 16 * 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

/// Insert a salesperson directly and return it.
fn insert_salesperson(state: &AppState, name: &str, revenue: f64) -> Salesperson {
    let db = state.database.as_ref().unwrap();
    let repo = SalespersonRepository::new(Arc::clone(db));
    let mut sp = Salesperson::new(name, "North", "12.97,77.59", "+1-555-0101", "x@company.com");
    sp.total_revenue = revenue;
    repo.save(&sp).unwrap();
    sp
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = create_router(make_state());
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.database, "available");
}

#[tokio::test]
async fn test_health_reports_degraded_database() {
    let app = create_router(make_degraded_state());
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.database, "degraded");
}

// =============================================================================
// Chat & sessions
// =============================================================================

#[tokio::test]
async fn test_chat_without_session_id_returns_one() {
    let state = make_state();
    let app = create_router(state.clone());

    let resp = app
        .oneshot(post_json("/chat", r#"{"message": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let chat: ChatResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(!chat.session_id.is_empty());
    assert_eq!(chat.agent_type, "manager");
    assert!(!chat.response.is_empty());
    assert_eq!(state.sessions.turn_count(&chat.session_id), 2);
}

#[tokio::test]
async fn test_chat_session_log_grows_by_two_per_call() {
    let state = make_state();
    let app = create_router(state.clone());

    let resp = app
        .clone()
        .oneshot(post_json("/chat", r#"{"message": "first"}"#))
        .await
        .unwrap();
    let chat: ChatResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    let session_id = chat.session_id.clone();
    assert_eq!(state.sessions.turn_count(&session_id), 2);

    let body = format!(
        r#"{{"message": "second", "session_id": "{}"}}"#,
        session_id
    );
    let resp = app.oneshot(post_json("/chat", &body)).await.unwrap();
    let chat: ChatResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();

    // Same session resumed, two more turns appended.
    assert_eq!(chat.session_id, session_id);
    assert_eq!(state.sessions.turn_count(&session_id), 4);
    assert_eq!(state.sessions.session_count(), 1);
}

#[tokio::test]
async fn test_chat_unknown_agent_falls_back_to_manager() {
    let app = create_router(make_state());
    let resp = app
        .oneshot(post_json(
            "/chat",
            r#"{"message": "hello", "agent_type": "astrologer"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let chat: ChatResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(chat.agent_type, "manager");
}

#[tokio::test]
async fn test_chat_without_database_still_succeeds() {
    let app = create_router(make_degraded_state());
    let resp = app
        .oneshot(post_json("/chat", r#"{"message": "status please"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let chat: ChatResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(chat.response.contains("trouble accessing"));
}

#[tokio::test]
async fn test_chat_persists_conversation_entry() {
    let state = make_state();
    let app = create_router(state.clone());

    let resp = app
        .oneshot(post_json(
            "/chat",
            r#"{"message": "hello", "session_id": "fixed-session"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let db = state.database.as_ref().unwrap();
    let repo = ConversationRepository::new(Arc::clone(db));
    assert_eq!(repo.count_by_session("fixed-session").unwrap(), 1);

    let entries = repo.list_by_session("fixed-session").unwrap();
    assert_eq!(entries[0].user_message, "hello");
    assert_eq!(entries[0].agent_type, "manager");
}

#[tokio::test]
async fn test_chat_empty_message_is_bad_request() {
    let app = create_router(make_state());
    let resp = app
        .oneshot(post_json("/chat", r#"{"message": "   "}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_analytics_returns_charts_and_named_data() {
    let app = create_router(make_state());
    let resp = app
        .oneshot(post_json(
            "/chat",
            r#"{"message": "show me a revenue chart", "agent_type": "analytics"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let chat: ChatResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(chat.agent_type, "analytics");
    assert_eq!(chat.charts.len(), 1);
    assert!(chat.charts[0].starts_with("data:image/png;base64,"));

    // (label, value) pairs are relabeled into {name, value} records.
    let data = chat.data.unwrap();
    assert_eq!(data[0].name, "Emily Davis");
    assert_eq!(data[0].value, 61000.0);
}

// =============================================================================
// Advanced analytics
// =============================================================================

#[tokio::test]
async fn test_advanced_analytics_exact_statistics() {
    let app = create_router(make_state());
    let resp = app
        .oneshot(post_json(
            "/analytics/advanced",
            r#"{"message": "revenue performance"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let report: AdvancedAnalyticsResponse =
        serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(report.response.contains("$259,000"));
    assert!(report.response.contains("Emily Davis leads with $61,000"));
    assert_eq!(report.data.len(), 6);
    assert_eq!(report.data[0].0, "Emily Davis");
}

#[tokio::test]
async fn test_advanced_analytics_works_without_database() {
    let app = create_router(make_degraded_state());
    let resp = app
        .oneshot(post_json(
            "/analytics/advanced",
            r#"{"message": "show team revenue chart"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let report: AdvancedAnalyticsResponse =
        serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(report.charts.len(), 1);
}

// =============================================================================
// Salespersons
// =============================================================================

#[tokio::test]
async fn test_salespersons_fallback_without_database() {
    let app = create_router(make_degraded_state());
    let resp = app.oneshot(get("/salespersons")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let roster: Vec<Salesperson> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(roster.len(), 6);
    assert!(roster.iter().any(|sp| sp.name == "Emily Davis"));
}

#[tokio::test]
async fn test_salespersons_reads_database_when_available() {
    let state = make_state();
    insert_salesperson(&state, "Grace Lee", 70000.0);

    let app = create_router(state);
    let resp = app.oneshot(get("/salespersons")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let roster: Vec<Salesperson> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "Grace Lee");
}

#[tokio::test]
async fn test_create_and_fetch_salesperson() {
    let app = create_router(make_state());

    let resp = app
        .clone()
        .oneshot(post_json(
            "/salespersons",
            r#"{"name": "Grace Lee", "region": "North", "email": "grace@company.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Salesperson = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(created.is_active);

    let resp = app
        .oneshot(get(&format!("/salespersons/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Salesperson = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn test_get_salesperson_not_found() {
    let app = create_router(make_state());
    let resp = app
        .oneshot(get(&format!("/salespersons/{}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_salesperson_without_database_is_unavailable() {
    let app = create_router(make_degraded_state());
    let resp = app
        .oneshot(post_json(
            "/salespersons",
            r#"{"name": "Grace Lee", "region": "North"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// =============================================================================
// Entity CRUD
// =============================================================================

#[tokio::test]
async fn test_create_dealer_defaults_to_active() {
    let app = create_router(make_state());
    let resp = app
        .oneshot(post_json(
            "/dealers",
            r#"{"name": "Tech Solutions Inc", "location": "Bangalore"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn test_create_meeting_for_existing_salesperson() {
    let state = make_state();
    let sp = insert_salesperson(&state, "Alice Johnson", 45000.0);

    let app = create_router(state);
    let body = format!(
        r#"{{"salesperson_id": "{}", "outcome": "successful", "notes": "demo went well", "duration_minutes": 90}}"#,
        sp.id
    );
    let resp = app.clone().oneshot(post_json("/meetings", &body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let meeting: Meeting = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(meeting.outcome, "successful");
    assert!(meeting.dealer_id.is_none());

    let resp = app.oneshot(get("/meetings")).await.unwrap();
    let meetings: Vec<Meeting> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(meetings.len(), 1);
}

#[tokio::test]
async fn test_create_lead_applies_defaults() {
    let app = create_router(make_state());
    let resp = app
        .oneshot(post_json(
            "/leads",
            r#"{"name": "Manufacturing Corp", "company": "ManufaCorp Ltd"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body["status"], "new");
    assert_eq!(body["score"], 50);
}

#[tokio::test]
async fn test_login_session_logout_derives_duration() {
    let state = make_state();
    let sp = insert_salesperson(&state, "Alice Johnson", 45000.0);

    let app = create_router(state);
    let body = format!(
        r#"{{"salesperson_id": "{}", "login_time": "2026-08-07T08:00:00Z", "device_info": "Desktop - Chrome"}}"#,
        sp.id
    );
    let resp = app
        .clone()
        .oneshot(post_json("/login-sessions", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let session: LoginSession = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(session.logout_time.is_none());

    let resp = app
        .oneshot(put_json(
            &format!("/login-sessions/{}/logout", session.id),
            r#"{"logout_time": "2026-08-07T12:30:00Z"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let closed: LoginSession = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(closed.session_duration_minutes, Some(270));
}

#[tokio::test]
async fn test_create_sales_record_computes_commission() {
    let state = make_state();
    let sp = insert_salesperson(&state, "Alice Johnson", 45000.0);

    let app = create_router(state);
    let body = format!(
        r#"{{"salesperson_id": "{}", "sale_amount": 12000.0, "product_name": "CRM Software", "customer_name": "SuperMart", "sale_date": "2026-08-01T00:00:00Z"}}"#,
        sp.id
    );
    let resp = app.oneshot(post_json("/sales-records", &body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let record: SalesRecord = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(record.commission_rate, 0.10);
    assert_eq!(record.commission_amount, 1200.0);
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn test_dashboard_has_exactly_four_charts() {
    let app = create_router(make_state());
    let resp = app.oneshot(get("/dashboard/charts")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let charts: HashMap<String, String> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(charts.len(), 4);
    for key in ["revenue_chart", "meetings_chart", "leads_chart", "regional_chart"] {
        assert!(
            charts.get(key).is_some_and(|uri| uri.starts_with("data:image/png;base64,")),
            "chart {} missing or not a data URI",
            key
        );
    }
}

#[tokio::test]
async fn test_dashboard_works_without_database() {
    let app = create_router(make_degraded_state());
    let resp = app.oneshot(get("/dashboard/charts")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let charts: HashMap<String, String> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(charts.len(), 4);
}
