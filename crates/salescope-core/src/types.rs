//! Shared domain types for the sales-operations backend.
//!
//! These records mirror the relational schema one-to-one. Status and
//! outcome tags are free-form strings; the observed vocabularies are
//! documented on each field but not enforced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of the sales team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salesperson {
    pub id: Uuid,
    pub name: String,
    pub region: String,
    /// "lat,lon" pair as captured by the field app.
    pub gps_location: String,
    pub phone: String,
    pub email: String,
    pub total_revenue: f64,
    pub monthly_target: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Salesperson {
    pub fn new(name: &str, region: &str, gps_location: &str, phone: &str, email: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            region: region.to_string(),
            gps_location: gps_location.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            total_revenue: 0.0,
            monthly_target: 0.0,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

/// A dealer the team sells through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dealer {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    /// Observed values: "active", "prospect", "inactive".
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Dealer {
    pub fn new(name: &str, location: &str, contact_person: &str, phone: &str, email: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            location: location.to_string(),
            contact_person: contact_person.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            status: "active".to_string(),
            created_at: Utc::now(),
        }
    }
}

/// A meeting held by a salesperson, optionally with a dealer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: Uuid,
    pub salesperson_id: Uuid,
    pub dealer_id: Option<Uuid>,
    pub notes: String,
    /// Observed values: "successful", "follow_up_needed", "no_interest".
    pub outcome: String,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub location: String,
    pub duration_minutes: i64,
    pub created_at: DateTime<Utc>,
}

/// A sales prospect, optionally assigned to a salesperson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub source: String,
    /// Observed values: "new", "qualified", "contacted", "converted".
    pub status: String,
    /// Conventionally 0-100; not enforced.
    pub score: i64,
    pub notes: String,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A login session recorded for a salesperson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginSession {
    pub id: Uuid,
    pub salesperson_id: Uuid,
    pub login_time: DateTime<Utc>,
    pub logout_time: Option<DateTime<Utc>>,
    /// Derived when the session is closed; None while open.
    pub session_duration_minutes: Option<i64>,
    pub location: Option<String>,
    pub device_info: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A closed sale attributed to a salesperson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    pub id: Uuid,
    pub salesperson_id: Uuid,
    pub sale_amount: f64,
    pub product_name: String,
    pub customer_name: String,
    pub sale_date: DateTime<Utc>,
    pub commission_rate: f64,
    /// Computed at write time as sale_amount * commission_rate.
    pub commission_amount: f64,
    pub created_at: DateTime<Utc>,
}

/// One chat exchange, persisted as an append-only audit row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub id: Uuid,
    pub session_id: String,
    pub user_message: String,
    pub agent_response: String,
    pub agent_type: String,
    pub created_at: DateTime<Utc>,
}

impl ConversationEntry {
    pub fn new(session_id: &str, user_message: &str, agent_response: &str, agent_type: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id: session_id.to_string(),
            user_message: user_message.to_string(),
            agent_response: agent_response.to_string(),
            agent_type: agent_type.to_string(),
            created_at: Utc::now(),
        }
    }
}
