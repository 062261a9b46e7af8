//! Repository implementations for SQLite-backed persistence.
//!
//! One repository per entity, operating on the Database struct with raw
//! SQL. Row-to-entity conversion lives in helper functions at the bottom.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rusqlite::OptionalExtension;
use uuid::Uuid;

use salescope_core::error::SalescopeError;
use salescope_core::types::{
    ConversationEntry, Dealer, Lead, LoginSession, Meeting, SalesRecord, Salesperson,
};

use crate::db::Database;

/// Repository for salesperson records.
pub struct SalespersonRepository {
    db: Arc<Database>,
}

impl SalespersonRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Store a new salesperson.
    pub fn save(&self, sp: &Salesperson) -> Result<(), SalescopeError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO salespersons
                 (id, name, region, gps_location, phone, email, total_revenue, monthly_target, is_active, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                rusqlite::params![
                    sp.id.to_string(),
                    sp.name,
                    sp.region,
                    sp.gps_location,
                    sp.phone,
                    sp.email,
                    sp.total_revenue,
                    sp.monthly_target,
                    sp.is_active as i32,
                    sp.created_at.timestamp(),
                ],
            )
            .map_err(|e| SalescopeError::Storage(format!("Failed to save salesperson: {}", e)))?;
            Ok(())
        })
    }

    /// Find a salesperson by ID.
    pub fn find_by_id(&self, id: Uuid) -> Result<Option<Salesperson>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, name, region, gps_location, phone, email, total_revenue, monthly_target, is_active, created_at
                     FROM salespersons WHERE id = ?1",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let result = stmt
                .query_row(rusqlite::params![id.to_string()], |row| {
                    Ok(row_to_salesperson(row))
                })
                .optional()
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            match result {
                Some(sp) => Ok(Some(sp?)),
                None => Ok(None),
            }
        })
    }

    /// List the full roster, oldest first.
    pub fn list(&self) -> Result<Vec<Salesperson>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, name, region, gps_location, phone, email, total_revenue, monthly_target, is_active, created_at
                     FROM salespersons ORDER BY created_at ASC, name ASC",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map([], |row| Ok(row_to_salesperson(row)))
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row.map_err(|e| SalescopeError::Storage(e.to_string()))??);
            }
            Ok(out)
        })
    }

    /// Count salespersons.
    pub fn count(&self) -> Result<u64, SalescopeError> {
        self.db.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM salespersons", [], |row| row.get(0))
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;
            Ok(count as u64)
        })
    }

    /// Sum of accumulated revenue across the roster.
    pub fn total_revenue(&self) -> Result<f64, SalescopeError> {
        self.db.with_conn(|conn| {
            let total: f64 = conn
                .query_row(
                    "SELECT COALESCE(SUM(total_revenue), 0) FROM salespersons",
                    [],
                    |row| row.get(0),
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;
            Ok(total)
        })
    }

    /// Revenue series: (name, total_revenue) pairs, highest first.
    ///
    /// This is the narrow read interface the analytics responder is
    /// written against.
    pub fn revenue_series(&self) -> Result<Vec<(String, f64)>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT name, total_revenue FROM salespersons ORDER BY total_revenue DESC",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map([], |row| {
                    let name: String = row.get(0)?;
                    let revenue: f64 = row.get(1)?;
                    Ok((name, revenue))
                })
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row.map_err(|e| SalescopeError::Storage(e.to_string()))?);
            }
            Ok(out)
        })
    }

    /// Delete a salesperson by ID.
    pub fn delete(&self, id: Uuid) -> Result<(), SalescopeError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "DELETE FROM salespersons WHERE id = ?1",
                rusqlite::params![id.to_string()],
            )
            .map_err(|e| SalescopeError::Storage(format!("Failed to delete salesperson: {}", e)))?;
            Ok(())
        })
    }
}

/// Repository for dealer records.
pub struct DealerRepository {
    db: Arc<Database>,
}

impl DealerRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn save(&self, dealer: &Dealer) -> Result<(), SalescopeError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO dealers (id, name, location, contact_person, phone, email, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                rusqlite::params![
                    dealer.id.to_string(),
                    dealer.name,
                    dealer.location,
                    dealer.contact_person,
                    dealer.phone,
                    dealer.email,
                    dealer.status,
                    dealer.created_at.timestamp(),
                ],
            )
            .map_err(|e| SalescopeError::Storage(format!("Failed to save dealer: {}", e)))?;
            Ok(())
        })
    }

    pub fn find_by_id(&self, id: Uuid) -> Result<Option<Dealer>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, name, location, contact_person, phone, email, status, created_at
                     FROM dealers WHERE id = ?1",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let result = stmt
                .query_row(rusqlite::params![id.to_string()], |row| {
                    Ok(row_to_dealer(row))
                })
                .optional()
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            match result {
                Some(dealer) => Ok(Some(dealer?)),
                None => Ok(None),
            }
        })
    }

    pub fn list(&self) -> Result<Vec<Dealer>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, name, location, contact_person, phone, email, status, created_at
                     FROM dealers ORDER BY created_at ASC, name ASC",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map([], |row| Ok(row_to_dealer(row)))
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row.map_err(|e| SalescopeError::Storage(e.to_string()))??);
            }
            Ok(out)
        })
    }

    pub fn count(&self) -> Result<u64, SalescopeError> {
        self.db.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM dealers", [], |row| row.get(0))
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;
            Ok(count as u64)
        })
    }
}

/// Repository for meeting records.
pub struct MeetingRepository {
    db: Arc<Database>,
}

impl MeetingRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn save(&self, meeting: &Meeting) -> Result<(), SalescopeError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO meetings
                 (id, salesperson_id, dealer_id, notes, outcome, follow_up_date, location, duration_minutes, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                rusqlite::params![
                    meeting.id.to_string(),
                    meeting.salesperson_id.to_string(),
                    meeting.dealer_id.map(|id| id.to_string()),
                    meeting.notes,
                    meeting.outcome,
                    meeting.follow_up_date.map(|d| d.timestamp()),
                    meeting.location,
                    meeting.duration_minutes,
                    meeting.created_at.timestamp(),
                ],
            )
            .map_err(|e| SalescopeError::Storage(format!("Failed to save meeting: {}", e)))?;
            Ok(())
        })
    }

    pub fn list(&self) -> Result<Vec<Meeting>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, salesperson_id, dealer_id, notes, outcome, follow_up_date, location, duration_minutes, created_at
                     FROM meetings ORDER BY created_at DESC",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map([], |row| Ok(row_to_meeting(row)))
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row.map_err(|e| SalescopeError::Storage(e.to_string()))??);
            }
            Ok(out)
        })
    }

    /// Meetings held by one salesperson, newest first.
    pub fn list_by_salesperson(&self, salesperson_id: Uuid) -> Result<Vec<Meeting>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, salesperson_id, dealer_id, notes, outcome, follow_up_date, location, duration_minutes, created_at
                     FROM meetings WHERE salesperson_id = ?1 ORDER BY created_at DESC",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map(rusqlite::params![salesperson_id.to_string()], |row| {
                    Ok(row_to_meeting(row))
                })
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row.map_err(|e| SalescopeError::Storage(e.to_string()))??);
            }
            Ok(out)
        })
    }
}

/// Repository for lead records.
pub struct LeadRepository {
    db: Arc<Database>,
}

impl LeadRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn save(&self, lead: &Lead) -> Result<(), SalescopeError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO leads
                 (id, name, company, phone, email, location, source, status, score, notes, assigned_to, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                rusqlite::params![
                    lead.id.to_string(),
                    lead.name,
                    lead.company,
                    lead.phone,
                    lead.email,
                    lead.location,
                    lead.source,
                    lead.status,
                    lead.score,
                    lead.notes,
                    lead.assigned_to.map(|id| id.to_string()),
                    lead.created_at.timestamp(),
                ],
            )
            .map_err(|e| SalescopeError::Storage(format!("Failed to save lead: {}", e)))?;
            Ok(())
        })
    }

    pub fn list(&self) -> Result<Vec<Lead>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, name, company, phone, email, location, source, status, score, notes, assigned_to, created_at
                     FROM leads ORDER BY score DESC, created_at ASC",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map([], |row| Ok(row_to_lead(row)))
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row.map_err(|e| SalescopeError::Storage(e.to_string()))??);
            }
            Ok(out)
        })
    }

    pub fn count(&self) -> Result<u64, SalescopeError> {
        self.db.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM leads", [], |row| row.get(0))
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;
            Ok(count as u64)
        })
    }
}

/// Repository for salesperson login sessions.
pub struct LoginSessionRepository {
    db: Arc<Database>,
}

impl LoginSessionRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn save(&self, session: &LoginSession) -> Result<(), SalescopeError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO login_sessions
                 (id, salesperson_id, login_time, logout_time, session_duration_minutes, location, device_info, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                rusqlite::params![
                    session.id.to_string(),
                    session.salesperson_id.to_string(),
                    session.login_time.timestamp(),
                    session.logout_time.map(|t| t.timestamp()),
                    session.session_duration_minutes,
                    session.location,
                    session.device_info,
                    session.created_at.timestamp(),
                ],
            )
            .map_err(|e| SalescopeError::Storage(format!("Failed to save login session: {}", e)))?;
            Ok(())
        })
    }

    pub fn find_by_id(&self, id: Uuid) -> Result<Option<LoginSession>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, salesperson_id, login_time, logout_time, session_duration_minutes, location, device_info, created_at
                     FROM login_sessions WHERE id = ?1",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let result = stmt
                .query_row(rusqlite::params![id.to_string()], |row| {
                    Ok(row_to_login_session(row))
                })
                .optional()
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            match result {
                Some(session) => Ok(Some(session?)),
                None => Ok(None),
            }
        })
    }

    pub fn list(&self) -> Result<Vec<LoginSession>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, salesperson_id, login_time, logout_time, session_duration_minutes, location, device_info, created_at
                     FROM login_sessions ORDER BY login_time DESC",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map([], |row| Ok(row_to_login_session(row)))
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row.map_err(|e| SalescopeError::Storage(e.to_string()))??);
            }
            Ok(out)
        })
    }

    /// Close an open session: set the logout time and derive the duration.
    ///
    /// Returns the updated row, or None if the session does not exist.
    pub fn close(
        &self,
        id: Uuid,
        logout_time: DateTime<Utc>,
    ) -> Result<Option<LoginSession>, SalescopeError> {
        let existing = match self.find_by_id(id)? {
            Some(session) => session,
            None => return Ok(None),
        };

        let duration_minutes = (logout_time - existing.login_time).num_minutes().max(0);

        self.db.with_conn(|conn| {
            conn.execute(
                "UPDATE login_sessions
                 SET logout_time = ?1, session_duration_minutes = ?2
                 WHERE id = ?3",
                rusqlite::params![logout_time.timestamp(), duration_minutes, id.to_string()],
            )
            .map_err(|e| SalescopeError::Storage(format!("Failed to close login session: {}", e)))?;
            Ok(())
        })?;

        self.find_by_id(id)
    }
}

/// Repository for sales records.
pub struct SalesRecordRepository {
    db: Arc<Database>,
}

impl SalesRecordRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Create and store a sales record.
    ///
    /// The commission amount is computed here, once, at write time; stored
    /// values are never re-validated on read.
    pub fn create(
        &self,
        salesperson_id: Uuid,
        sale_amount: f64,
        product_name: &str,
        customer_name: &str,
        sale_date: DateTime<Utc>,
        commission_rate: f64,
    ) -> Result<SalesRecord, SalescopeError> {
        let record = SalesRecord {
            id: Uuid::new_v4(),
            salesperson_id,
            sale_amount,
            product_name: product_name.to_string(),
            customer_name: customer_name.to_string(),
            sale_date,
            commission_rate,
            commission_amount: sale_amount * commission_rate,
            created_at: Utc::now(),
        };
        self.save(&record)?;
        Ok(record)
    }

    pub fn save(&self, record: &SalesRecord) -> Result<(), SalescopeError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO sales_records
                 (id, salesperson_id, sale_amount, product_name, customer_name, sale_date, commission_rate, commission_amount, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                rusqlite::params![
                    record.id.to_string(),
                    record.salesperson_id.to_string(),
                    record.sale_amount,
                    record.product_name,
                    record.customer_name,
                    record.sale_date.timestamp(),
                    record.commission_rate,
                    record.commission_amount,
                    record.created_at.timestamp(),
                ],
            )
            .map_err(|e| SalescopeError::Storage(format!("Failed to save sales record: {}", e)))?;
            Ok(())
        })
    }

    pub fn list(&self) -> Result<Vec<SalesRecord>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, salesperson_id, sale_amount, product_name, customer_name, sale_date, commission_rate, commission_amount, created_at
                     FROM sales_records ORDER BY sale_date DESC",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map([], |row| Ok(row_to_sales_record(row)))
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row.map_err(|e| SalescopeError::Storage(e.to_string()))??);
            }
            Ok(out)
        })
    }
}

/// Repository for the append-only conversation audit log.
pub struct ConversationRepository {
    db: Arc<Database>,
}

impl ConversationRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn save(&self, entry: &ConversationEntry) -> Result<(), SalescopeError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO conversation_history
                 (id, session_id, user_message, agent_response, agent_type, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    entry.id.to_string(),
                    entry.session_id,
                    entry.user_message,
                    entry.agent_response,
                    entry.agent_type,
                    entry.created_at.timestamp(),
                ],
            )
            .map_err(|e| SalescopeError::Storage(format!("Failed to save conversation: {}", e)))?;
            Ok(())
        })
    }

    /// All entries for a session, oldest first.
    pub fn list_by_session(&self, session_id: &str) -> Result<Vec<ConversationEntry>, SalescopeError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, session_id, user_message, agent_response, agent_type, created_at
                     FROM conversation_history WHERE session_id = ?1 ORDER BY created_at ASC, rowid ASC",
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let rows = stmt
                .query_map(rusqlite::params![session_id], |row| {
                    Ok(row_to_conversation_entry(row))
                })
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row.map_err(|e| SalescopeError::Storage(e.to_string()))??);
            }
            Ok(out)
        })
    }

    pub fn count_by_session(&self, session_id: &str) -> Result<u64, SalescopeError> {
        self.db.with_conn(|conn| {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM conversation_history WHERE session_id = ?1",
                    rusqlite::params![session_id],
                    |row| row.get(0),
                )
                .map_err(|e| SalescopeError::Storage(e.to_string()))?;
            Ok(count as u64)
        })
    }
}

// ============================================================================
// Helper functions for row-to-entity conversion.
// ============================================================================

fn get_column<T: rusqlite::types::FromSql>(
    row: &rusqlite::Row<'_>,
    idx: usize,
) -> Result<T, SalescopeError> {
    row.get(idx)
        .map_err(|e| SalescopeError::Storage(e.to_string()))
}

fn parse_uuid(value: &str) -> Result<Uuid, SalescopeError> {
    Uuid::parse_str(value).map_err(|e| SalescopeError::Storage(format!("Invalid UUID: {}", e)))
}

fn epoch_to_utc(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
}

fn row_to_salesperson(row: &rusqlite::Row<'_>) -> Result<Salesperson, SalescopeError> {
    let id_str: String = get_column(row, 0)?;
    let is_active: i32 = get_column(row, 8)?;
    let created_at: i64 = get_column(row, 9)?;

    Ok(Salesperson {
        id: parse_uuid(&id_str)?,
        name: get_column(row, 1)?,
        region: get_column(row, 2)?,
        gps_location: get_column(row, 3)?,
        phone: get_column(row, 4)?,
        email: get_column(row, 5)?,
        total_revenue: get_column(row, 6)?,
        monthly_target: get_column(row, 7)?,
        is_active: is_active != 0,
        created_at: epoch_to_utc(created_at),
    })
}

fn row_to_dealer(row: &rusqlite::Row<'_>) -> Result<Dealer, SalescopeError> {
    let id_str: String = get_column(row, 0)?;
    let created_at: i64 = get_column(row, 7)?;

    Ok(Dealer {
        id: parse_uuid(&id_str)?,
        name: get_column(row, 1)?,
        location: get_column(row, 2)?,
        contact_person: get_column(row, 3)?,
        phone: get_column(row, 4)?,
        email: get_column(row, 5)?,
        status: get_column(row, 6)?,
        created_at: epoch_to_utc(created_at),
    })
}

fn row_to_meeting(row: &rusqlite::Row<'_>) -> Result<Meeting, SalescopeError> {
    let id_str: String = get_column(row, 0)?;
    let salesperson_str: String = get_column(row, 1)?;
    let dealer_str: Option<String> = get_column(row, 2)?;
    let follow_up: Option<i64> = get_column(row, 5)?;
    let created_at: i64 = get_column(row, 8)?;

    Ok(Meeting {
        id: parse_uuid(&id_str)?,
        salesperson_id: parse_uuid(&salesperson_str)?,
        dealer_id: dealer_str.as_deref().map(parse_uuid).transpose()?,
        notes: get_column(row, 3)?,
        outcome: get_column(row, 4)?,
        follow_up_date: follow_up.map(epoch_to_utc),
        location: get_column(row, 6)?,
        duration_minutes: get_column(row, 7)?,
        created_at: epoch_to_utc(created_at),
    })
}

fn row_to_lead(row: &rusqlite::Row<'_>) -> Result<Lead, SalescopeError> {
    let id_str: String = get_column(row, 0)?;
    let assigned_str: Option<String> = get_column(row, 10)?;
    let created_at: i64 = get_column(row, 11)?;

    Ok(Lead {
        id: parse_uuid(&id_str)?,
        name: get_column(row, 1)?,
        company: get_column(row, 2)?,
        phone: get_column(row, 3)?,
        email: get_column(row, 4)?,
        location: get_column(row, 5)?,
        source: get_column(row, 6)?,
        status: get_column(row, 7)?,
        score: get_column(row, 8)?,
        notes: get_column(row, 9)?,
        assigned_to: assigned_str.as_deref().map(parse_uuid).transpose()?,
        created_at: epoch_to_utc(created_at),
    })
}

fn row_to_login_session(row: &rusqlite::Row<'_>) -> Result<LoginSession, SalescopeError> {
    let id_str: String = get_column(row, 0)?;
    let salesperson_str: String = get_column(row, 1)?;
    let login_time: i64 = get_column(row, 2)?;
    let logout_time: Option<i64> = get_column(row, 3)?;
    let created_at: i64 = get_column(row, 7)?;

    Ok(LoginSession {
        id: parse_uuid(&id_str)?,
        salesperson_id: parse_uuid(&salesperson_str)?,
        login_time: epoch_to_utc(login_time),
        logout_time: logout_time.map(epoch_to_utc),
        session_duration_minutes: get_column(row, 4)?,
        location: get_column(row, 5)?,
        device_info: get_column(row, 6)?,
        created_at: epoch_to_utc(created_at),
    })
}

fn row_to_sales_record(row: &rusqlite::Row<'_>) -> Result<SalesRecord, SalescopeError> {
    let id_str: String = get_column(row, 0)?;
    let salesperson_str: String = get_column(row, 1)?;
    let sale_date: i64 = get_column(row, 5)?;
    let created_at: i64 = get_column(row, 8)?;

    Ok(SalesRecord {
        id: parse_uuid(&id_str)?,
        salesperson_id: parse_uuid(&salesperson_str)?,
        sale_amount: get_column(row, 2)?,
        product_name: get_column(row, 3)?,
        customer_name: get_column(row, 4)?,
        sale_date: epoch_to_utc(sale_date),
        commission_rate: get_column(row, 6)?,
        commission_amount: get_column(row, 7)?,
        created_at: epoch_to_utc(created_at),
    })
}

fn row_to_conversation_entry(row: &rusqlite::Row<'_>) -> Result<ConversationEntry, SalescopeError> {
    let id_str: String = get_column(row, 0)?;
    let created_at: i64 = get_column(row, 5)?;

    Ok(ConversationEntry {
        id: parse_uuid(&id_str)?,
        session_id: get_column(row, 1)?,
        user_message: get_column(row, 2)?,
        agent_response: get_column(row, 3)?,
        agent_type: get_column(row, 4)?,
        created_at: epoch_to_utc(created_at),
    })
}

// =============================================================================
// Tests
// =============================================================================
