//! Demo-data seeding.
//!
//! Populates an empty database with a small sales team, dealers, meetings,
//! leads, and randomized login/sales history so the chat and analytics
//! endpoints have something to talk about.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use salescope_core::error::SalescopeError;
use salescope_core::types::{Dealer, Lead, LoginSession, Meeting, Salesperson};

use crate::db::Database;
use crate::repository::{
    DealerRepository, LeadRepository, LoginSessionRepository, MeetingRepository,
    SalesRecordRepository, SalespersonRepository,
};

/// Counts of rows created by a seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub salespersons: usize,
    pub dealers: usize,
    pub meetings: usize,
    pub leads: usize,
    pub login_sessions: usize,
    pub sales_records: usize,
}

const PRODUCTS: &[(&str, i64, i64)] = &[
    ("CRM Software", 5000, 15000),
    ("ERP System", 10000, 30000),
    ("Mobile App Development", 3000, 12000),
    ("Web Development", 2000, 8000),
    ("Database Solutions", 4000, 10000),
    ("Cloud Migration", 6000, 20000),
    ("AI Integration", 8000, 25000),
    ("Security Audit", 1500, 5000),
];

const CUSTOMERS: &[&str] = &[
    "Tech Solutions Inc",
    "Global Electronics",
    "Future Systems",
    "Smart Retail",
    "Digital Hub",
    "ManufaCorp Ltd",
    "TechStart Inc",
    "SuperMart",
    "Learning Academy",
    "Health Plus",
];

const DEVICES: &[&str] = &["Desktop", "Mobile", "Tablet"];
const BROWSERS: &[&str] = &["Chrome", "Firefox", "Safari"];

/// Seed the database with demo data.
///
/// No-op if salespersons already exist, so repeated runs stay idempotent.
pub fn seed_demo_data(db: &Arc<Database>) -> Result<SeedSummary, SalescopeError> {
    let sp_repo = SalespersonRepository::new(Arc::clone(db));
    if sp_repo.count()? > 0 {
        info!("Database already seeded; skipping");
        return Ok(SeedSummary::default());
    }

    let mut summary = SeedSummary::default();

    let salespersons = demo_salespersons();
    for sp in &salespersons {
        sp_repo.save(sp)?;
    }
    summary.salespersons = salespersons.len();

    let dealer_repo = DealerRepository::new(Arc::clone(db));
    let dealers = demo_dealers();
    for dealer in &dealers {
        dealer_repo.save(dealer)?;
    }
    summary.dealers = dealers.len();

    let meeting_repo = MeetingRepository::new(Arc::clone(db));
    let meetings = demo_meetings(&salespersons, &dealers);
    for meeting in &meetings {
        meeting_repo.save(meeting)?;
    }
    summary.meetings = meetings.len();

    let lead_repo = LeadRepository::new(Arc::clone(db));
    let leads = demo_leads(&salespersons);
    for lead in &leads {
        lead_repo.save(lead)?;
    }
    summary.leads = leads.len();

    let mut rng = rand::thread_rng();

    // Login sessions spread over the last 30 days.
    let session_repo = LoginSessionRepository::new(Arc::clone(db));
    for _ in 0..90 {
        let sp = salespersons.choose(&mut rng).expect("non-empty roster");
        let login_time = Utc::now() - Duration::days(rng.gen_range(0..=30));
        let duration_minutes: i64 = rng.gen_range(120..=480);
        let session = LoginSession {
            id: Uuid::new_v4(),
            salesperson_id: sp.id,
            login_time,
            logout_time: Some(login_time + Duration::minutes(duration_minutes)),
            session_duration_minutes: Some(duration_minutes),
            location: Some(sp.region.clone()),
            device_info: Some(format!(
                "{} - {}",
                DEVICES.choose(&mut rng).expect("non-empty"),
                BROWSERS.choose(&mut rng).expect("non-empty"),
            )),
            created_at: Utc::now(),
        };
        session_repo.save(&session)?;
        summary.login_sessions += 1;
    }

    // Sales records over the last 90 days.
    let record_repo = SalesRecordRepository::new(Arc::clone(db));
    for _ in 0..25 {
        let sp = salespersons.choose(&mut rng).expect("non-empty roster");
        let (product, min_price, max_price) = *PRODUCTS.choose(&mut rng).expect("non-empty");
        let sale_amount = rng.gen_range(min_price..=max_price) as f64;
        record_repo.create(
            sp.id,
            sale_amount,
            product,
            CUSTOMERS.choose(&mut rng).expect("non-empty"),
            Utc::now() - Duration::days(rng.gen_range(0..=90)),
            0.10,
        )?;
        summary.sales_records += 1;
    }

    info!(
        salespersons = summary.salespersons,
        dealers = summary.dealers,
        meetings = summary.meetings,
        leads = summary.leads,
        login_sessions = summary.login_sessions,
        sales_records = summary.sales_records,
        "Demo data seeded"
    );

    Ok(summary)
}

fn demo_salespersons() -> Vec<Salesperson> {
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

fn demo_dealers() -> Vec<Dealer> {
    let rows: [(&str, &str, &str, &str, &str, &str); 5] = [
        ("Tech Solutions Inc", "Bangalore", "John Doe", "+91-80-12345678", "john@techsolutions.com", "active"),
        ("Global Electronics", "Chennai", "Jane Smith", "+91-44-87654321", "jane@globalelectronics.com", "active"),
        ("Future Systems", "Mumbai", "Mike Wilson", "+91-22-11223344", "mike@futuresystems.com", "prospect"),
        ("Smart Retail", "Delhi", "Sarah Johnson", "+91-11-55667788", "sarah@smartretail.com", "active"),
        ("Digital Hub", "Kolkata", "Alex Brown", "+91-33-99887766", "alex@digitalhub.com", "inactive"),
    ];

    rows.iter()
        .map(|(name, location, contact, phone, email, status)| {
            let mut dealer = Dealer::new(name, location, contact, phone, email);
            dealer.status = status.to_string();
            dealer
        })
        .collect()
}

fn demo_meetings(salespersons: &[Salesperson], dealers: &[Dealer]) -> Vec<Meeting> {
    let rows: [(usize, usize, &str, &str, Option<i64>, &str, i64); 5] = [
        (0, 0, "Successful product demo. Customer interested in bulk purchase.", "successful", None, "Bangalore", 90),
        (1, 1, "Need follow-up on pricing discussion. Customer requested proposal.", "follow_up_needed", Some(7), "Chennai", 60),
        (2, 2, "Initial meeting with prospect. Need to understand requirements better.", "follow_up_needed", Some(3), "Mumbai", 45),
        (3, 3, "Contract signed! Major deal closed successfully.", "successful", None, "Delhi", 120),
        (4, 4, "Customer not interested in current offerings. Market timing issue.", "no_interest", None, "Kolkata", 30),
    ];

    rows.iter()
        .map(|(sp_idx, dealer_idx, notes, outcome, follow_up_days, location, minutes)| Meeting {
            id: Uuid::new_v4(),
            salesperson_id: salespersons[*sp_idx].id,
            dealer_id: Some(dealers[*dealer_idx].id),
            notes: notes.to_string(),
            outcome: outcome.to_string(),
            follow_up_date: follow_up_days.map(|d| Utc::now() + Duration::days(d)),
            location: location.to_string(),
            duration_minutes: *minutes,
            created_at: Utc::now(),
        })
        .collect()
}

fn demo_leads(salespersons: &[Salesperson]) -> Vec<Lead> {
    let rows: [(&str, &str, &str, &str, &str, &str, &str, i64, &str, usize); 5] = [
        ("Manufacturing Corp", "ManufaCorp Ltd", "+91-80-98765432", "contact@manufacorp.com", "Bangalore", "website", "new", 85, "Large manufacturing company interested in ERP solution", 0),
        ("Startup Hub", "TechStart Inc", "+91-44-12345678", "info@techstart.com", "Chennai", "referral", "qualified", 75, "Growing startup needs CRM integration", 1),
        ("Retail Chain", "SuperMart", "+91-22-87654321", "procurement@supermart.com", "Mumbai", "cold_call", "contacted", 60, "Retail chain exploring POS solutions", 2),
        ("Education Institute", "Learning Academy", "+91-11-11223344", "admin@learningacademy.edu", "Delhi", "website", "qualified", 70, "Educational institution seeking learning management system", 3),
        ("Healthcare Solutions", "Health Plus", "+91-20-99887766", "contact@healthplus.com", "Pune", "referral", "converted", 90, "Healthcare provider - high priority lead converted to customer", 0),
    ];

    rows.iter()
        .map(|(name, company, phone, email, location, source, status, score, notes, sp_idx)| Lead {
            id: Uuid::new_v4(),
            name: name.to_string(),
            company: company.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            location: location.to_string(),
            source: source.to_string(),
            status: status.to_string(),
            score: *score,
            notes: notes.to_string(),
            assigned_to: Some(salespersons[*sp_idx].id),
            created_at: Utc::now(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::ConversationRepository;

    #[test]
    fn test_seed_populates_all_tables() {
        let db = Arc::new(Database::in_memory().unwrap());
        let summary = seed_demo_data(&db).unwrap();

        assert_eq!(summary.salespersons, 6);
        assert_eq!(summary.dealers, 5);
        assert_eq!(summary.meetings, 5);
        assert_eq!(summary.leads, 5);
        assert_eq!(summary.login_sessions, 90);
        assert_eq!(summary.sales_records, 25);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let db = Arc::new(Database::in_memory().unwrap());
        seed_demo_data(&db).unwrap();
        let second = seed_demo_data(&db).unwrap();
        assert_eq!(second, SeedSummary::default());

        let repo = SalespersonRepository::new(Arc::clone(&db));
        assert_eq!(repo.count().unwrap(), 6);
    }

    #[test]
    fn test_seed_revenue_series_matches_roster() {
        let db = Arc::new(Database::in_memory().unwrap());
        seed_demo_data(&db).unwrap();

        let repo = SalespersonRepository::new(Arc::clone(&db));
        let series = repo.revenue_series().unwrap();
        assert_eq!(series.len(), 6);
        assert_eq!(series[0], ("Emily Davis".to_string(), 61000.0));
        assert_eq!(series[5], ("David Brown".to_string(), 29000.0));
    }

    #[test]
    fn test_seed_leaves_conversations_empty() {
        let db = Arc::new(Database::in_memory().unwrap());
        seed_demo_data(&db).unwrap();
        let repo = ConversationRepository::new(db);
        assert_eq!(repo.count_by_session("any").unwrap(), 0);
    }
}
