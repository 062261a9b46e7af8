//! SQLite-backed persistence for the sales-operations backend.
//!
//! Provides the connection wrapper, schema migrations, one repository per
//! entity, and demo-data seeding.

pub mod db;
pub mod migrations;
pub mod repository;
pub mod seed;

pub use db::Database;
pub use repository::{
    ConversationRepository, DealerRepository, LeadRepository, LoginSessionRepository,
    MeetingRepository, SalesRecordRepository, SalespersonRepository,
};
