//! Role-based query responders.
//!
//! Each responder turns a free-text query into a canned, keyword-selected
//! reply; the analytics path can attach rendered charts and a tabular
//! series. Dispatch is a closed enum with a documented manager fallback
//! for unknown role tags, and the dispatch boundary converts any
//! responder error into an apologetic plain-text reply.

pub mod advanced;
pub mod analytics;
pub mod customers;
pub mod error;
pub mod leads;
pub mod manager;
pub mod responder;
pub mod revenue;
pub mod sales;
pub mod support;
pub mod types;

pub use advanced::{AdvancedAnalytics, AdvancedReport};
pub use error::AgentError;
pub use responder::{respond, responder_for, Responder};
pub use revenue::{RevenueSource, RosterRevenue, SampleRevenue};
pub use types::{AgentKind, AgentReply};
