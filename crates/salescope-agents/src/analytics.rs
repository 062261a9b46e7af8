//! Analytics responder.
//!
//! Queries that hit the advanced vocabulary are delegated to
//! [`AdvancedAnalytics`]; everything else gets a basic metrics summary
//! fed by live roster counts when a store is available.

use std::collections::HashMap;

use tracing::warn;

use salescope_storage::Database;

use crate::advanced::AdvancedAnalytics;
use crate::error::AgentError;
use crate::responder::{contains_any, Responder};
use crate::types::{AgentKind, AgentReply};

/// Vocabulary that routes a query to the advanced path.
const ADVANCED_WORDS: &[&str] = &[
    "dashboard",
    "chart",
    "graph",
    "plot",
    "visual",
    "show",
    "display",
    "compare",
    "trend",
    "analysis",
    "report",
    "performance",
    "metrics",
    "by salesperson",
    "by territory",
    "by region",
    "distribution",
    "breakdown",
];

/// Fallback metrics used when no store is reachable.
const FALLBACK_SALESPERSONS: u64 = 6;
const FALLBACK_TOTAL_REVENUE: f64 = 259_500.0;
const FALLBACK_AVG_REVENUE: f64 = 43_250.0;

pub struct AnalyticsAgent {
    advanced: AdvancedAnalytics,
}

impl AnalyticsAgent {
    pub fn new() -> Self {
        Self {
            advanced: AdvancedAnalytics::new(),
        }
    }
}

impl Default for AnalyticsAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder for AnalyticsAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Analytics
    }

    fn process(
        &self,
        query: &str,
        _context: Option<&HashMap<String, String>>,
        db: Option<&Database>,
    ) -> Result<AgentReply, AgentError> {
        let query_lower = query.to_lowercase();

        if contains_any(&query_lower, ADVANCED_WORDS) {
            let report = self.advanced.process(query);
            let mut text = report.response;
            if !report.charts.is_empty() {
                text.push_str(&format!(
                    "\n\nGenerated {} chart(s) from the revenue series.",
                    report.charts.len()
                ));
            }
            return Ok(AgentReply {
                text,
                charts: report.charts,
                data: Some(report.data),
            });
        }

        // Basic path: live counts when possible, fixed numbers otherwise.
        let (salespersons, total_revenue, avg_revenue) = basic_metrics(db);
        Ok(AgentReply::text(format!(
            "**Analytics Dashboard**\n\
             \n\
             Current Performance Metrics:\n\
             - Total Salespersons: {salespersons}\n\
             - Total Revenue: ${total_revenue:.2}\n\
             - Average Revenue: ${avg_revenue:.2}\n\
             \n\
             Key Insights:\n\
             - Revenue distribution across 6 territories\n\
             - Performance tracking for each salesperson\n\
             - Meeting outcomes and follow-up tracking\n\
             \n\
             For advanced visualizations and detailed analysis, please specify chart \
             requirements in your query.",
        )))
    }
}

fn basic_metrics(db: Option<&Database>) -> (u64, f64, f64) {
    let Some(db) = db else {
        return (
            FALLBACK_SALESPERSONS,
            FALLBACK_TOTAL_REVENUE,
            FALLBACK_AVG_REVENUE,
        );
    };

    match roster_metrics(db) {
        Ok(metrics) => metrics,
        Err(e) => {
            warn!(error = %e, "Falling back to static analytics metrics");
            (
                FALLBACK_SALESPERSONS,
                FALLBACK_TOTAL_REVENUE,
                FALLBACK_AVG_REVENUE,
            )
        }
    }
}

fn roster_metrics(db: &Database) -> Result<(u64, f64, f64), AgentError> {
    let count: i64 = db.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM salespersons", [], |row| row.get(0))
            .map_err(|e| salescope_core::error::SalescopeError::Storage(e.to_string()))
    })?;
    let total: f64 = db.with_conn(|conn| {
        conn.query_row(
            "SELECT COALESCE(SUM(total_revenue), 0) FROM salespersons",
            [],
            |row| row.get(0),
        )
        .map_err(|e| salescope_core::error::SalescopeError::Storage(e.to_string()))
    })?;

    if count == 0 {
        return Ok((
            FALLBACK_SALESPERSONS,
            FALLBACK_TOTAL_REVENUE,
            FALLBACK_AVG_REVENUE,
        ));
    }

    Ok((count as u64, total, total / count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use salescope_chart::DATA_URI_PREFIX;
    use salescope_core::types::Salesperson;
    use salescope_storage::SalespersonRepository;

    #[test]
    fn test_advanced_path_returns_charts_and_data() {
        let reply = AnalyticsAgent::new()
            .process("show me a revenue chart", None, None)
            .unwrap();
        assert_eq!(reply.charts.len(), 1);
        assert!(reply.charts[0].starts_with(DATA_URI_PREFIX));
        assert!(reply.data.is_some());
        assert!(reply.text.contains("Generated 1 chart(s)"));
    }

    #[test]
    fn test_advanced_path_works_without_db() {
        let reply = AnalyticsAgent::new()
            .process("compare performance by region", None, None)
            .unwrap();
        assert!(!reply.text.is_empty());
        assert!(reply.data.is_some());
    }

    #[test]
    fn test_basic_path_without_db_uses_fallback_numbers() {
        let reply = AnalyticsAgent::new().process("numbers please", None, None).unwrap();
        assert!(reply.text.contains("Total Salespersons: 6"));
        assert!(reply.text.contains("$259500.00"));
        assert!(reply.text.contains("$43250.00"));
        assert!(reply.charts.is_empty());
    }

    #[test]
    fn test_basic_path_with_db_uses_live_counts() {
        let arc = Arc::new(Database::in_memory().unwrap());
        let repo = SalespersonRepository::new(Arc::clone(&arc));
        let mut sp = Salesperson::new("Grace Lee", "North", "", "", "g@c.com");
        sp.total_revenue = 1000.0;
        repo.save(&sp).unwrap();
        let mut sp = Salesperson::new("Henry Ford", "South", "", "", "h@c.com");
        sp.total_revenue = 3000.0;
        repo.save(&sp).unwrap();

        let reply = AnalyticsAgent::new()
            .process("numbers please", None, Some(&arc))
            .unwrap();
        assert!(reply.text.contains("Total Salespersons: 2"));
        assert!(reply.text.contains("$4000.00"));
        assert!(reply.text.contains("$2000.00"));
    }

    #[test]
    fn test_basic_path_with_empty_db_uses_fallback() {
        let db = Database::in_memory().unwrap();
        let reply = AnalyticsAgent::new()
            .process("numbers please", None, Some(&db))
            .unwrap();
        assert!(reply.text.contains("Total Salespersons: 6"));
    }
}
