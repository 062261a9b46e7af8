//! Revenue series sources.
//!
//! The analytics responder is written against this narrow read interface
//! so the backing data can be swapped without touching any response
//! formatting.

use std::sync::Arc;

use tracing::warn;

use salescope_storage::{Database, SalespersonRepository};

/// The fixed demonstration series used when no live source is wired in.
pub const SAMPLE_REVENUE: [(&str, f64); 6] = [
    ("Emily Davis", 61000.0),
    ("Carol Williams", 52000.0),
    ("Alice Johnson", 45000.0),
    ("Bob Smith", 38500.0),
    ("Frank Miller", 33500.0),
    ("David Brown", 29000.0),
];

/// An ordered (label, amount) revenue series provider.
pub trait RevenueSource {
    fn revenue_series(&self) -> Vec<(String, f64)>;
}

/// The built-in six-row sample series.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleRevenue;

impl RevenueSource for SampleRevenue {
    fn revenue_series(&self) -> Vec<(String, f64)> {
        SAMPLE_REVENUE
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect()
    }
}

/// A live source backed by the salesperson roster.
///
/// Falls back to the sample series if the store errors, so a broken
/// database degrades the numbers rather than the request.
pub struct RosterRevenue {
    db: Arc<Database>,
}

impl RosterRevenue {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl RevenueSource for RosterRevenue {
    fn revenue_series(&self) -> Vec<(String, f64)> {
        let repo = SalespersonRepository::new(Arc::clone(&self.db));
        match repo.revenue_series() {
            Ok(series) if !series.is_empty() => series,
            Ok(_) => SampleRevenue.revenue_series(),
            Err(e) => {
                warn!(error = %e, "Falling back to sample revenue series");
                SampleRevenue.revenue_series()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salescope_core::types::Salesperson;

    #[test]
    fn test_sample_series_order_and_values() {
        let series = SampleRevenue.revenue_series();
        assert_eq!(series.len(), 6);
        assert_eq!(series[0], ("Emily Davis".to_string(), 61000.0));
        assert_eq!(series[5], ("David Brown".to_string(), 29000.0));

        let total: f64 = series.iter().map(|(_, v)| v).sum();
        assert_eq!(total, 259000.0);
    }

    #[test]
    fn test_roster_source_reads_database() {
        let db = Arc::new(Database::in_memory().unwrap());
        let repo = SalespersonRepository::new(Arc::clone(&db));

        let mut sp = Salesperson::new("Grace Lee", "North", "", "", "grace@company.com");
        sp.total_revenue = 70000.0;
        repo.save(&sp).unwrap();
        let mut sp = Salesperson::new("Henry Ford", "South", "", "", "henry@company.com");
        sp.total_revenue = 10000.0;
        repo.save(&sp).unwrap();

        let series = RosterRevenue::new(db).revenue_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, "Grace Lee");
    }

    #[test]
    fn test_roster_source_empty_roster_falls_back() {
        let db = Arc::new(Database::in_memory().unwrap());
        let series = RosterRevenue::new(db).revenue_series();
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].0, "Emily Davis");
    }
}
