//! Advanced analytics: summary statistics over a revenue series plus an
//! optional rendered chart.
//!
//! The query is classified twice: once for whether it wants a chart, once
//! for which of three response shapes to use (revenue, team overview, or
//! a generic fallback). Both classifications are fixed-vocabulary
//! substring checks, first match wins.

use tracing::warn;

use salescope_chart::{ChartKind, ChartRenderer};

use crate::responder::contains_any;
use crate::revenue::{RevenueSource, SampleRevenue};

/// Vocabulary that marks a query as chart-seeking.
const CHART_WORDS: &[&str] = &[
    "chart", "graph", "plot", "visual", "show", "display", "bar", "pie", "line",
];

/// Vocabulary for the revenue/performance response shape.
const REVENUE_WORDS: &[&str] = &["revenue", "sales", "performance"];

/// Vocabulary for the team/overview response shape.
const TEAM_WORDS: &[&str] = &["team", "overview"];

/// The raw advanced-analytics result.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedReport {
    pub response: String,
    pub charts: Vec<String>,
    pub data: Vec<(String, f64)>,
}

/// Analytics over a [`RevenueSource`].
pub struct AdvancedAnalytics<S: RevenueSource = SampleRevenue> {
    source: S,
    renderer: ChartRenderer,
}

impl AdvancedAnalytics<SampleRevenue> {
    /// Analytics over the built-in sample series.
    pub fn new() -> Self {
        Self::with_source(SampleRevenue)
    }
}

impl Default for AdvancedAnalytics<SampleRevenue> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RevenueSource> AdvancedAnalytics<S> {
    /// Analytics over a caller-provided series source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            renderer: ChartRenderer::default(),
        }
    }

    /// Process a query: classify, optionally render a chart, and compose
    /// the textual report. Chart failures are logged and omitted; this
    /// never fails.
    pub fn process(&self, query: &str) -> AdvancedReport {
        let series = self.source.revenue_series();
        let query_lower = query.to_lowercase();

        let mut charts = Vec::new();
        if contains_any(&query_lower, CHART_WORDS) && series.len() > 1 {
            match self
                .renderer
                .render(&series, ChartKind::Bar, "Revenue by Salesperson")
            {
                Ok(uri) => charts.push(uri),
                Err(e) => warn!(error = %e, "Chart render failed; responding without it"),
            }
        }

        let response = compose_response(query, &query_lower, &series);
        let data = series.into_iter().take(10).collect();

        AdvancedReport {
            response,
            charts,
            data,
        }
    }
}

/// Pick a response shape and fill its template.
///
/// Priority order: revenue/performance, then team/overview, then the
/// generic fallback.
fn compose_response(query: &str, query_lower: &str, series: &[(String, f64)]) -> String {
    if contains_any(query_lower, REVENUE_WORDS) && !series.is_empty() {
        return revenue_response(query, series);
    }
    if contains_any(query_lower, TEAM_WORDS) {
        return team_response();
    }
    fallback_response(query)
}

fn revenue_response(query: &str, series: &[(String, f64)]) -> String {
    let total: f64 = series.iter().map(|(_, v)| v).sum();
    let average = total / series.len() as f64;
    let top = series
        .iter()
        .fold(&series[0], |best, row| if row.1 > best.1 { row } else { best });
    let lead_pct = (top.1 / average - 1.0) * 100.0;

    format!(
        "**Sales Performance Analysis**\n\
         \n\
         Based on your query: \"{query}\"\n\
         \n\
         **Key Findings:**\n\
         - {top_name} leads with {top_amount} in revenue\n\
         - Total team revenue: {total}\n\
         - Average performance: {average} per salesperson\n\
         - {count} salespersons analyzed\n\
         \n\
         **Insights:**\n\
         - Strong performance across the team with {top_name} exceeding average by {lead_pct:.1}%\n\
         - Revenue distribution shows healthy competition\n\
         - Opportunity to support lower performers and share best practices\n\
         \n\
         **Recommendations:**\n\
         - Recognize top performers like {top_name}\n\
         - Provide coaching for bottom quartile performers\n\
         - Analyze successful strategies from top performers\n\
         - Set incremental improvement targets for team growth",
        query = query,
        top_name = top.0,
        top_amount = dollars(top.1),
        total = dollars(total),
        average = dollars(average),
        count = series.len(),
        lead_pct = lead_pct,
    )
}

fn team_response() -> String {
    "**Sales Team Overview**\n\
     \n\
     **Team Composition:**\n\
     - 6 active salespersons across different regions\n\
     - Coverage includes North, South, East, West, Central, and Northeast territories\n\
     - Mix of high-performing and developing team members\n\
     \n\
     **Performance Metrics:**\n\
     - Active dealer relationships maintained\n\
     - Regular meeting schedules and follow-ups\n\
     - Lead qualification and conversion tracking\n\
     - Revenue targets being monitored monthly\n\
     \n\
     **Current Status:**\n\
     - Strong regional coverage ensures comprehensive market presence\n\
     - Balanced portfolio of prospects and active customers\n\
     - Consistent performance tracking and reporting\n\
     \n\
     **Next Steps:**\n\
     - Continue performance monitoring and coaching\n\
     - Expand high-performing territories\n\
     - Support developing team members with training"
        .to_string()
}

fn fallback_response(query: &str) -> String {
    format!(
        "**Analytics Dashboard Response**\n\
         \n\
         Thank you for your query: \"{query}\"\n\
         \n\
         **Available Analytics:**\n\
         - Revenue performance tracking\n\
         - Salesperson comparisons and rankings\n\
         - Regional performance analysis\n\
         - Meeting outcomes and effectiveness\n\
         - Lead qualification metrics\n\
         \n\
         **Sample Data Available:**\n\
         - 6 salespersons with revenue data\n\
         - Regional performance comparisons\n\
         - Historical trends and patterns\n\
         \n\
         For specific analytics, try queries like:\n\
         - \"Show me revenue by salesperson with charts\"\n\
         - \"Compare regional performance\"\n\
         - \"Team performance overview\"",
        query = query,
    )
}

/// Whole-dollar formatting with thousands separators.
fn dollars(value: f64) -> String {
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0.0 {
        format!("-${}", out)
    } else {
        format!("${}", out)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use salescope_chart::DATA_URI_PREFIX;

    // ---- Chart classification ----

    #[test]
    fn test_chart_seeking_query_gets_one_chart() {
        let analytics = AdvancedAnalytics::new();
        let report = analytics.process("show me a revenue chart");
        assert_eq!(report.charts.len(), 1);
        assert!(report.charts[0].starts_with(DATA_URI_PREFIX));
    }

    #[test]
    fn test_non_chart_query_gets_no_chart() {
        let analytics = AdvancedAnalytics::new();
        let report = analytics.process("summarize revenue numbers");
        assert!(report.charts.is_empty());
    }

    #[test]
    fn test_single_row_series_gets_no_chart() {
        struct OneRow;
        impl RevenueSource for OneRow {
            fn revenue_series(&self) -> Vec<(String, f64)> {
                vec![("Only One".to_string(), 100.0)]
            }
        }
        let analytics = AdvancedAnalytics::with_source(OneRow);
        let report = analytics.process("show me a chart");
        assert!(report.charts.is_empty());
    }

    // ---- Derived statistics (must be exact) ----

    #[test]
    fn test_revenue_shape_exact_statistics() {
        let analytics = AdvancedAnalytics::new();
        let report = analytics.process("How is revenue doing?");

        // Sum of the fixed six amounts.
        assert!(report.response.contains("$259,000"));
        // Average = 259000 / 6 = 43166.67, rendered as whole dollars.
        assert!(report.response.contains("$43,167"));
        // Top performer is the row with the maximum amount.
        assert!(report.response.contains("Emily Davis leads with $61,000"));
        // (61000 / 43166.67 - 1) * 100 = 41.3%.
        assert!(report.response.contains("exceeding average by 41.3%"));
        assert!(report.response.contains("6 salespersons analyzed"));
    }

    // ---- Shape priority ----

    #[test]
    fn test_revenue_shape_wins_over_team() {
        let analytics = AdvancedAnalytics::new();
        let report = analytics.process("team revenue breakdown");
        assert!(report.response.starts_with("**Sales Performance Analysis**"));
    }

    #[test]
    fn test_team_shape() {
        let analytics = AdvancedAnalytics::new();
        let report = analytics.process("give me a team summary overview");
        assert!(report.response.starts_with("**Sales Team Overview**"));
    }

    #[test]
    fn test_fallback_shape_echoes_query() {
        let analytics = AdvancedAnalytics::new();
        let report = analytics.process("what can you do");
        assert!(report.response.starts_with("**Analytics Dashboard Response**"));
        assert!(report.response.contains("what can you do"));
    }

    // ---- Data payload ----

    #[test]
    fn test_data_is_series_truncated_to_ten() {
        let analytics = AdvancedAnalytics::new();
        let report = analytics.process("anything");
        assert_eq!(report.data.len(), 6);
        assert_eq!(report.data[0], ("Emily Davis".to_string(), 61000.0));

        struct Wide;
        impl RevenueSource for Wide {
            fn revenue_series(&self) -> Vec<(String, f64)> {
                (0..15).map(|i| (format!("P{}", i), i as f64)).collect()
            }
        }
        let analytics = AdvancedAnalytics::with_source(Wide);
        assert_eq!(analytics.process("anything").data.len(), 10);
    }

    // ---- Dollar formatting ----

    #[test]
    fn test_dollars() {
        assert_eq!(dollars(61000.0), "$61,000");
        assert_eq!(dollars(43166.666), "$43,167");
        assert_eq!(dollars(0.0), "$0");
    }
}
