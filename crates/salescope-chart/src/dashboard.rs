//! Dashboard chart set.
//!
//! Renders the four overview charts from fixed demonstration datasets and
//! returns them as a label-to-data-URI map. A failed chart contributes an
//! empty string for its key; the map always has exactly four entries.

use std::collections::HashMap;

use tracing::warn;

use crate::renderer::{ChartKind, ChartRenderer};

/// Render the four dashboard charts.
pub fn render_dashboard(renderer: &ChartRenderer) -> HashMap<String, String> {
    let mut charts = HashMap::new();

    charts.insert(
        "revenue_chart".to_string(),
        soft_render(
            renderer,
            &revenue_by_salesperson(),
            ChartKind::Bar,
            "Revenue by Salesperson",
        ),
    );
    charts.insert(
        "meetings_chart".to_string(),
        soft_render(
            renderer,
            &meeting_outcomes(),
            ChartKind::Pie,
            "Meeting Outcomes Distribution",
        ),
    );
    charts.insert(
        "leads_chart".to_string(),
        soft_render(
            renderer,
            &lead_statuses(),
            ChartKind::Bar,
            "Lead Status Distribution",
        ),
    );
    charts.insert(
        "regional_chart".to_string(),
        soft_render(
            renderer,
            &revenue_by_region(),
            ChartKind::Bar,
            "Revenue by Region",
        ),
    );

    charts
}

/// Render one chart, collapsing any failure into an empty string.
fn soft_render(
    renderer: &ChartRenderer,
    series: &[(String, f64)],
    kind: ChartKind,
    title: &str,
) -> String {
    match renderer.render(series, kind, title) {
        Ok(uri) => uri,
        Err(e) => {
            warn!(title, error = %e, "Dashboard chart failed; leaving key empty");
            String::new()
        }
    }
}

fn revenue_by_salesperson() -> Vec<(String, f64)> {
    vec![
        ("Emily Davis".to_string(), 61000.0),
        ("Carol Williams".to_string(), 52000.0),
        ("Alice Johnson".to_string(), 45000.0),
        ("Bob Smith".to_string(), 38500.0),
        ("Frank Miller".to_string(), 33500.0),
        ("David Brown".to_string(), 29000.0),
    ]
}

fn meeting_outcomes() -> Vec<(String, f64)> {
    vec![
        ("Successful".to_string(), 3.0),
        ("Follow-up Needed".to_string(), 1.0),
        ("No Interest".to_string(), 1.0),
        ("Rescheduled".to_string(), 0.0),
    ]
}

fn lead_statuses() -> Vec<(String, f64)> {
    vec![
        ("New".to_string(), 1.0),
        ("Qualified".to_string(), 2.0),
        ("Contacted".to_string(), 1.0),
        ("Converted".to_string(), 1.0),
    ]
}

fn revenue_by_region() -> Vec<(String, f64)> {
    vec![
        ("North".to_string(), 45000.0),
        ("South".to_string(), 38500.0),
        ("East".to_string(), 52000.0),
        ("West".to_string(), 29000.0),
        ("Central".to_string(), 61000.0),
        ("Northeast".to_string(), 33500.0),
    ]
}
