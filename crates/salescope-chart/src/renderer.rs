//! Chart rendering to image data-URIs.
//!
//! Lays out bar and pie charts on a [`Canvas`], encodes the result as PNG,
//! and wraps it as `data:image/png;base64,<payload>`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::canvas::{parse_hex_color, Canvas, Rgb};
use crate::error::ChartError;

/// Prefix of every successfully rendered chart string.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// The fixed series palette, cycled (and wrapped) across entries.
pub const PALETTE: [&str; 6] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD",
];

const BACKGROUND: Rgb = (255, 255, 255);
const AXIS_COLOR: Rgb = (60, 60, 60);
const GRID_COLOR: Rgb = (120, 120, 120);
const TEXT_COLOR: Rgb = (33, 33, 33);

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

/// Stateless chart renderer.
///
/// Every call draws into a fresh buffer; nothing is retained between
/// renders.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

impl ChartRenderer {
    /// Create a renderer with explicit output dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(200),
            height: height.max(150),
        }
    }

    /// Render a labeled series as a chart, returning an image data-URI.
    ///
    /// Requires at least two entries; shorter series signal
    /// [`ChartError::InsufficientData`] and produce no image at all.
    pub fn render(
        &self,
        series: &[(String, f64)],
        kind: ChartKind,
        title: &str,
    ) -> Result<String, ChartError> {
        if series.len() < 2 {
            return Err(ChartError::InsufficientData {
                required: 2,
                actual: series.len(),
            });
        }

        let mut canvas = Canvas::new(self.width, self.height, BACKGROUND);
        self.draw_title(&mut canvas, title);
        match kind {
            ChartKind::Bar => self.draw_bar_chart(&mut canvas, series),
            ChartKind::Pie => self.draw_pie_chart(&mut canvas, series),
        }

        let png = canvas.encode_png()?;
        Ok(format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(&png)))
    }

    fn draw_title(&self, canvas: &mut Canvas, title: &str) {
        let scale = 3;
        let width = Canvas::text_width(title, scale);
        let x = (canvas.width() as i32 - width) / 2;
        canvas.draw_text(x.max(4), 18, title, scale, TEXT_COLOR);
    }

    fn draw_bar_chart(&self, canvas: &mut Canvas, series: &[(String, f64)]) {
        let left = 100i32;
        let right = 40i32;
        let top = 70i32;
        let bottom = 70i32;

        let plot_w = canvas.width() as i32 - left - right;
        let plot_h = canvas.height() as i32 - top - bottom;
        let base_y = top + plot_h;

        let max_value = series
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::MIN, f64::max)
            .max(1.0);
        let y_max = max_value * 1.1;

        // Horizontal gridlines with value labels on the left.
        let divisions = 5;
        for i in 0..=divisions {
            let y = top + plot_h * i / divisions;
            canvas.draw_line(left, y, left + plot_w, y, GRID_COLOR, 60);
            let value = y_max * (divisions - i) as f64 / divisions as f64;
            let label = format_currency(value);
            let label_w = Canvas::text_width(&label, 1);
            canvas.draw_text(left - label_w - 8, y - 3, &label, 1, TEXT_COLOR);
        }

        // Axes.
        canvas.draw_line(left, top, left, base_y, AXIS_COLOR, 255);
        canvas.draw_line(left, base_y, left + plot_w, base_y, AXIS_COLOR, 255);

        // Bars in input order, palette cycling with wrap.
        let n = series.len() as i32;
        let slot = plot_w / n;
        let bar_w = (slot * 7 / 10).max(1);

        for (i, (label, value)) in series.iter().enumerate() {
            let color = palette_color(i);
            let x = left + i as i32 * slot + (slot - bar_w) / 2;
            let h = ((value.max(0.0) / y_max) * plot_h as f64) as i32;
            let y = base_y - h;
            canvas.fill_rect(x, y, bar_w, h, color, 255);

            // Value annotation above the bar.
            let annotation = format_currency(*value);
            let ann_w = Canvas::text_width(&annotation, 2);
            let ann_x = x + (bar_w - ann_w) / 2;
            let ann_y = (y - Canvas::text_height(2) - 4).max(top - Canvas::text_height(2));
            canvas.draw_text(ann_x, ann_y, &annotation, 2, TEXT_COLOR);

            // Category label below the axis, truncated to its slot.
            let max_chars = ((slot - 8) / 6).max(1) as usize;
            let short: String = label.chars().take(max_chars).collect();
            let lab_w = Canvas::text_width(&short, 1);
            let lab_x = left + i as i32 * slot + (slot - lab_w) / 2;
            canvas.draw_text(lab_x, base_y + 10, &short, 1, TEXT_COLOR);
        }
    }

    fn draw_pie_chart(&self, canvas: &mut Canvas, series: &[(String, f64)]) {
        let total: f64 = series.iter().map(|(_, v)| v.max(0.0)).sum();

        let cx = (canvas.width() as f64 * 0.36) as i32;
        let cy = (canvas.height() as f64 * 0.55) as i32;
        let radius = (canvas.width().min(canvas.height()) as f64 * 0.3) as i32;

        if total > 0.0 {
            // Cumulative clockwise fractions starting at 12 o'clock.
            let mut boundaries = Vec::with_capacity(series.len());
            let mut acc = 0.0;
            for (_, value) in series {
                acc += value.max(0.0) / total;
                boundaries.push(acc);
            }

            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if dx * dx + dy * dy > radius * radius {
                        continue;
                    }
                    let angle = (dx as f64).atan2(-dy as f64);
                    let fraction = if angle < 0.0 {
                        (angle + 2.0 * std::f64::consts::PI) / (2.0 * std::f64::consts::PI)
                    } else {
                        angle / (2.0 * std::f64::consts::PI)
                    };
                    let slice = boundaries
                        .iter()
                        .position(|b| fraction < *b)
                        .unwrap_or(series.len() - 1);
                    canvas.blend_pixel(cx + dx, cy + dy, palette_color(slice), 255);
                }
            }
        }

        // Legend with percentage labels.
        let legend_x = (canvas.width() as f64 * 0.68) as i32;
        let mut legend_y = (canvas.height() as i32 - series.len() as i32 * 34) / 2;
        for (i, (label, value)) in series.iter().enumerate() {
            canvas.fill_rect(legend_x, legend_y, 18, 18, palette_color(i), 255);
            canvas.draw_rect_outline(legend_x, legend_y, 18, 18, AXIS_COLOR, 255);
            let pct = if total > 0.0 {
                value.max(0.0) / total * 100.0
            } else {
                0.0
            };
            let text = format!("{} {:.1}%", label, pct);
            canvas.draw_text(legend_x + 26, legend_y + 2, &text, 2, TEXT_COLOR);
            legend_y += 34;
        }
    }
}

fn palette_color(index: usize) -> Rgb {
    parse_hex_color(PALETTE[index % PALETTE.len()]).unwrap_or((128, 128, 128))
}

/// Format a value as whole-dollar currency with thousands separators.
fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if negative {
        format!("-${}", out)
    } else {
        format!("${}", out)
    }
}

// =============================================================================
// Tests
// =============================================================================
