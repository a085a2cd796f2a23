//! Chart Component
//!
//! Telemetry line chart using HTML5 Canvas. Points are spaced evenly by
//! sample index; the series arrives in server order and is drawn as-is.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::types::TelemetryPoint;

/// Series stroke color
const SERIES_COLOR: &str = "#4bc0c0";

/// Horizontal grid line count
const GRID_ROWS: usize = 5;

/// Telemetry chart component. An empty series renders an empty frame,
/// never an error.
#[component]
pub fn TelemetryChart(#[prop(into)] points: Signal<Vec<TelemetryPoint>>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the series changes or the canvas mounts
    create_effect(move |_| {
        let points = points.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &points);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="640"
            height="260"
            class="w-full h-48 md:h-64 rounded-lg"
        />
    }
}

/// Draw the series on canvas
fn draw_chart(canvas: &HtmlCanvasElement, points: &[TelemetryPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 56.0;
    let margin_right = 16.0;
    let margin_top = 16.0;
    let margin_bottom = 32.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str("#1f2937"); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let (y_min, y_max) = value_bounds(points);

    // Grid lines with y-axis labels
    ctx.set_line_width(1.0);
    for i in 0..=GRID_ROWS {
        let y = margin_top + (i as f64 / GRID_ROWS as f64) * chart_height;
        ctx.set_stroke_style_str("#374151"); // gray-700
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / GRID_ROWS as f64) * (y_max - y_min);
        ctx.set_fill_style_str("#9ca3af"); // gray-400
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 4.0, y + 4.0);
    }

    if points.is_empty() {
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No telemetry points", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    // Series polyline
    ctx.set_stroke_style_str(SERIES_COLOR);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = x_position(i, points.len(), margin_left, chart_width);
        let y = y_position(point.energy_watts, y_min, y_max, margin_top, chart_height);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Sample dots
    ctx.set_fill_style_str(SERIES_COLOR);
    for (i, point) in points.iter().enumerate() {
        let x = x_position(i, points.len(), margin_left, chart_width);
        let y = y_position(point.energy_watts, y_min, y_max, margin_top, chart_height);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 2.5, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Time labels along the x axis
    ctx.set_fill_style_str("#9ca3af");
    ctx.set_font("11px sans-serif");
    let step = (points.len() / GRID_ROWS).max(1);
    for (i, point) in points.iter().enumerate().step_by(step) {
        let label = axis_label(&point.timestamp).unwrap_or_else(|| format!("#{}", i + 1));
        let x = x_position(i, points.len(), margin_left, chart_width);
        let _ = ctx.fill_text(&label, x - 20.0, height - 10.0);
    }
}

/// Padded y-axis bounds; a flat or empty series still yields a non-zero span.
fn value_bounds(points: &[TelemetryPoint]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in points {
        min = min.min(point.energy_watts);
        max = max.max(point.energy_watts);
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// X coordinate for the sample at `index`, evenly spaced; a lone sample
/// sits in the middle.
fn x_position(index: usize, count: usize, left: f64, width: f64) -> f64 {
    if count <= 1 {
        return left + width / 2.0;
    }
    left + (index as f64 / (count - 1) as f64) * width
}

/// Y coordinate for `value` (canvas y grows downward).
fn y_position(value: f64, y_min: f64, y_max: f64, top: f64, height: f64) -> f64 {
    top + ((y_max - value) / (y_max - y_min)) * height
}

/// Parse the service's ISO-ish timestamps: RFC 3339, or naive
/// `YYYY-MM-DDTHH:MM:SS` with an optional fraction.
fn parse_timestamp(raw: &str) -> Option<chrono::NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Clock-time tick label; `None` when the timestamp doesn't parse.
fn axis_label(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format("%H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(timestamp: &str, energy_watts: f64) -> TelemetryPoint {
        TelemetryPoint {
            timestamp: timestamp.to_string(),
            energy_watts,
        }
    }

    #[test]
    fn bounds_pad_the_value_range() {
        let points = vec![point("2024-06-01T10:00:00", 100.0), point("2024-06-01T11:00:00", 200.0)];
        let (min, max) = value_bounds(&points);
        assert_eq!(min, 90.0);
        assert_eq!(max, 210.0);
    }

    #[test]
    fn flat_series_still_has_a_span() {
        let points = vec![point("2024-06-01T10:00:00", 50.0); 3];
        let (min, max) = value_bounds(&points);
        assert_eq!(min, 49.0);
        assert_eq!(max, 51.0);
    }

    #[test]
    fn empty_series_bounds_are_finite() {
        assert_eq!(value_bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn samples_span_the_chart_width() {
        assert_eq!(x_position(0, 5, 50.0, 400.0), 50.0);
        assert_eq!(x_position(4, 5, 50.0, 400.0), 450.0);
        // A lone sample is centered
        assert_eq!(x_position(0, 1, 50.0, 400.0), 250.0);
    }

    #[test]
    fn y_axis_is_inverted() {
        assert_eq!(y_position(10.0, 0.0, 10.0, 20.0, 200.0), 20.0);
        assert_eq!(y_position(0.0, 0.0, 10.0, 20.0, 200.0), 220.0);
    }

    #[test]
    fn timestamps_parse_in_both_service_forms() {
        assert!(parse_timestamp("2024-06-01T10:30:00Z").is_some());
        assert!(parse_timestamp("2024-06-01T10:30:00+02:00").is_some());
        assert!(parse_timestamp("2024-06-01T10:30:00").is_some());
        assert!(parse_timestamp("2024-06-01T10:30:00.123456").is_some());
        assert!(parse_timestamp("not a timestamp").is_none());
    }

    #[test]
    fn axis_labels_are_clock_times() {
        assert_eq!(axis_label("2024-06-01T10:30:00Z"), Some("10:30:00".to_string()));
        assert_eq!(axis_label("garbage"), None);
    }
}
