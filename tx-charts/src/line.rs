//! Transaction value over time.

use chrono::{DateTime, Utc};

use crate::series::ValuePoint;
use crate::svg::{nice_ticks, PlotArea, SvgDocument, TextStyle, AXIS_COLOR};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 500;
const LINE_COLOR: &str = "#1f77b4";
const X_TICKS: usize = 5;
const MAX_MARKERS: usize = 60;

pub const TITLE: &str = "Transactions Over Time";
pub const X_LABEL: &str = "Date";
pub const Y_LABEL: &str = "Transaction Value (Ether)";

/// Render the value-over-time line chart, or `None` for an empty series.
pub fn line_chart(points: &[ValuePoint]) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let mut points = points.to_vec();
    points.sort_by_key(|p| p.timestamp);

    let area = PlotArea {
        left: 90.0,
        top: 50.0,
        width: f64::from(WIDTH) - 130.0,
        height: f64::from(HEIGHT) - 140.0,
    };

    let t_min = points[0].timestamp.timestamp() as f64;
    let t_max = points[points.len() - 1].timestamp.timestamp() as f64;

    let v_min = points.iter().map(|p| p.value_eth).fold(f64::MAX, f64::min).min(0.0);
    let v_max = points.iter().map(|p| p.value_eth).fold(f64::MIN, f64::max);
    let y_ticks = nice_ticks(v_min, v_max, 6);
    let (y_min, y_max) = (y_ticks[0], y_ticks[y_ticks.len() - 1]);

    let mut doc = SvgDocument::new(WIDTH, HEIGHT);
    doc.title(&area, TITLE);
    doc.y_ticks(&area, &y_ticks, y_min, y_max);

    for tick in time_ticks(t_min, t_max) {
        let x = area.x(tick, t_min, t_max);
        doc.line(x, area.bottom(), x, area.bottom() + 5.0, AXIS_COLOR, 1.0);
        doc.text(
            x,
            area.bottom() + 20.0,
            &format_time(tick, t_max - t_min),
            TextStyle::end(11.0).rotated(-30.0),
        );
    }

    doc.axes(&area, X_LABEL, Y_LABEL);

    let coords: Vec<(f64, f64)> = points
        .iter()
        .map(|p| {
            (
                area.x(p.timestamp.timestamp() as f64, t_min, t_max),
                area.y(p.value_eth, y_min, y_max),
            )
        })
        .collect();

    doc.polyline(&coords, LINE_COLOR, 1.5);
    if coords.len() <= MAX_MARKERS {
        for (x, y) in &coords {
            doc.circle(*x, *y, 3.0, LINE_COLOR, None);
        }
    }

    Some(doc.finish())
}

/// Evenly spaced tick positions (epoch seconds) across the time range.
fn time_ticks(t_min: f64, t_max: f64) -> Vec<f64> {
    if t_max <= t_min {
        return vec![t_min];
    }
    let step = (t_max - t_min) / (X_TICKS - 1) as f64;
    (0..X_TICKS).map(|i| t_min + step * i as f64).collect()
}

/// Date label, with the time of day when the whole range fits in two days.
fn format_time(epoch: f64, span_secs: f64) -> String {
    let Some(ts) = DateTime::<Utc>::from_timestamp(epoch as i64, 0) else {
        return String::new();
    };
    if span_secs < 2.0 * 86_400.0 {
        ts.format("%Y-%m-%d %H:%M").to_string()
    } else {
        ts.format("%Y-%m-%d").to_string()
    }
}
