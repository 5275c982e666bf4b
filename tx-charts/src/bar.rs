//! Number of transactions per day.

use crate::series::DailyVolume;
use crate::svg::{nice_ticks, PlotArea, SvgDocument, TextStyle, AXIS_COLOR};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 500;
const BAR_COLOR: &str = "#1f77b4";
/// Label at most this many bars; beyond that every n-th bar is labelled.
const MAX_LABELS: usize = 30;

pub const TITLE: &str = "Transaction Volume by Date";
pub const X_LABEL: &str = "Date";
pub const Y_LABEL: &str = "Number of Transactions";

/// Render the daily volume bar chart, or `None` when there are no days.
pub fn bar_chart(volume: &[DailyVolume]) -> Option<String> {
    if volume.is_empty() {
        return None;
    }

    let area = PlotArea {
        left: 90.0,
        top: 50.0,
        width: f64::from(WIDTH) - 130.0,
        height: f64::from(HEIGHT) - 150.0,
    };

    let max_count = volume.iter().map(|v| v.count).max().unwrap_or(0) as f64;
    let y_ticks: Vec<f64> = nice_ticks(0.0, max_count, 6)
        .into_iter()
        .filter(|t| t.fract() == 0.0)
        .collect();
    let y_max = y_ticks.last().copied().unwrap_or(1.0).max(max_count).max(1.0);

    let mut doc = SvgDocument::new(WIDTH, HEIGHT);
    doc.title(&area, TITLE);
    doc.y_ticks(&area, &y_ticks, 0.0, y_max);

    let slot = area.width / volume.len() as f64;
    let bar_width = slot * 0.5;
    let label_every = volume.len().div_ceil(MAX_LABELS).max(1);

    for (idx, day) in volume.iter().enumerate() {
        let center = area.left + slot * (idx as f64 + 0.5);
        let top = area.y(day.count as f64, 0.0, y_max);
        doc.raw(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{BAR_COLOR}"><title>{}: {}</title></rect>"#,
            center - bar_width / 2.0,
            top,
            bar_width,
            area.bottom() - top,
            day.date,
            day.count
        ));

        if idx % label_every == 0 {
            doc.line(center, area.bottom(), center, area.bottom() + 5.0, AXIS_COLOR, 1.0);
            doc.text(
                center,
                area.bottom() + 18.0,
                &day.date.format("%Y-%m-%d").to_string(),
                TextStyle::end(11.0).rotated(-90.0),
            );
        }
    }

    doc.axes(&area, X_LABEL, Y_LABEL);
    Some(doc.finish())
}
