//! Minimal SVG document builder and axis helpers shared by the charts.

use std::fmt::Write;

pub const FONT_FAMILY: &str = "-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif";
pub const AXIS_COLOR: &str = "#333333";
pub const GRID_COLOR: &str = "#e5e5e5";

/// Escape text for SVG/HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Plot area inside the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Map `value` in `[min, max]` onto the horizontal extent.
    pub fn x(&self, value: f64, min: f64, max: f64) -> f64 {
        if max > min {
            self.left + (value - min) / (max - min) * self.width
        } else {
            self.left + self.width / 2.0
        }
    }

    /// Map `value` in `[min, max]` onto the vertical extent, larger values higher up.
    pub fn y(&self, value: f64, min: f64, max: f64) -> f64 {
        if max > min {
            self.bottom() - (value - min) / (max - min) * self.height
        } else {
            self.top + self.height / 2.0
        }
    }
}

/// Accumulates SVG elements and wraps them in an `<svg>` root.
pub struct SvgDocument {
    width: u32,
    height: u32,
    body: String,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn raw(&mut self, markup: &str) {
        self.body.push_str(markup);
        self.body.push('\n');
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{stroke}" stroke-width="{width}"/>"#
        );
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{fill}"/>"#
        );
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, width: f64) {
        let coords: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("{x:.2},{y:.2}"))
            .collect();
        let _ = writeln!(
            self.body,
            r#"<polyline points="{}" fill="none" stroke="{stroke}" stroke-width="{width}" stroke-linejoin="round"/>"#,
            coords.join(" ")
        );
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, title: Option<&str>) {
        match title {
            Some(title) => {
                let _ = writeln!(
                    self.body,
                    r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{fill}"><title>{}</title></circle>"#,
                    escape(title)
                );
            }
            None => {
                let _ = writeln!(
                    self.body,
                    r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{fill}"/>"#
                );
            }
        }
    }

    /// Text anchored at (x, y). `rotate` is in degrees around the anchor.
    pub fn text(&mut self, x: f64, y: f64, content: &str, style: TextStyle) {
        let transform = if style.rotate != 0.0 {
            format!(r#" transform="rotate({} {x:.2} {y:.2})""#, style.rotate)
        } else {
            String::new()
        };
        let _ = writeln!(
            self.body,
            r#"<text x="{x:.2}" y="{y:.2}" font-family="{FONT_FAMILY}" font-size="{}" font-weight="{}" text-anchor="{}" fill="{}"{transform}>{}</text>"#,
            style.size,
            if style.bold { "bold" } else { "normal" },
            style.anchor,
            style.color,
            escape(content)
        );
    }

    /// Chart title centred above the plot area.
    pub fn title(&mut self, area: &PlotArea, title: &str) {
        self.text(
            area.left + area.width / 2.0,
            area.top - 16.0,
            title,
            TextStyle::centered(16.0).bold(),
        );
    }

    /// Axis lines plus x/y labels.
    pub fn axes(&mut self, area: &PlotArea, x_label: &str, y_label: &str) {
        self.line(area.left, area.bottom(), area.right(), area.bottom(), AXIS_COLOR, 1.0);
        self.line(area.left, area.top, area.left, area.bottom(), AXIS_COLOR, 1.0);

        self.text(
            area.left + area.width / 2.0,
            f64::from(self.height) - 10.0,
            x_label,
            TextStyle::centered(13.0),
        );
        self.text(
            18.0,
            area.top + area.height / 2.0,
            y_label,
            TextStyle::centered(13.0).rotated(-90.0),
        );
    }

    /// Horizontal gridlines and labels for the given y ticks.
    pub fn y_ticks(&mut self, area: &PlotArea, ticks: &[f64], min: f64, max: f64) {
        for &tick in ticks {
            let y = area.y(tick, min, max);
            self.line(area.left, y, area.right(), y, GRID_COLOR, 1.0);
            self.line(area.left - 5.0, y, area.left, y, AXIS_COLOR, 1.0);
            self.text(area.left - 8.0, y + 4.0, &format_tick(tick), TextStyle::end(11.0));
        }
    }

    pub fn finish(self) -> String {
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img">
<rect width="100%" height="100%" fill="#ffffff"/>
{body}</svg>"##,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

/// Font settings for [`SvgDocument::text`].
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: f64,
    pub anchor: &'static str,
    pub bold: bool,
    pub color: &'static str,
    pub rotate: f64,
}

impl TextStyle {
    pub fn centered(size: f64) -> Self {
        Self {
            size,
            anchor: "middle",
            bold: false,
            color: AXIS_COLOR,
            rotate: 0.0,
        }
    }

    pub fn start(size: f64) -> Self {
        Self {
            anchor: "start",
            ..Self::centered(size)
        }
    }

    pub fn end(size: f64) -> Self {
        Self {
            anchor: "end",
            ..Self::centered(size)
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }
}

/// Round `range` to 1, 2, 5 or 10 times a power of ten.
fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10f64.powf(exponent);
    let nice = if round {
        match fraction {
            f if f < 1.5 => 1.0,
            f if f < 3.0 => 2.0,
            f if f < 7.0 => 5.0,
            _ => 10.0,
        }
    } else {
        match fraction {
            f if f <= 1.0 => 1.0,
            f if f <= 2.0 => 2.0,
            f if f <= 5.0 => 5.0,
            _ => 10.0,
        }
    };
    nice * 10f64.powf(exponent)
}

/// Evenly spaced "nice" tick values covering `[min, max]`.
///
/// A degenerate range is widened around its value so there is always
/// something to draw.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (min, max) = if max > min {
        (min, max)
    } else if min == 0.0 {
        (0.0, 1.0)
    } else {
        let pad = min.abs() * 0.5;
        (min - pad, max + pad)
    };

    let span = nice_number(max - min, false);
    let step = nice_number(span / (target.max(2) - 1) as f64, true);
    let start = (min / step).floor() * step;
    let end = (max / step).ceil() * step;

    let count = ((end - start) / step).round() as usize;
    (0..=count).map(|i| start + i as f64 * step).collect()
}

/// Compact tick label: integers without decimals, small values with up to six.
pub fn format_tick(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let formatted = format!("{:.6}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_nice_ticks_cover_range() {
        let ticks = nice_ticks(0.0, 9.3, 5);
        assert_eq!(ticks.first(), Some(&0.0));
        assert!(*ticks.last().unwrap() >= 9.3);
        assert!(ticks.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_nice_ticks_degenerate_range() {
        let ticks = nice_ticks(4.0, 4.0, 5);
        assert!(ticks.first().unwrap() <= &4.0);
        assert!(ticks.last().unwrap() >= &4.0);
        assert!(ticks.len() >= 2);

        let zero = nice_ticks(0.0, 0.0, 5);
        assert_eq!(zero.first(), Some(&0.0));
        assert!(zero.len() >= 2);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(5.0), "5");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(-1200.0), "-1200");
        assert_eq!(format_tick(0.0000001), "0");
    }

    #[test]
    fn test_plot_area_mapping() {
        let area = PlotArea {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 50.0,
        };
        assert_eq!(area.x(5.0, 0.0, 10.0), 60.0);
        assert_eq!(area.y(10.0, 0.0, 10.0), 20.0);
        assert_eq!(area.y(0.0, 0.0, 10.0), 70.0);
        // degenerate ranges collapse to the centre
        assert_eq!(area.x(3.0, 3.0, 3.0), 60.0);
    }

    #[test]
    fn test_document_wraps_body() {
        let mut doc = SvgDocument::new(200, 100);
        doc.rect(0.0, 0.0, 10.0, 10.0, "#000");
        let svg = doc.finish();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 200 100""#));
        assert!(svg.ends_with("</svg>"));
    }
}
