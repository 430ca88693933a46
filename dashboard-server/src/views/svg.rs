//! Inline SVG charts
//!
//! Plain string rendering, no client-side script. Each chart is 480x300.

use std::fmt::Write;

use gridguard_core::logic::charts::{BarDatum, TemperatureCurve, UtilizationGauge};

use super::escape_html;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 32.0;
const MARGIN_BOTTOM: f64 = 44.0;
const BAR_COLOR: &str = "#3b82f6";

/// Data-space to pixel-space mapping for one chart
struct Plot {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Plot {
    fn sx(&self, x: f64) -> f64 {
        let span = (self.x_max - self.x_min).max(f64::EPSILON);
        MARGIN_LEFT + (x - self.x_min) / span * (WIDTH - MARGIN_LEFT - MARGIN_RIGHT)
    }

    fn sy(&self, y: f64) -> f64 {
        let span = (self.y_max - self.y_min).max(f64::EPSILON);
        HEIGHT - MARGIN_BOTTOM - (y - self.y_min) / span * (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM)
    }

    fn bottom(&self) -> f64 {
        HEIGHT - MARGIN_BOTTOM
    }
}

fn open(out: &mut String, title: &str) {
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img" aria-label="{t}">"#,
        w = WIDTH,
        h = HEIGHT,
        t = escape_html(title),
    );
    let _ = write!(
        out,
        r#"<text x="{}" y="20" text-anchor="middle" font-size="14" font-weight="bold">{}</text>"#,
        WIDTH / 2.0,
        escape_html(title)
    );
}

fn axes(out: &mut String, plot: &Plot, y_ticks: &[f64], x_label: &str, y_label: &str) {
    let _ = write!(
        out,
        r##"<line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="#333"/><line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="#333"/>"##,
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = plot.bottom(),
        r = WIDTH - MARGIN_RIGHT,
    );
    for &tick in y_ticks {
        let y = plot.sy(tick);
        let _ = write!(
            out,
            r#"<text x="{}" y="{:.1}" text-anchor="end" font-size="10" dominant-baseline="middle">{}</text>"#,
            MARGIN_LEFT - 6.0,
            y,
            format_tick(tick)
        );
    }
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" text-anchor="middle" font-size="11">{}</text>"#,
        (MARGIN_LEFT + WIDTH - MARGIN_RIGHT) / 2.0,
        HEIGHT - 8.0,
        escape_html(x_label)
    );
    let _ = write!(
        out,
        r#"<text x="14" y="{y}" text-anchor="middle" font-size="11" transform="rotate(-90 14 {y})">{}</text>"#,
        escape_html(y_label),
        y = (MARGIN_TOP + plot.bottom()) / 2.0,
    );
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Evenly spaced ticks from 0 to `max`
fn ticks(max: f64, count: usize) -> Vec<f64> {
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

/// Round up to a readable axis bound
fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let step = magnitude / 2.0;
    (value / step).ceil() * step
}

/// Predicted load across the temperature sweep, current point highlighted
pub fn load_vs_temperature(curve: &TemperatureCurve) -> String {
    let x_min = curve.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let x_max = curve.points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let y_top = curve
        .points
        .iter()
        .map(|p| p.y)
        .chain(std::iter::once(curve.current.y))
        .fold(0.0, f64::max);

    let plot = Plot {
        x_min: if x_min.is_finite() { x_min } else { curve.current.x - 1.0 },
        x_max: if x_max.is_finite() { x_max } else { curve.current.x + 1.0 },
        y_min: 0.0,
        y_max: nice_ceiling(y_top * 1.1),
    };

    let mut out = String::new();
    open(&mut out, "Load vs Temperature (model response)");
    axes(&mut out, &plot, &ticks(plot.y_max, 4), "Temperature (°C)", "Predicted Load (MW)");

    let path: Vec<String> = curve
        .points
        .iter()
        .map(|p| format!("{:.1},{:.1}", plot.sx(p.x), plot.sy(p.y)))
        .collect();
    let _ = write!(
        out,
        r#"<polyline fill="none" stroke="{}" stroke-width="2" points="{}"/>"#,
        BAR_COLOR,
        path.join(" ")
    );
    for p in &curve.points {
        let _ = write!(
            out,
            r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="{}"/>"#,
            plot.sx(p.x),
            plot.sy(p.y),
            BAR_COLOR
        );
        let _ = write!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="10">{}</text>"#,
            plot.sx(p.x),
            plot.bottom() + 14.0,
            format_tick(p.x)
        );
    }
    let _ = write!(
        out,
        r##"<circle cx="{:.1}" cy="{:.1}" r="6" fill="none" stroke="#ef4444" stroke-width="2"><title>Current input: {:.1} °C, {:.2} MW</title></circle>"##,
        plot.sx(curve.current.x),
        plot.sy(curve.current.y),
        curve.current.x,
        curve.current.y
    );

    out.push_str("</svg>");
    out
}

/// Single utilization bar with dashed tier lines
pub fn utilization_level(gauge: &UtilizationGauge, color: &str) -> String {
    let plot = Plot {
        x_min: 0.0,
        x_max: 1.0,
        y_min: 0.0,
        y_max: gauge.y_max,
    };

    let mut out = String::new();
    open(&mut out, "Transformer Utilization Level");
    axes(&mut out, &plot, &ticks(plot.y_max, 6), "Utilization", "%");

    let value = gauge.utilization_pct.clamp(0.0, gauge.y_max);
    let bar_width = 120.0;
    let x = plot.sx(0.5) - bar_width / 2.0;
    let _ = write!(
        out,
        r#"<rect x="{:.1}" y="{:.1}" width="{}" height="{:.1}" fill="{}"><title>{:.1}%</title></rect>"#,
        x,
        plot.sy(value),
        bar_width,
        plot.bottom() - plot.sy(value),
        escape_html(color),
        gauge.utilization_pct
    );

    for &line in &gauge.reference_lines {
        let y = plot.sy(line);
        let _ = write!(
            out,
            r##"<line x1="{l}" y1="{y:.1}" x2="{r}" y2="{y:.1}" stroke="#555" stroke-dasharray="6 4"/>"##,
            l = MARGIN_LEFT,
            r = WIDTH - MARGIN_RIGHT,
            y = y,
        );
    }

    out.push_str("</svg>");
    out
}

/// Current vs predicted load
pub fn load_comparison(bars: &[BarDatum]) -> String {
    let y_top = bars.iter().map(|b| b.value).fold(0.0, f64::max);
    let plot = Plot {
        x_min: 0.0,
        x_max: bars.len().max(1) as f64,
        y_min: 0.0,
        y_max: nice_ceiling(y_top * 1.1),
    };

    let mut out = String::new();
    open(&mut out, "Current vs Predicted Load");
    axes(&mut out, &plot, &ticks(plot.y_max, 4), "", "MW");

    let bar_width = 90.0;
    for (i, bar) in bars.iter().enumerate() {
        let center = plot.sx(i as f64 + 0.5);
        let value = bar.value.max(0.0);
        let _ = write!(
            out,
            r#"<rect x="{:.1}" y="{:.1}" width="{}" height="{:.1}" fill="{}"><title>{:.2} MW</title></rect>"#,
            center - bar_width / 2.0,
            plot.sy(value),
            bar_width,
            plot.bottom() - plot.sy(value),
            BAR_COLOR,
            bar.value
        );
        let _ = write!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11">{}</text>"#,
            center,
            plot.bottom() + 16.0,
            escape_html(&bar.label)
        );
    }

    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridguard_core::logic::charts::ChartPoint;

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(23.1), 25.0);
        assert_eq!(nice_ceiling(120.0), 150.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
    }

    #[test]
    fn test_curve_renders_every_point() {
        let curve = TemperatureCurve {
            points: vec![
                ChartPoint { x: 10.0, y: 12.0 },
                ChartPoint { x: 20.0, y: 15.0 },
                ChartPoint { x: 30.0, y: 19.0 },
            ],
            current: ChartPoint { x: 20.0, y: 15.0 },
        };
        let svg = load_vs_temperature(&curve);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches(r#"r="3""#).count(), 3);
        assert!(svg.contains("Current input: 20.0 °C, 15.00 MW"));
    }

    #[test]
    fn test_utilization_has_reference_lines() {
        let gauge = UtilizationGauge {
            utilization_pct: 105.0,
            reference_lines: vec![80.0, 100.0],
            y_max: 120.0,
        };
        let svg = utilization_level(&gauge, "red");
        assert_eq!(svg.matches("stroke-dasharray").count(), 2);
        assert!(svg.contains("105.0%"));
    }

    #[test]
    fn test_comparison_labels_escaped() {
        let bars = vec![BarDatum { label: "<Now>".to_string(), value: 3.0 }];
        let svg = load_comparison(&bars);
        assert!(svg.contains("&lt;Now&gt;"));
        assert!(!svg.contains("<Now>"));
    }
}
