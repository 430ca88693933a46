//! Dashboard page: sidebar inputs, metric cards, charts

use std::fmt::Write;

use gridguard_core::constants::{APP_NAME, APP_VERSION};
use gridguard_core::logic::features::input::{
    CONSUMERS_MAX, CONSUMERS_MIN, CURRENT_LOAD_MAX_MW, CURRENT_LOAD_MIN_MW, TEMPERATURE_MAX_C,
    TEMPERATURE_MIN_C, TIME_HOUR_MAX,
};
use gridguard_core::AreaType;

use super::{escape_html, svg};
use crate::models::{PredictRequest, PredictResponse};

/// Everything one render of the page needs
pub struct DashboardView {
    /// Values shown in the input form
    pub form: PredictRequest,
    pub result: Option<PredictResponse>,
    pub error: Option<String>,
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; display: flex; min-height: 100vh; color: #1f2937; }
aside { width: 280px; background: #f3f4f6; padding: 24px; box-sizing: border-box; }
main { flex: 1; padding: 24px 32px; }
label { display: block; margin-top: 14px; font-size: 14px; }
input, select { width: 100%; margin-top: 4px; }
output { font-weight: bold; }
button { margin-top: 20px; width: 100%; padding: 10px; font-size: 15px; cursor: pointer; }
.metrics { display: flex; gap: 16px; }
.metric { flex: 1; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; }
.metric .label { font-size: 13px; color: #6b7280; }
.metric .value { font-size: 28px; margin-top: 6px; }
.charts { display: flex; flex-wrap: wrap; gap: 16px; margin-top: 16px; }
.error { background: #fee2e2; color: #991b1b; padding: 12px 16px; border-radius: 8px; }
footer { margin-top: 40px; font-size: 12px; color: #6b7280; border-top: 1px solid #e5e7eb; padding-top: 8px; }
"#;

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::with_capacity(16 * 1024);

    let _ = write!(
        out,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>{name}</title><style>{style}</style></head><body>"#,
        name = escape_html(APP_NAME),
        style = STYLE,
    );

    render_sidebar(&mut out, &view.form);

    out.push_str("<main>");
    let _ = write!(
        out,
        "<h1>⚡ {} – Transformer Overload Prediction Dashboard</h1>",
        escape_html(APP_NAME)
    );

    if let Some(error) = &view.error {
        let _ = write!(out, r#"<div class="error" role="alert">{}</div>"#, escape_html(error));
    }

    if let Some(result) = &view.result {
        render_result(&mut out, result);
    }

    let _ = write!(
        out,
        "<footer>{} v{} | Smart Grid Intelligence System</footer></main></body></html>",
        escape_html(APP_NAME),
        APP_VERSION
    );
    out
}

fn render_sidebar(out: &mut String, form: &PredictRequest) {
    out.push_str(r#"<aside><h2>🔧 Transformer Inputs</h2><form method="post" action="/predict">"#);

    let _ = write!(
        out,
        r#"<label>Time (Hour): <output>{v}</output><input type="range" name="time_hour" min="0" max="{max}" step="1" value="{v}" oninput="this.previousElementSibling.value=this.value"></label>"#,
        v = form.time_hour,
        max = TIME_HOUR_MAX
    );
    let _ = write!(
        out,
        r#"<label>Current Load (MW)<input type="number" name="current_load_mw" min="{min}" max="{max}" step="0.1" value="{v}" required></label>"#,
        v = form.current_load_mw,
        min = CURRENT_LOAD_MIN_MW,
        max = CURRENT_LOAD_MAX_MW
    );
    let _ = write!(
        out,
        r#"<label>Temperature (°C): <output>{v}</output><input type="range" name="temperature_c" min="{min}" max="{max}" step="1" value="{v}" oninput="this.previousElementSibling.value=this.value"></label>"#,
        v = form.temperature_c,
        min = TEMPERATURE_MIN_C,
        max = TEMPERATURE_MAX_C
    );

    out.push_str(r#"<label>Area Type<select name="area_type">"#);
    for area in AreaType::ALL {
        let selected = if area.as_str().eq_ignore_ascii_case(form.area_type.trim()) {
            " selected"
        } else {
            ""
        };
        let _ = write!(out, r#"<option value="{a}"{s}>{a}</option>"#, a = area.as_str(), s = selected);
    }
    out.push_str("</select></label>");

    let _ = write!(
        out,
        r#"<label>Consumers<input type="number" name="consumers" min="{min}" max="{max}" step="1" value="{v}" required></label>"#,
        v = form.consumers,
        min = CONSUMERS_MIN,
        max = CONSUMERS_MAX
    );

    out.push_str(r#"<button type="submit">⚡ Predict Transformer Status</button></form></aside>"#);
}

fn render_result(out: &mut String, result: &PredictResponse) {
    out.push_str(r#"<section class="metrics">"#);
    metric(out, "Predicted Load (Next Hour)", &escape_html(&result.predicted_load_display));
    metric(out, "Utilization", &escape_html(&result.utilization_display));
    metric(
        out,
        "Risk",
        &format!(
            r#"<span style="color:{}">{}</span>"#,
            escape_html(result.color),
            escape_html(result.risk_label)
        ),
    );
    out.push_str("</section><hr>");

    out.push_str(r#"<h2>📊 Smart Grid Visual Analytics</h2><section class="charts">"#);
    out.push_str(&svg::load_vs_temperature(&result.charts.load_vs_temperature));
    out.push_str(&svg::utilization_level(&result.charts.utilization, result.color));
    out.push_str(&svg::load_comparison(&result.charts.load_comparison));
    out.push_str("</section>");
}

fn metric(out: &mut String, label: &str, value_html: &str) {
    let _ = write!(
        out,
        r#"<div class="metric"><div class="label">{}</div><div class="value">{}</div></div>"#,
        escape_html(label),
        value_html
    );
}
