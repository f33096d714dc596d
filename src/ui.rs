use crate::chart::{ChartView, ChartsView};
use crate::table::AlertTable;
use std::fmt::Write;

/// A dashboard section either renders its data or an error notice; one
/// section failing leaves the others untouched.
pub type Section<'a, T> = Result<&'a T, &'a str>;

pub fn render_dashboard(charts: Section<'_, ChartsView>, alerts: Section<'_, AlertTable>) -> String {
    let charts_html = match charts {
        Ok(view) => render_charts(view),
        Err(message) => render_failure("charts", message),
    };
    let alerts_html = match alerts {
        Ok(table) => render_alerts(table),
        Err(message) => render_failure("alerts", message),
    };

    DASHBOARD_HTML
        .replace("{{CHARTS}}", &charts_html)
        .replace("{{ALERTS}}", &alerts_html)
}

fn render_failure(section: &str, message: &str) -> String {
    format!(
        r#"<p class="section-error">Unable to load {section}: {}</p>"#,
        escape(message)
    )
}

fn render_charts(view: &ChartsView) -> String {
    if view.charts.is_empty() {
        return r#"<p class="empty">No categories yet.</p>"#.to_string();
    }
    let mut html = String::new();
    for chart in &view.charts {
        html.push_str(&render_chart(chart));
    }
    let data = serde_json::to_string(view)
        .unwrap_or_default()
        .replace("</", "<\\/");
    let _ = write!(
        html,
        r#"<script type="application/json" id="chart-data">{data}</script>"#
    );
    html
}

fn render_chart(chart: &ChartView) -> String {
    let peak = chart
        .purchased()
        .iter()
        .chain(chart.used())
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<section class="chart"><h3>{}</h3><div class="bars">"#,
        escape(&chart.category)
    );
    for ((label, purchased), used) in chart.labels.iter().zip(chart.purchased()).zip(chart.used()) {
        let _ = write!(
            html,
            r#"<div class="month"><span class="bar purchased" style="height:{}%" title="{} purchased"></span><span class="bar used" style="height:{}%" title="{} used"></span><span class="label">{}</span></div>"#,
            purchased * 100 / peak,
            purchased,
            used * 100 / peak,
            used,
            escape(label)
        );
    }
    html.push_str("</div></section>");
    html
}

fn render_alerts(table: &AlertTable) -> String {
    let mut html = String::from("<table><tr>");
    for header in table.headers {
        let _ = write!(html, "<th>{header}</th>");
    }
    html.push_str("</tr>");
    for row in &table.rows {
        let class = row.tag.css_class();
        if class.is_empty() {
            html.push_str("<tr><td>");
        } else {
            let _ = write!(html, r#"<tr><td class="{class}">"#);
        }
        let _ = write!(
            html,
            "{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&row.urgency),
            escape(&row.kind),
            escape(&row.category),
            escape(&row.product),
            escape(&row.effective_date)
        );
    }
    html.push_str("</table>");
    html
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Supply Dashboard</title>
  <style>
    :root {
      --bg: #1f2326;
      --panel: #2a2f33;
      --ink: #cccccc;
      --purchased: #25bac3;
      --used: rgba(255, 179, 0, 0.7);
      --critical: #e5534b;
      --warning: #d4a72c;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 24px 30px 60px;
    }

    h1 {
      margin: 0 0 24px;
    }

    .chart {
      background: var(--panel);
      border-radius: 12px;
      padding: 12px 18px 18px;
      margin-bottom: 40px;
    }

    .bars {
      display: grid;
      grid-template-columns: repeat(12, 1fr);
      gap: 8px;
      height: 250px;
      align-items: end;
    }

    .month {
      display: grid;
      grid-template-columns: 1fr 1fr;
      grid-template-rows: 1fr auto;
      align-items: end;
      height: 100%;
      gap: 2px;
    }

    .bar {
      display: block;
      min-height: 1px;
      border: 1px solid var(--ink);
    }

    .bar.purchased {
      background: var(--purchased);
    }

    .bar.used {
      background: var(--used);
    }

    .label {
      grid-column: 1 / span 2;
      font-size: 0.75rem;
      transform: rotate(-45deg);
      transform-origin: top left;
      margin-top: 18px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: var(--panel);
    }

    th, td {
      text-align: left;
      padding: 8px 12px;
      border-bottom: 1px solid #3a4045;
    }

    td.critical {
      color: var(--critical);
      font-weight: 600;
    }

    td.warning {
      color: var(--warning);
      font-weight: 600;
    }

    .section-error {
      color: var(--critical);
    }
  </style>
</head>
<body>
  <h1>Dashboard</h1>
  <div id="charts-section">{{CHARTS}}</div>
  <h2>Alerts</h2>
  <div id="table-section">{{ALERTS}}</div>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_charts;
    use crate::models::{AlertRecord, CategorySeries, ChartsPayload, MonthRecord};
    use crate::table::build_table;

    fn charts() -> ChartsView {
        let payload = ChartsPayload {
            charts: vec![CategorySeries {
                category: "Gloves & <Wraps>".to_string(),
                data: vec![MonthRecord {
                    month: "2024-03".parse().unwrap(),
                    orders: 5,
                    usages: 2,
                }],
            }],
        };
        build_charts(&payload, "2024-03".parse().unwrap())
    }

    fn alerts() -> AlertTable {
        build_table(&[AlertRecord {
            urgency: "Critical".to_string(),
            kind: "Expiration".to_string(),
            category: "Gloves".to_string(),
            product: "Nitrile Gloves".to_string(),
            effective_date: "2025-04-01".to_string(),
        }])
    }

    #[test]
    fn renders_both_sections() {
        let html = render_dashboard(Ok(&charts()), Ok(&alerts()));
        assert!(html.contains("Gloves &amp; &lt;Wraps&gt;"));
        assert!(html.contains("<th>Product Name</th>"));
        assert!(html.contains(r#"<td class="critical">Critical</td>"#));
        assert!(html.contains(r#"id="chart-data""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn failed_section_does_not_hide_the_other() {
        let html = render_dashboard(Err("bad stored date"), Ok(&alerts()));
        assert!(html.contains("Unable to load charts: bad stored date"));
        assert!(html.contains("Nitrile Gloves"));
    }

    #[test]
    fn escapes_script_terminators_in_chart_data() {
        let mut view = charts();
        view.charts[0].category = "</script>".to_string();
        let html = render_charts(&view);
        assert!(!html.contains("</script><"));
        assert!(html.contains("<\\/script>"));
    }
}
