use std::fmt::Write;

use crate::error::Result;
use crate::model::{Dashboard, Kpi, KpiStatus, Supplier};

use super::svg::{html_escape, ProportionChart, SvgElement};
use super::DashboardFormatter;

const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Intake Board</title>
    <style>
        :root {
            --color-success: #10b981;
            --color-warning: #f59e0b;
            --color-error: #ef4444;
            --color-accent: #2563eb;
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        header.page { background: var(--color-card); padding: 1.5rem; border-radius: 1rem; border: 1px solid var(--color-border); margin-bottom: 1.5rem; display: flex; justify-content: space-between; align-items: baseline; }
        h1 { font-size: 1.875rem; font-weight: 700; }
        .subtitle { font-size: 0.875rem; color: var(--color-text-muted); }
        .period { font-size: 0.875rem; font-weight: 600; color: var(--color-accent); }
        h2 { font-size: 1.25rem; font-weight: 600; margin: 1.5rem 0 1rem; }
        .kpi-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }
        .kpi-card { background: var(--color-card); border-radius: 0.75rem; padding: 1.25rem; border: 1px solid var(--color-border); }
        .kpi-card .title { font-size: 0.875rem; color: var(--color-text-muted); }
        .kpi-card .value { font-size: 2rem; font-weight: 600; }
        .kpi-card .unit { font-size: 1rem; color: var(--color-text-muted); margin-left: 0.25rem; }
        .kpi-card .target { font-size: 0.75rem; color: var(--color-text-muted); }
        .kpi-card .trend { font-size: 0.75rem; font-weight: 600; }
        .kpi-card.success .value { color: var(--color-success); }
        .kpi-card.warning .value { color: var(--color-warning); }
        .kpi-card.error .value { color: var(--color-error); }
        .trend.up { color: var(--color-success); }
        .trend.down { color: var(--color-error); }
        .charts-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(380px, 1fr)); gap: 1.5rem; margin-bottom: 1.5rem; }
        .chart-card { background: var(--color-card); border-radius: 0.75rem; padding: 1.25rem; border: 1px solid var(--color-border); }
        .chart-card h3 { font-size: 1rem; font-weight: 600; margin-bottom: 1rem; }
        .chart-body { display: flex; gap: 1.5rem; align-items: center; }
        .chart-body svg { width: 180px; height: 180px; flex-shrink: 0; }
        .legend { list-style: none; flex: 1; }
        .legend li { display: flex; align-items: center; gap: 0.5rem; padding: 0.25rem 0; font-size: 0.875rem; }
        .legend .swatch { width: 0.75rem; height: 0.75rem; border-radius: 9999px; flex-shrink: 0; }
        .legend .count { margin-left: auto; font-weight: 600; }
        .legend .share { color: var(--color-text-muted); font-size: 0.75rem; }
        .table-container { overflow-x: auto; margin-bottom: 1.5rem; }
        table { width: 100%; border-collapse: collapse; background: var(--color-card); border-radius: 0.75rem; overflow: hidden; border: 1px solid var(--color-border); }
        th, td { padding: 0.75rem 1rem; text-align: left; border-bottom: 1px solid var(--color-border); }
        th { background: var(--color-bg); font-weight: 600; font-size: 0.75rem; color: var(--color-text-muted); text-transform: uppercase; letter-spacing: 0.05em; }
        td { font-size: 0.875rem; }
        td.number { text-align: right; font-variant-numeric: tabular-nums; }
        tr:last-child td { border-bottom: none; }
        .rank { display: inline-flex; width: 2rem; height: 2rem; border-radius: 9999px; align-items: center; justify-content: center; font-size: 0.75rem; font-weight: 600; margin-right: 0.5rem; }
        .rank.success, .rate.success { color: var(--color-success); }
        .rank.warning, .rate.warning { color: var(--color-warning); }
        .rank.error, .rate.error { color: var(--color-error); }
        .rank.success { background: #d1fae5; }
        .rank.warning { background: #fef3c7; }
        .rank.error { background: #fee2e2; }
        .rate { font-weight: 600; }
        .issue { font-size: 0.8125rem; padding: 0.25rem 0.75rem; background: var(--color-bg); border-radius: 9999px; color: var(--color-text-muted); }
        .recommendations { background: var(--color-card); border: 1px solid var(--color-border); border-left: 4px solid var(--color-accent); border-radius: 0.75rem; padding: 1.25rem; margin-bottom: 1.5rem; }
        .recommendations h2 { margin-top: 0; }
        .recommendations li { margin-left: 1.25rem; padding: 0.25rem 0; font-size: 0.875rem; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
    </style>
</head>
<body>
    <div class="container">
"#;

const HTML_FOOTER: &str = r#"    </div>
</body>
</html>
"#;

/// HTML formatter producing a standalone, static dashboard page.
pub struct HtmlFormatter;

impl HtmlFormatter {
    const fn status_class(status: KpiStatus) -> &'static str {
        match status {
            KpiStatus::Success => "success",
            KpiStatus::Warning => "warning",
            KpiStatus::Error => "error",
        }
    }

    fn write_page_header(output: &mut String, board: &Dashboard) {
        output.push_str("        <header class=\"page\">\n");
        output.push_str("            <div>\n");
        writeln!(output, "                <h1>{}</h1>", html_escape(&board.title)).ok();
        writeln!(
            output,
            "                <p class=\"subtitle\">{}</p>",
            html_escape(&board.subtitle)
        )
        .ok();
        output.push_str("            </div>\n");
        writeln!(
            output,
            "            <span class=\"period\">{}</span>",
            board.period.display_name()
        )
        .ok();
        output.push_str("        </header>\n");
    }

    fn write_kpi_grid(output: &mut String, kpis: &[Kpi]) {
        output.push_str("        <div class=\"kpi-grid\">\n");
        for kpi in kpis {
            Self::write_kpi_card(output, kpi);
        }
        output.push_str("        </div>\n");
    }

    fn write_kpi_card(output: &mut String, kpi: &Kpi) {
        let class = Self::status_class(kpi.status);

        writeln!(output, "            <div class=\"kpi-card {class}\">").ok();
        writeln!(
            output,
            "                <p class=\"title\">{}</p>",
            html_escape(&kpi.title)
        )
        .ok();
        writeln!(
            output,
            "                <p><span class=\"value\">{}</span><span class=\"unit\">{}</span></p>",
            html_escape(&kpi.value),
            html_escape(&kpi.unit)
        )
        .ok();
        writeln!(
            output,
            "                <p class=\"target\">Target: {}</p>",
            html_escape(&kpi.target)
        )
        .ok();

        if let Some(trend) = kpi.trend {
            let (direction, arrow) = if trend > 0.0 {
                ("up", "&#x2191;")
            } else {
                ("down", "&#x2193;")
            };
            writeln!(
                output,
                "                <p class=\"trend {direction}\">{arrow} {:+}% per week</p>",
                trend
            )
            .ok();
        }

        output.push_str("            </div>\n");
    }

    fn write_charts(output: &mut String, board: &Dashboard) -> Result<()> {
        output.push_str("        <div class=\"charts-grid\">\n");

        for panel in &board.charts {
            let chart = ProportionChart::new(panel.title.as_str(), &panel.entries)?;

            output.push_str("            <div class=\"chart-card\">\n");
            writeln!(
                output,
                "                <h3>{}</h3>",
                html_escape(&panel.title)
            )
            .ok();
            output.push_str("                <div class=\"chart-body\">\n");

            for line in chart.render().lines() {
                writeln!(output, "                    {line}").ok();
            }

            Self::write_legend(output, &chart);

            output.push_str("                </div>\n");
            output.push_str("            </div>\n");
        }

        output.push_str("        </div>\n");
        Ok(())
    }

    fn write_legend(output: &mut String, chart: &ProportionChart) {
        output.push_str("                    <ul class=\"legend\">\n");
        for row in chart.legend() {
            writeln!(
                output,
                r#"                        <li><span class="swatch" style="background: {}"></span>{}<span class="count">{}</span> <span class="share">({}%)</span></li>"#,
                html_escape(&row.color),
                html_escape(&row.label),
                row.value,
                row.percentage
            )
            .ok();
        }
        output.push_str("                    </ul>\n");
    }

    fn write_supplier_table(output: &mut String, suppliers: &[Supplier]) {
        output.push_str("        <h2>Supplier quality rating</h2>\n");
        output.push_str("        <div class=\"table-container\">\n");
        output.push_str("        <table>\n");
        output.push_str("            <thead>\n");
        output.push_str("                <tr>\n");
        output.push_str("                    <th>Supplier</th>\n");
        output.push_str("                    <th>Shipments</th>\n");
        output.push_str("                    <th>Error rate</th>\n");
        output.push_str("                    <th>Main issue</th>\n");
        output.push_str("                </tr>\n");
        output.push_str("            </thead>\n");
        output.push_str("            <tbody>\n");

        for (i, supplier) in suppliers.iter().enumerate() {
            Self::write_supplier_row(output, i + 1, supplier);
        }

        output.push_str("            </tbody>\n");
        output.push_str("        </table>\n");
        output.push_str("        </div>\n");
    }

    fn write_supplier_row(output: &mut String, rank: usize, supplier: &Supplier) {
        let class = Self::status_class(supplier.severity());

        output.push_str("                <tr>\n");
        writeln!(
            output,
            r#"                    <td><span class="rank {class}">{rank}</span>{}</td>"#,
            html_escape(&supplier.name)
        )
        .ok();
        writeln!(
            output,
            r#"                    <td class="number">{}</td>"#,
            supplier.shipments
        )
        .ok();
        writeln!(
            output,
            r#"                    <td class="number"><span class="rate {class}">{}%</span></td>"#,
            supplier.error_rate
        )
        .ok();
        writeln!(
            output,
            r#"                    <td><span class="issue">{}</span></td>"#,
            html_escape(&supplier.main_issue)
        )
        .ok();
        output.push_str("                </tr>\n");
    }

    fn write_recommendations(output: &mut String, recommendations: &[String]) {
        if recommendations.is_empty() {
            return;
        }

        output.push_str("        <div class=\"recommendations\">\n");
        output.push_str("            <h2>Recommendations</h2>\n");
        output.push_str("            <ul>\n");
        for recommendation in recommendations {
            writeln!(
                output,
                "                <li>{}</li>",
                html_escape(recommendation)
            )
            .ok();
        }
        output.push_str("            </ul>\n");
        output.push_str("        </div>\n");
    }

    fn write_page_footer(output: &mut String, board: &Dashboard) {
        output.push_str("        <div class=\"footer\">\n");
        writeln!(
            output,
            "            Last updated: {} | Owner: {} | Generated by <strong>intake-board</strong>",
            html_escape(&board.updated_at),
            html_escape(&board.owner)
        )
        .ok();
        output.push_str("        </div>\n");
    }
}

impl DashboardFormatter for HtmlFormatter {
    fn format(&self, board: &Dashboard) -> Result<String> {
        let mut output = String::new();

        output.push_str(HTML_HEADER);
        Self::write_page_header(&mut output, board);
        Self::write_kpi_grid(&mut output, &board.kpis);
        Self::write_charts(&mut output, board)?;
        Self::write_supplier_table(&mut output, &board.suppliers);
        Self::write_recommendations(&mut output, &board.recommendations);
        Self::write_page_footer(&mut output, board);
        output.push_str(HTML_FOOTER);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
