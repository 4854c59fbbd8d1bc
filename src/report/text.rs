use crate::model::result::{ResultRow, ViabilityReport};
use crate::report::{format_fixed3, format_percent, join_values};

const BAR_WIDTH: usize = 40;

const HEADER: [&str; 7] = [
    "Treatment",
    "OD450",
    "Blank-adjusted OD",
    "Mean OD",
    "Viability",
    "Replicates",
    "SD",
];

pub fn render_report_text(report: &ViabilityReport, source: &str) -> String {
    let mut out = String::new();

    out.push_str("Cell Viability Report\n");
    out.push_str("=====================\n\n");
    out.push_str(&format!("Input: {}\n", source));
    out.push_str(&format!(
        "Readings used: {} (dropped {})\n",
        report.n_readings, report.n_dropped
    ));
    out.push_str(&format!(
        "Blank mean OD: {}\nControl mean OD: {}\n\n",
        format_fixed3(report.blank_mean),
        format_fixed3(report.control_mean)
    ));

    let rows = report.rows();
    out.push_str("1. Results\n");
    out.push_str(&render_table(&rows));
    let trimmed: Vec<&str> = report
        .results
        .iter()
        .filter(|r| r.outliers_removed)
        .map(|r| r.treatment.as_str())
        .collect();
    if !trimmed.is_empty() {
        out.push_str(&format!(
            "Min/max replicate removed: {}\n",
            trimmed.join(", ")
        ));
    }
    out.push('\n');

    out.push_str("2. Viability (%)\n");
    let bars: Vec<(&str, f64, bool)> = report
        .results
        .iter()
        .map(|r| (r.treatment.as_str(), r.viability, r.is_control))
        .collect();
    out.push_str(&render_bar_chart(&bars));

    out
}

pub fn render_table(rows: &[ResultRow]) -> String {
    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|r| {
            [
                r.treatment.clone(),
                join_values(&r.od_values),
                join_values(&r.blank_adjusted),
                r.mean_od.clone(),
                r.viability.clone(),
                r.replicates.to_string(),
                r.sd.clone(),
            ]
        })
        .collect();

    let mut widths = HEADER.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADER.map(|h| h.to_string()), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(rule.join("  ").trim_end());
    out.push('\n');
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let mut line = String::new();
    for (i, (cell, &w)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<w$}", cell, w = w));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Horizontal bars scaled so that the larger of 100% and the highest finite
/// viability spans the full width. Negative and non-finite values get no bar.
pub fn render_bar_chart(bars: &[(&str, f64, bool)]) -> String {
    let scale_max = bars
        .iter()
        .map(|b| b.1)
        .filter(|v| v.is_finite())
        .fold(100.0f64, f64::max);
    let label_width = bars
        .iter()
        .map(|b| b.0.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for &(name, value, is_control) in bars {
        let len = if value.is_finite() && value > 0.0 {
            ((value / scale_max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let fill = if is_control { '#' } else { '=' };
        let bar = fill.to_string().repeat(len);
        out.push_str(&format!(
            "{:<lw$} |{:<bw$}| {}",
            name,
            bar,
            format_percent(value),
            lw = label_width,
            bw = BAR_WIDTH
        ));
        if is_control {
            out.push_str(" (control)");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
