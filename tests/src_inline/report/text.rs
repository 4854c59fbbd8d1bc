use super::*;
use crate::model::params::ViabilityParams;
use crate::model::reading::Reading;
use crate::pipeline::run_viability;

fn example_report() -> ViabilityReport {
    let rows = [
        ("Blank", "0.10"),
        ("Blank", "0.11"),
        ("Control", "0.50"),
        ("Control", "0.52"),
        ("Drug", "0.30"),
        ("Drug", "0.31"),
        ("Spiky", "0.30"),
        ("Spiky", "0.31"),
        ("Spiky", "0.90"),
    ];
    let readings: Vec<Reading> = rows.iter().map(|&(t, od)| Reading::new(t, od)).collect();
    run_viability(&readings, &ViabilityParams::default()).unwrap()
}

#[test]
fn test_report_text_sections() {
    let text = render_report_text(&example_report(), "plate.csv");
    assert!(text.starts_with("Cell Viability Report\n"));
    assert!(text.contains("Input: plate.csv\n"));
    assert!(text.contains("Blank mean OD: 0.105\n"));
    assert!(text.contains("Control mean OD: 0.510\n"));
    assert!(text.contains("Min/max replicate removed: Spiky\n"));
    assert!(text.contains("2. Viability (%)\n"));
}

#[test]
fn test_table_has_header_and_rows() {
    let table = render_table(&example_report().rows());
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Treatment"));
    assert!(lines[1].starts_with("---------"));
    assert!(lines[2].starts_with("Control"));
    assert!(lines[2].contains("100.0%"));
    assert!(lines[3].contains("0.300, 0.310"));
    assert!(lines[3].contains("49.4%"));
}

#[test]
fn test_bar_chart_scaling() {
    let chart = render_bar_chart(&[("Control", 100.0, true), ("Drug", 50.0, false)]);
    let lines: Vec<&str> = chart.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(&"#".repeat(40)));
    assert!(lines[0].ends_with("100.0% (control)"));
    assert!(lines[1].contains(&format!("|{}{}|", "=".repeat(20), " ".repeat(20))));
    assert!(lines[1].ends_with("50.0%"));
}

#[test]
fn test_bar_chart_non_finite_and_negative() {
    let chart = render_bar_chart(&[
        ("Control", 100.0, true),
        ("Zero", f64::INFINITY, false),
        ("Neg", -5.0, false),
    ]);
    let lines: Vec<&str> = chart.lines().collect();
    assert!(lines[1].contains(&format!("|{}|", " ".repeat(40))));
    assert!(lines[1].ends_with("inf%"));
    assert!(lines[2].ends_with("-5.0%"));
}

#[test]
fn test_bar_chart_scales_above_hundred() {
    let chart = render_bar_chart(&[("Control", 100.0, true), ("Boost", 200.0, false)]);
    let lines: Vec<&str> = chart.lines().collect();
    assert!(lines[0].contains(&format!("|{}{}|", "#".repeat(20), " ".repeat(20))));
    assert!(lines[1].contains(&"=".repeat(40)));
}
