use super::*;

fn example_rows() -> Vec<Reading> {
    vec![
        Reading::new("Blank", "0.10"),
        Reading::new("Blank", "0.11"),
        Reading::new("Control", "0.50"),
        Reading::new("Control", "0.52"),
        Reading::new("Drug", "0.30"),
        Reading::new("Drug", "0.31"),
        Reading::new("Drug", "#DIV/0!"),
    ]
}

#[test]
fn test_run_viability_example() {
    let report = run_viability(&example_rows(), &ViabilityParams::default()).unwrap();
    assert_eq!(report.n_readings, 6);
    assert_eq!(report.n_dropped, 1);

    let rows = report.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].treatment, "Control");
    assert_eq!(rows[0].viability, "100.0%");
    assert_eq!(rows[1].treatment, "Drug");
    assert_eq!(rows[1].viability, "49.4%");
    assert_eq!(rows[1].od_values, vec!["0.300", "0.310"]);
    assert_eq!(rows[1].mean_od, "0.200");
    assert_eq!(rows[1].replicates, 2);
}

#[test]
fn test_run_viability_is_idempotent() {
    let rows = example_rows();
    let params = ViabilityParams::default();
    let a = run_viability(&rows, &params).unwrap();
    let b = run_viability(&rows, &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_run_viability_missing_group_yields_no_results() {
    let rows = vec![Reading::new("Control", "0.5"), Reading::new("Drug", "0.3")];
    let err = run_viability(&rows, &ViabilityParams::default()).unwrap_err();
    assert_eq!(err.to_string(), "missing required group: Blank");
}

#[test]
fn test_run_viability_empty_input() {
    assert!(run_viability(&[], &ViabilityParams::default()).is_err());
}

#[test]
fn test_control_always_exactly_hundred() {
    let rows = vec![
        Reading::new("Blank", "0.07"),
        Reading::new("Blank", "0.09"),
        Reading::new("Control", "0.61"),
        Reading::new("Control", "0.33"),
        Reading::new("Control", "0.95"),
        Reading::new("Control", "0.47"),
    ];
    let report = run_viability(&rows, &ViabilityParams::default()).unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].viability, 100.0);
    assert_eq!(report.rows()[0].viability, "100.0%");
}

#[test]
fn test_display_rounds_quarter_thousandths_up() {
    let rows = vec![
        Reading::new("Blank", "0.125"),
        Reading::new("Control", "1.125"),
        Reading::new("Drug", "0.5625"),
        Reading::new("Drug", "0.6875"),
    ];
    let report = run_viability(&rows, &ViabilityParams::default()).unwrap();
    let drug = &report.rows()[1];
    assert_eq!(drug.od_values, vec!["0.563", "0.688"]);
    assert_eq!(drug.blank_adjusted, vec!["0.438", "0.563"]);
    assert_eq!(drug.mean_od, "0.500");
    assert_eq!(drug.viability, "50.0%");
    assert_eq!(drug.sd, "0.063");
}

#[test]
fn test_zero_viability_has_no_sign() {
    let rows = vec![
        Reading::new("Blank", "0.2"),
        Reading::new("Control", "0.1"),
        Reading::new("Drug", "0.2"),
    ];
    let report = run_viability(&rows, &ViabilityParams::default()).unwrap();
    assert_eq!(report.rows()[1].viability, "0.0%");
}
