use super::groups::TreatmentGroups;
use super::reading::{OdValue, Reading};
use super::result::TreatmentResult;

#[test]
fn test_od_value_parse_text() {
    assert_eq!(OdValue::from(" 0.512 ").parse(), Some(0.512));
    assert_eq!(OdValue::from("abc").parse(), None);
    assert_eq!(OdValue::from("").parse(), None);
    assert_eq!(OdValue::from("NaN").parse(), None);
    assert_eq!(OdValue::from("inf").parse(), None);
}

#[test]
fn test_od_value_parse_number() {
    assert_eq!(OdValue::from(1.25).parse(), Some(1.25));
    assert_eq!(OdValue::Number(f64::INFINITY).parse(), None);
    assert_eq!(OdValue::Missing.parse(), None);
}

#[test]
fn test_reading_deserializes_string_and_number() {
    let json = r#"[
        {"Treatment": "Blank", "OD450": 0.1, "Well": "A1"},
        {"Treatment": "Drug", "OD450": "0.31"},
        {"Treatment": "Drug", "OD450": null}
    ]"#;
    let rows: Vec<Reading> = serde_json::from_str(json).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].od450, OdValue::Number(0.1));
    assert_eq!(rows[1].od450, OdValue::Text("0.31".to_string()));
    assert_eq!(rows[2].od450, OdValue::Missing);
}

#[test]
fn test_groups_keep_discovery_order() {
    let mut groups = TreatmentGroups::new();
    groups.push("Drug", 0.3);
    groups.push("Blank", 0.1);
    groups.push("Drug", 0.31);
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Drug", "Blank"]);
    assert_eq!(groups.get("Drug").unwrap().values, vec![0.3, 0.31]);
    assert!(groups.contains_non_empty("Blank"));
    assert!(!groups.contains_non_empty("Control"));
    assert_eq!(groups.len(), 2);
}

#[test]
fn test_result_display_rounding() {
    let result = TreatmentResult {
        treatment: "Drug".to_string(),
        is_control: false,
        od_values: vec![0.3, 0.31],
        blank_adjusted: vec![0.195, 0.205],
        mean_od: 0.2,
        viability: 49.382716049382715,
        replicates: 2,
        raw_replicates: 2,
        outliers_removed: false,
        sd: 0.005,
    };
    let row = result.display();
    assert_eq!(row.od_values, vec!["0.300", "0.310"]);
    assert_eq!(row.mean_od, "0.200");
    assert_eq!(row.viability, "49.4%");
    assert_eq!(row.sd, "0.005");
    assert_eq!(row.replicates, 2);
}

#[test]
fn test_reading_od_of_wrong_type_or_absent_is_dropped_not_fatal() {
    let json = r#"[
        {"Treatment": "Drug", "OD450": true},
        {"Treatment": "Drug", "OD450": [0.1]},
        {"Treatment": "Drug", "OD450": {"v": 0.1}},
        {"Treatment": "Drug"}
    ]"#;
    let rows: Vec<Reading> = serde_json::from_str(json).unwrap();
    assert_eq!(rows.len(), 4);
    assert!(matches!(rows[0].od450, OdValue::Other(_)));
    assert!(matches!(rows[1].od450, OdValue::Other(_)));
    assert!(matches!(rows[2].od450, OdValue::Other(_)));
    assert_eq!(rows[3].od450, OdValue::Missing);
    assert!(rows.iter().all(|r| r.od450.parse().is_none()));
}
