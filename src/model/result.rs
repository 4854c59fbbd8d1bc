use serde::Serialize;

use crate::report::{format_fixed3, format_percent};

/// Viability of one non-blank treatment. Values are kept at full precision;
/// rounding happens only when a row is rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreatmentResult {
    pub treatment: String,
    pub is_control: bool,
    /// Retained OD values (sorted if trimming happened).
    pub od_values: Vec<f64>,
    pub blank_adjusted: Vec<f64>,
    pub mean_od: f64,
    pub viability: f64,
    /// Count after outlier trimming.
    pub replicates: usize,
    pub raw_replicates: usize,
    pub outliers_removed: bool,
    /// Standard deviation of the untrimmed group.
    pub sd: f64,
}

/// Display form of a result, as handed to table and chart renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub treatment: String,
    pub od_values: Vec<String>,
    pub blank_adjusted: Vec<String>,
    pub mean_od: String,
    pub viability: String,
    pub replicates: usize,
    pub sd: String,
}

impl TreatmentResult {
    pub fn display(&self) -> ResultRow {
        ResultRow {
            treatment: self.treatment.clone(),
            od_values: self.od_values.iter().map(|&v| format_fixed3(v)).collect(),
            blank_adjusted: self
                .blank_adjusted
                .iter()
                .map(|&v| format_fixed3(v))
                .collect(),
            mean_od: format_fixed3(self.mean_od),
            viability: format_percent(self.viability),
            replicates: self.replicates,
            sd: format_fixed3(self.sd),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViabilityReport {
    pub blank_mean: f64,
    pub control_mean: f64,
    pub n_readings: usize,
    pub n_dropped: usize,
    pub results: Vec<TreatmentResult>,
}

impl ViabilityReport {
    pub fn rows(&self) -> Vec<ResultRow> {
        self.results.iter().map(TreatmentResult::display).collect()
    }
}
