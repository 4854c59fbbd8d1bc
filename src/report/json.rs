use serde::Serialize;

use crate::model::params::ViabilityParams;
use crate::model::result::{TreatmentResult, ViabilityReport};

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub path: String,
    pub layout: String,
    pub n_readings: usize,
    pub n_dropped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Normalization {
    pub blank_label: String,
    pub control_label: String,
    pub blank_mean: f64,
    pub control_mean: f64,
    pub outlier_ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData<'a> {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub normalization: Normalization,
    pub results: &'a [TreatmentResult],
}

pub fn build_summary<'a>(
    report: &'a ViabilityReport,
    params: &ViabilityParams,
    input_path: &str,
    layout: &str,
) -> SummaryData<'a> {
    SummaryData {
        tool: ToolMeta {
            name: "kira-viabilityqc".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputMeta {
            path: input_path.to_string(),
            layout: layout.to_string(),
            n_readings: report.n_readings,
            n_dropped: report.n_dropped,
        },
        normalization: Normalization {
            blank_label: params.blank_label.clone(),
            control_label: params.control_label.clone(),
            blank_mean: report.blank_mean,
            control_mean: report.control_mean,
            outlier_ratio: params.outlier_ratio,
        },
        results: &report.results,
    }
}

/// Non-finite floats (a zero blank/control gap) serialize as `null`.
pub fn render_summary_json(data: &SummaryData<'_>) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
