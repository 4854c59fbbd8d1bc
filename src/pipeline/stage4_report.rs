use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::params::ViabilityParams;
use crate::model::result::ViabilityReport;
use crate::report::join_values;
use crate::report::json::{build_summary, render_summary_json};
use crate::report::text::render_report_text;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TSV error: {0}")]
    Tsv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub report: &'a ViabilityReport,
    pub params: &'a ViabilityParams,
    pub input_path: String,
    pub layout: String,
}

pub fn write_reports(input: &Stage4Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    write_results_tsv(input.report, &out_dir.join("viability.tsv"))?;

    let summary = build_summary(
        input.report,
        input.params,
        &input.input_path,
        &input.layout,
    );
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let text = render_report_text(input.report, &input.input_path);
    write_text(&out_dir.join("report.txt"), &text)?;

    tracing::info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_results_tsv(report: &ViabilityReport, path: &Path) -> Result<(), ReportError> {
    let mut w = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)?;
    w.write_record([
        "treatment",
        "od_values",
        "blank_adjusted",
        "mean_od",
        "viability",
        "replicates",
        "sd",
        "outliers_removed",
    ])?;
    for (row, result) in report.rows().iter().zip(report.results.iter()) {
        let record = [
            row.treatment.clone(),
            join_values(&row.od_values),
            join_values(&row.blank_adjusted),
            row.mean_od.clone(),
            row.viability.clone(),
            row.replicates.to_string(),
            row.sd.clone(),
            result.outliers_removed.to_string(),
        ];
        w.write_record(&record)?;
    }
    w.flush()?;
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
