pub mod stage1_group;
pub mod stage2_outliers;
pub mod stage3_normalize;
pub mod stage4_report;

use crate::model::params::ViabilityParams;
use crate::model::reading::Reading;
use crate::model::result::ViabilityReport;
use stage1_group::run_stage1;
use stage3_normalize::run_stage3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViabilityError {
    #[error("missing required group: {group}")]
    MissingRequiredGroup { group: String },
}

/// Group, trim and normalize. Pure: no I/O and no shared state.
pub fn run_viability(
    readings: &[Reading],
    params: &ViabilityParams,
) -> Result<ViabilityReport, ViabilityError> {
    let stage1 = run_stage1(readings, params)?;
    let stage3 = run_stage3(&stage1.groups, params)?;
    Ok(ViabilityReport {
        blank_mean: stage3.blank_mean,
        control_mean: stage3.control_mean,
        n_readings: stage1.stats.accepted,
        n_dropped: stage1.stats.dropped,
        results: stage3.results,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
