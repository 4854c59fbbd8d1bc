use crate::model::groups::TreatmentGroups;
use crate::model::params::ViabilityParams;
use crate::model::reading::Reading;
use crate::pipeline::ViabilityError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupingStats {
    pub accepted: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub groups: TreatmentGroups,
    pub stats: GroupingStats,
}

pub fn run_stage1(
    readings: &[Reading],
    params: &ViabilityParams,
) -> Result<Stage1Output, ViabilityError> {
    let (groups, stats) = group_readings(readings);
    for required in [&params.blank_label, &params.control_label] {
        if !groups.contains_non_empty(required) {
            return Err(ViabilityError::MissingRequiredGroup {
                group: required.clone(),
            });
        }
    }
    Ok(Stage1Output { groups, stats })
}

/// Rows with a blank treatment or an OD that is not a finite number are
/// dropped before they can open a group.
pub fn group_readings(readings: &[Reading]) -> (TreatmentGroups, GroupingStats) {
    let mut groups = TreatmentGroups::new();
    let mut stats = GroupingStats::default();
    for (row, reading) in readings.iter().enumerate() {
        let treatment = reading.treatment.trim();
        let od = reading.od450.parse();
        match od {
            Some(value) if !treatment.is_empty() => {
                groups.push(treatment, value);
                stats.accepted += 1;
            }
            _ => {
                tracing::debug!(
                    row,
                    treatment,
                    od450 = ?reading.od450,
                    "dropping malformed reading"
                );
                stats.dropped += 1;
            }
        }
    }
    (groups, stats)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_group.rs"]
mod tests;
