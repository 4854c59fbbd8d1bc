use crate::model::groups::TreatmentGroups;
use crate::model::params::ViabilityParams;
use crate::model::result::TreatmentResult;
use crate::pipeline::ViabilityError;
use crate::pipeline::stage2_outliers::filter_outliers;
use crate::stats::mean;

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub blank_mean: f64,
    pub control_mean: f64,
    pub results: Vec<TreatmentResult>,
}

pub fn run_stage3(
    groups: &TreatmentGroups,
    params: &ViabilityParams,
) -> Result<Stage3Output, ViabilityError> {
    let blank = required_group(groups, &params.blank_label)?;
    let control = required_group(groups, &params.control_label)?;

    // Both references use the raw groups, before any trimming.
    let blank_mean = mean(blank);
    let control_mean = mean(control);
    let denom = control_mean - blank_mean;
    if denom == 0.0 {
        tracing::warn!(
            blank_mean,
            control_mean,
            "control and blank means are equal; viability is not finite"
        );
    }

    let mut results = Vec::with_capacity(groups.len().saturating_sub(1));
    for group in groups.iter() {
        if group.name == params.blank_label {
            continue;
        }
        let is_control = group.name == params.control_label;
        let outcome = filter_outliers(&group.values, params);
        if outcome.trimmed {
            tracing::debug!(
                treatment = %group.name,
                sd = outcome.original_sd,
                mean = outcome.original_mean,
                "trimmed min and max replicate"
            );
        }

        let blank_adjusted: Vec<f64> = outcome
            .retained
            .iter()
            .map(|v| v - blank_mean)
            .collect();
        let mean_od = mean(&blank_adjusted);
        let viability = if is_control {
            100.0
        } else {
            mean_od / denom * 100.0
        };
        if !viability.is_finite() {
            tracing::warn!(treatment = %group.name, viability, "non-finite viability");
        }

        results.push(TreatmentResult {
            treatment: group.name.clone(),
            is_control,
            replicates: outcome.retained.len(),
            raw_replicates: group.values.len(),
            outliers_removed: outcome.trimmed,
            od_values: outcome.retained,
            blank_adjusted,
            mean_od,
            viability,
            sd: outcome.original_sd,
        });
    }

    Ok(Stage3Output {
        blank_mean,
        control_mean,
        results,
    })
}

fn required_group<'a>(
    groups: &'a TreatmentGroups,
    name: &str,
) -> Result<&'a [f64], ViabilityError> {
    match groups.get(name) {
        Some(group) if !group.values.is_empty() => Ok(&group.values),
        _ => Err(ViabilityError::MissingRequiredGroup {
            group: name.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_normalize.rs"]
mod tests;
