use crate::model::params::{MIN_TRIM_SIZE, ViabilityParams};
use crate::stats::{mean, population_sd};

#[derive(Debug, Clone, PartialEq)]
pub struct OutlierOutcome {
    pub retained: Vec<f64>,
    pub original_mean: f64,
    pub original_sd: f64,
    pub trimmed: bool,
}

/// Drops one minimum and one maximum when the group spread exceeds
/// `outlier_ratio` of its mean. Mean and sd always describe the input list.
pub fn filter_outliers(values: &[f64], params: &ViabilityParams) -> OutlierOutcome {
    let original_mean = mean(values);
    let original_sd = population_sd(values);

    // A zero mean gives a zero threshold; any spread then trims.
    let trimmed = original_sd > original_mean * params.outlier_ratio
        && values.len() >= MIN_TRIM_SIZE;

    let retained = if trimmed {
        trim_extremes(values)
    } else {
        values.to_vec()
    };

    OutlierOutcome {
        retained,
        original_mean,
        original_sd,
        trimmed,
    }
}

/// Sort ascending and drop the first and last element, ties included.
pub fn trim_extremes(values: &[f64]) -> Vec<f64> {
    if values.len() <= 2 {
        return values.to_vec();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted[1..sorted.len() - 1].to_vec()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_outliers.rs"]
mod tests;
