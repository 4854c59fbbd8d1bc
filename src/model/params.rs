pub const BLANK_LABEL: &str = "Blank";
pub const CONTROL_LABEL: &str = "Control";
/// Groups with fewer replicates are never trimmed.
pub const MIN_TRIM_SIZE: usize = 3;

#[derive(Debug, Clone)]
pub struct ViabilityParams {
    pub blank_label: String,
    pub control_label: String,
    /// Trim when `sd > mean * outlier_ratio`.
    pub outlier_ratio: f64,
}

impl ViabilityParams {
    pub fn default_v1() -> Self {
        Self {
            blank_label: BLANK_LABEL.to_string(),
            control_label: CONTROL_LABEL.to_string(),
            outlier_ratio: 0.2,
        }
    }
}

impl Default for ViabilityParams {
    fn default() -> Self {
        Self::default_v1()
    }
}
