use rust_decimal::{Decimal, RoundingStrategy};

pub mod json;
pub mod text;

/// Fixed decimals with ties rounded away from zero on the exact binary
/// value, so `0.5625` gives `0.563`. Negative zero prints unsigned.
pub fn format_fixed(v: f64, decimals: u32) -> String {
    let v = v + 0.0;
    if !v.is_finite() {
        return format!("{}", v);
    }
    match Decimal::from_f64_retain(v) {
        Some(d) => {
            let rounded =
                d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", decimals as usize, rounded)
        }
        None => format!("{:.*}", decimals as usize, v),
    }
}

/// Three decimals, as shown for OD, blank-adjusted OD and sd.
pub fn format_fixed3(v: f64) -> String {
    format_fixed(v, 3)
}

/// One decimal with a percent sign. Non-finite values print as `NaN%`/`inf%`.
pub fn format_percent(v: f64) -> String {
    format!("{}%", format_fixed(v, 1))
}

pub fn join_values(values: &[String]) -> String {
    values.join(", ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
