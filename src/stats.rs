/// Arithmetic mean. An empty slice yields `NaN`, matching a plain sum / count.
pub fn mean(values: &[f64]) -> f64 {
    let mut sum = 0f64;
    for &v in values {
        sum += v;
    }
    sum / values.len() as f64
}

/// Population standard deviation (divides by N, not N - 1).
pub fn population_sd(values: &[f64]) -> f64 {
    let avg = mean(values);
    let mut acc = 0f64;
    for &v in values {
        let d = v - avg;
        acc += d * d;
    }
    (acc / values.len() as f64).sqrt()
}

#[cfg(test)]
#[path = "../tests/src_inline/stats.rs"]
mod tests;
