use super::StatsError;

// ---------------------------------------------------------------------------
// Descriptive measures over a sequence of numbers
// ---------------------------------------------------------------------------

/// Round to 3 fractional digits, half away from zero.
fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Arithmetic mean, rounded to 3 fractional digits.
///
/// An empty sequence yields `0.0` rather than dividing by zero; callers that
/// filter non-numeric cells upstream can therefore pass whatever survives the
/// filter without a separate emptiness check.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().sum();
    round3(sum / values.len() as f64)
}

/// Statistical median, rounded to 3 fractional digits.
///
/// The input is copied and sorted; the caller's slice is never mutated.
/// An empty sequence is an error ([`StatsError::EmptyInput`]) — there is no
/// meaningful sentinel for "median of nothing".
pub fn median(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    Ok(round3(median))
}

/// Most frequent value, first-seen-wins on ties; `None` for an empty input.
///
/// Frequencies are counted per distinct bit pattern (`f64::to_bits`), and the
/// tracked mode only changes when a count strictly exceeds the running
/// maximum, so the value that first reaches the winning frequency is kept.
/// The result is returned as-is, not rounded.
pub fn mode(values: &[f64]) -> Option<f64> {
    use std::collections::HashMap;

    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut max_count = 0usize;
    let mut mode = None;

    for &v in values {
        let count = counts.entry(v.to_bits()).or_insert(0);
        *count += 1;
        if *count > max_count {
            max_count = *count;
            mode = Some(v);
        }
    }
    mode
}
