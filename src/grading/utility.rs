/// Computes `Σ(value·weight) / Σ(weight)`. Returns 0.0 for empty input or
/// when the weights sum to zero.
pub fn weighted_mean(pairs: &[(f64, f64)]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }

    let weight_sum: f64 = pairs.iter().map(|(_, w)| w).sum();
    if weight_sum == 0.0 {
        return 0.0;
    }

    let weighted_total: f64 = pairs.iter().map(|(v, w)| v * w).sum();
    weighted_total / weight_sum
}

/// Rounds to `places` decimals, halves away from zero. A result of `-0.0`
/// comes back as `0.0`.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor + 0.0
}
