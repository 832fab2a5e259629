// schedent-entropy/src/entropy/mod.rs
use libm::log2;

/// Returns `w * log2(w)`, treating a zero weight as contributing nothing.
///
/// `log2(0)` is `-inf`, so the product would be NaN without the guard.
pub fn weighted_log_term(weight: f64) -> f64 {
    if weight != 0.0 {
        weight * log2(weight)
    } else {
        0.0
    }
}

/// Calculates the Shannon entropy of a set of grouped weights from scratch.
///
/// Each weight is the cumulative duration observed for one label. Returns the
/// entropy in bits, `log2(N) - Σ w·log2(w) / N` with `N = Σ w`.
pub fn grouped_shannon_entropy<I>(weights: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut total = 0.0;
    let mut weighted_sum = 0.0;

    for weight in weights {
        total += weight;
        weighted_sum += weighted_log_term(weight);
    }

    if total == 0.0 {
        return 0.0;
    }

    log2(total) - weighted_sum / total
}
