//! Deterministic statistics helpers.

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

/// Sample standard deviation (n-1 denominator), deterministic.
///
/// Defined as 1.0 below two points *and* at zero variance, so prediction
/// intervals built on top of it never collapse to zero width.
pub fn stddev_sample(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return 1.0;
    }

    let m = mean(xs);
    let var = xs
        .iter()
        .map(|x| {
            let d = x - m;
            d * d
        })
        .sum::<f64>()
        / ((xs.len() - 1) as f64);

    let std = var.sqrt();
    if std == 0.0 { 1.0 } else { std }
}
