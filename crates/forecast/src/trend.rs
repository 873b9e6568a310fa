//! Linear trend estimation over a daily series.

use serde::{Deserialize, Serialize};

use crate::series::DailySeriesPoint;

/// Slope magnitude below which demand is classified as stable.
const STABLE_SLOPE_THRESHOLD: f64 = 0.05;

/// Direction of the fitted demand trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Result of fitting a linear trend to a demand series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Units of demand gained (or lost) per day of series index.
    pub slope: f64,
    pub direction: TrendDirection,
}

impl TrendResult {
    /// Flat trend, used when history is too short to fit a line.
    pub fn stable() -> Self {
        Self {
            slope: 0.0,
            direction: TrendDirection::Stable,
        }
    }
}

/// Ordinary least squares fit of quantity against series index `0..n-1`.
///
/// Series shorter than two points cannot carry a trend and come back as
/// [`TrendResult::stable`].
pub fn estimate_trend(series: &[DailySeriesPoint]) -> TrendResult {
    let n = series.len();
    if n < 2 {
        return TrendResult::stable();
    }

    let nf = n as f64;
    let mut sum_i = 0.0;
    let mut sum_q = 0.0;
    let mut sum_iq = 0.0;
    let mut sum_ii = 0.0;
    for (i, point) in series.iter().enumerate() {
        let x = i as f64;
        let q = point.quantity as f64;
        sum_i += x;
        sum_q += q;
        sum_iq += x * q;
        sum_ii += x * x;
    }

    // Denominator is n * sum of squared deviations of the index, never zero
    // for n >= 2 distinct indices.
    let slope = (nf * sum_iq - sum_i * sum_q) / (nf * sum_ii - sum_i * sum_i);

    let direction = if slope.abs() < STABLE_SLOPE_THRESHOLD {
        TrendDirection::Stable
    } else if slope > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    };

    TrendResult { slope, direction }
}
