//! Forecast generation: baseline x trend x seasonality with prediction
//! intervals, plus the short-history fallback.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::seasonality::SeasonalFactors;
use crate::series::DailySeriesPoint;
use crate::stats::{mean, stddev_sample};
use crate::trend::TrendResult;
use crate::zscore::z_score;

/// Number of trailing days feeding the moving-average baseline.
const BASELINE_WINDOW_DAYS: usize = 14;

/// Relative interval width used by the fallback forecaster.
const FALLBACK_MARGIN_RATIO: f64 = 0.2;

/// A single forecast day with its prediction interval.
///
/// Invariant: `0 <= lower_bound <= predicted_demand <= upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub predicted_demand: i64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub confidence_level: f64,
}

/// Sample standard deviation of the historical daily quantities.
///
/// This drives prediction-interval width. It is deliberately a different
/// computation from the forecast-side standard deviation that sizes safety
/// stock; the two must not be conflated.
pub fn historical_demand_stddev(series: &[DailySeriesPoint]) -> f64 {
    let quantities: Vec<f64> = series.iter().map(|p| p.quantity as f64).collect();
    stddev_sample(&quantities)
}

/// Project the recent-average baseline forward, applying trend and
/// seasonality, one [`ForecastDay`] per day of the horizon starting at
/// `as_of`.
///
/// Callers gate on data sufficiency before reaching this function; short
/// histories go through [`fallback_forecast`] instead.
pub fn generate_forecast(
    series: &[DailySeriesPoint],
    horizon: usize,
    confidence_level: f64,
    trend: TrendResult,
    factors: &SeasonalFactors,
    as_of: NaiveDate,
) -> Vec<ForecastDay> {
    let window = series.len().min(BASELINE_WINDOW_DAYS);
    let recent: Vec<f64> = series[series.len() - window..]
        .iter()
        .map(|p| p.quantity as f64)
        .collect();
    let base_value = mean(&recent);

    let margin = (historical_demand_stddev(series) * z_score(confidence_level)).ceil();

    (0..horizon)
        .map(|i| {
            let date = as_of + Duration::days(i as i64);
            let trend_factor = 1.0 + trend.slope * i as f64;
            let seasonal_factor = factors.factor(date.weekday());
            let predicted = (base_value * trend_factor * seasonal_factor)
                .round()
                .max(0.0) as i64;

            ForecastDay {
                date,
                predicted_demand: predicted,
                lower_bound: (predicted as f64 - margin).max(0.0),
                upper_bound: predicted as f64 + margin,
                confidence_level,
            }
        })
        .collect()
}

/// Flat, seasonality-free forecast for products with too little history.
///
/// Every day predicts the plain average of whatever daily quantities exist
/// (0 with no history at all), with a fixed +/-20%-of-average interval.
pub fn fallback_forecast(
    series: &[DailySeriesPoint],
    horizon: usize,
    confidence_level: f64,
    as_of: NaiveDate,
) -> Vec<ForecastDay> {
    let quantities: Vec<f64> = series.iter().map(|p| p.quantity as f64).collect();
    let avg_quantity = mean(&quantities);
    let predicted = avg_quantity.round().max(0.0) as i64;
    let margin = FALLBACK_MARGIN_RATIO * avg_quantity;

    (0..horizon)
        .map(|i| ForecastDay {
            date: as_of + Duration::days(i as i64),
            predicted_demand: predicted,
            lower_bound: (predicted as f64 - margin).max(0.0),
            upper_bound: predicted as f64 + margin,
            confidence_level,
        })
        .collect()
}
