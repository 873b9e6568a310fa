//! Day-of-week seasonality extraction.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::series::DailySeriesPoint;
use crate::stats::mean;

/// Default number of full weeks of history required before seasonal
/// factors are trusted.
pub const DEFAULT_MIN_PERIODS: usize = 2;

/// Multiplicative demand factor per day of week.
///
/// Unit factors (all 1.0) mean "no seasonal adjustment" and are returned
/// whenever seasonality is disabled or history is too short.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalFactors {
    pub sunday: f64,
    pub monday: f64,
    pub tuesday: f64,
    pub wednesday: f64,
    pub thursday: f64,
    pub friday: f64,
    pub saturday: f64,
}

impl SeasonalFactors {
    /// All-1.0 factors: every weekday forecasts at the baseline.
    pub fn unit() -> Self {
        Self::from_sunday_indexed([1.0; 7])
    }

    /// Factor for a weekday.
    pub fn factor(&self, weekday: Weekday) -> f64 {
        match weekday {
            Weekday::Sun => self.sunday,
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
        }
    }

    // Factors in Sunday..Saturday order, matching `num_days_from_sunday`.
    fn from_sunday_indexed(factors: [f64; 7]) -> Self {
        Self {
            sunday: factors[0],
            monday: factors[1],
            tuesday: factors[2],
            wednesday: factors[3],
            thursday: factors[4],
            friday: factors[5],
            saturday: factors[6],
        }
    }
}

impl Default for SeasonalFactors {
    fn default() -> Self {
        Self::unit()
    }
}

/// Extract per-weekday factors from historical averages.
///
/// Requires at least `7 * min_periods` observed days; below that (or when
/// disabled, or when the overall average is zero) every factor is 1.0.
/// Weekdays with no observations average 0, so their factor is 0.0 rather
/// than defaulting to the baseline. Factors are rounded to one decimal.
///
/// `min_periods` is deliberately a separate knob from the engine-level
/// minimum-data gate; neither subsumes the other.
pub fn estimate_seasonal_factors(
    series: &[DailySeriesPoint],
    enabled: bool,
    min_periods: usize,
) -> SeasonalFactors {
    if !enabled || series.len() < 7 * min_periods {
        return SeasonalFactors::unit();
    }

    let mut sums = [0.0f64; 7];
    let mut counts = [0usize; 7];
    for point in series {
        let idx = point.date.weekday().num_days_from_sunday() as usize;
        sums[idx] += point.quantity as f64;
        counts[idx] += 1;
    }

    let quantities: Vec<f64> = series.iter().map(|p| p.quantity as f64).collect();
    let overall_average = mean(&quantities);
    if overall_average == 0.0 {
        return SeasonalFactors::unit();
    }

    let mut factors = [0.0f64; 7];
    for idx in 0..7 {
        let day_average = if counts[idx] == 0 {
            0.0
        } else {
            sums[idx] / counts[idx] as f64
        };
        factors[idx] = round1(day_average / overall_average);
    }

    SeasonalFactors::from_sunday_indexed(factors)
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
