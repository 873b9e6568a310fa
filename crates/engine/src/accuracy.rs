//! Forecast accuracy evaluation against realized sales.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockcast_core::ProductId;

use crate::response::ProductForecast;

/// One realized sales observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualSale {
    pub product_id: ProductId,
    pub date: NaiveDate,
    pub quantity: i64,
}

/// Forecast-quality metrics over matched product-days.
///
/// Only ever produced from real actuals; when nothing can be scored the
/// batch reports absence instead of a fabricated number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Mean absolute percentage error over matched days with a nonzero
    /// actual; `None` when every matched actual was zero.
    pub mape: Option<f64>,
    /// Root mean square error over all matched days.
    pub rmse: f64,
    /// Number of forecast product-days with a matching actual.
    pub matched_days: usize,
}

/// Score a forecast batch against realized sales.
///
/// Returns `None` when no forecasted product-day has a matching actual.
pub fn evaluate_accuracy(
    forecasts: &[ProductForecast],
    actuals: &[ActualSale],
) -> Option<AccuracyMetrics> {
    let realized: HashMap<(ProductId, NaiveDate), i64> = actuals
        .iter()
        .map(|a| ((a.product_id, a.date), a.quantity))
        .collect();

    let mut matched_days = 0usize;
    let mut square_error_sum = 0.0f64;
    let mut pct_error_sum = 0.0f64;
    let mut pct_days = 0usize;

    for forecast in forecasts {
        for day in &forecast.days {
            let Some(&actual) = realized.get(&(forecast.product_id, day.date)) else {
                continue;
            };

            let error = day.predicted_demand as f64 - actual as f64;
            matched_days += 1;
            square_error_sum += error * error;

            // Percentage error is undefined against a zero actual.
            if actual != 0 {
                pct_error_sum += (error / actual as f64).abs();
                pct_days += 1;
            }
        }
    }

    if matched_days == 0 {
        return None;
    }

    Some(AccuracyMetrics {
        mape: (pct_days > 0).then(|| 100.0 * pct_error_sum / pct_days as f64),
        rmse: (square_error_sum / matched_days as f64).sqrt(),
        matched_days,
    })
}
