//! Forecasting request contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockcast_forecast::SaleRecord;

/// Default confidence level for prediction intervals.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Supported forecast horizons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ForecastPeriod {
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "14d")]
    FourteenDays,
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
}

impl ForecastPeriod {
    /// Horizon length in days.
    pub fn days(self) -> usize {
        match self {
            ForecastPeriod::SevenDays => 7,
            ForecastPeriod::FourteenDays => 14,
            ForecastPeriod::ThirtyDays => 30,
            ForecastPeriod::NinetyDays => 90,
        }
    }
}

/// One forecasting request.
///
/// `as_of` is the injected "today": forecast dates are generated relative
/// to it rather than the wall clock, which keeps the engine a pure function
/// of its inputs (and tests deterministic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub sales_data: Vec<SaleRecord>,
    pub period: ForecastPeriod,
    pub confidence_level: f64,
    /// Echo each product's aggregated daily history in the response.
    pub include_history: bool,
    pub as_of: NaiveDate,
}

impl ForecastRequest {
    pub fn new(sales_data: Vec<SaleRecord>, as_of: NaiveDate) -> Self {
        Self {
            sales_data,
            period: ForecastPeriod::default(),
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            include_history: false,
            as_of,
        }
    }

    pub fn with_period(mut self, period: ForecastPeriod) -> Self {
        self.period = period;
        self
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    pub fn with_history(mut self, include_history: bool) -> Self {
        self.include_history = include_history;
        self
    }
}
