//! `stockcast-forecast` — the statistical forecasting pipeline.
//!
//! **Responsibility:** turn raw sale records into per-day demand forecasts.
//!
//! Everything in this crate is deterministic domain logic (no IO, no clock
//! reads): the ambient "today" is always passed in by the caller, so the
//! same inputs always produce the same forecast.

pub mod generate;
pub mod seasonality;
pub mod series;
pub mod stats;
pub mod trend;
pub mod zscore;

pub use generate::{
    ForecastDay, fallback_forecast, generate_forecast, historical_demand_stddev,
};
pub use seasonality::{DEFAULT_MIN_PERIODS, SeasonalFactors, estimate_seasonal_factors};
pub use series::{DailySeriesPoint, SaleRecord, build_daily_series, validate_record};
pub use trend::{TrendDirection, TrendResult, estimate_trend};
pub use zscore::z_score;
