//! Forecasting response contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::{EngineError, ProductId};
use stockcast_forecast::{DailySeriesPoint, ForecastDay, SeasonalFactors, TrendResult};
use stockcast_inventory::InventoryRecommendation;

use crate::accuracy::AccuracyMetrics;
use crate::request::ForecastPeriod;

/// Aggregated forecast summary for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub total_predicted_demand: i64,
    pub average_daily_demand: f64,
    pub trend: TrendResult,
    pub seasonal_factors: SeasonalFactors,
    pub recommendation: InventoryRecommendation,
}

/// Complete forecast for one product.
///
/// Fully recomputed on every request — nothing is cached across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForecast {
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: String,
    pub current_stock: i64,
    pub days: Vec<ForecastDay>,
    pub summary: ForecastSummary,
    /// The aggregated daily history, echoed back when the request asked
    /// for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<DailySeriesPoint>>,
}

/// A product whose forecast could not be computed.
///
/// Failures are isolated per product: the rest of the batch still comes
/// back as forecasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFailure {
    pub product_id: ProductId,
    pub error: EngineError,
}

/// Batch-level response metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMetadata {
    /// Midnight UTC of the request's as-of date. Derived from the request
    /// rather than the wall clock so identical requests produce identical
    /// responses.
    pub generated_at: DateTime<Utc>,
    pub period: ForecastPeriod,
    /// Present only when the caller supplied realized sales to score
    /// against; never fabricated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<AccuracyMetrics>,
}

/// Batch response: per-product forecasts plus isolated failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub forecasts: Vec<ProductForecast>,
    pub failures: Vec<ProductFailure>,
    pub metadata: ForecastMetadata,
}
