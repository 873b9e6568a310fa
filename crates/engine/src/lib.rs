//! `stockcast-engine` — the forecasting engine boundary.
//!
//! **Responsibility:** orchestrate the per-product pipeline (series
//! building, data-sufficiency branch, forecast generation, inventory
//! recommendation) over a request batch, and expose the external
//! request/response contracts.
//!
//! The engine holds no state: configuration and the "as of" date are
//! threaded through pure functions, so callers can fan products out across
//! threads with no synchronization.

pub mod accuracy;
pub mod config;
pub mod request;
pub mod response;
pub mod run;

pub use accuracy::{AccuracyMetrics, ActualSale, evaluate_accuracy};
pub use config::{DEFAULT_MIN_DATA_POINTS, EngineConfig};
pub use request::{DEFAULT_CONFIDENCE_LEVEL, ForecastPeriod, ForecastRequest};
pub use response::{
    ForecastMetadata, ForecastResponse, ForecastSummary, ProductFailure, ProductForecast,
};
pub use run::{run_forecast, run_forecast_with_actuals};

// The full external contract surface, re-exported so callers depend on one
// crate.
pub use stockcast_core::{EngineError, EngineResult, ProductId};
pub use stockcast_forecast::{
    DailySeriesPoint, ForecastDay, SaleRecord, SeasonalFactors, TrendDirection, TrendResult,
};
pub use stockcast_inventory::{InventoryRecommendation, SafetyStockConfig, StockStatus};
