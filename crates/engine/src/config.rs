//! Engine configuration.

use serde::{Deserialize, Serialize};

use stockcast_core::{EngineError, EngineResult};
use stockcast_forecast::DEFAULT_MIN_PERIODS;
use stockcast_inventory::SafetyStockConfig;

/// Minimum observed days of history before the full forecasting model is
/// trusted; shorter histories use the fallback forecaster.
pub const DEFAULT_MIN_DATA_POINTS: usize = 14;

/// Engine-wide configuration, passed by value into every run.
///
/// The seasonality gate (`seasonality_min_periods`, in weeks) and the
/// data-sufficiency gate (`min_data_points`, in days) are separate knobs:
/// with the defaults the 14-day sufficiency gate happens to satisfy the
/// two-week seasonality gate, but neither subsumes the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub min_data_points: usize,
    pub seasonality_enabled: bool,
    pub seasonality_min_periods: usize,
    pub safety_stock: SafetyStockConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_data_points: DEFAULT_MIN_DATA_POINTS,
            seasonality_enabled: true,
            seasonality_min_periods: DEFAULT_MIN_PERIODS,
            safety_stock: SafetyStockConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_min_data_points(mut self, min_data_points: usize) -> Self {
        self.min_data_points = min_data_points;
        self
    }

    pub fn with_seasonality_enabled(mut self, enabled: bool) -> Self {
        self.seasonality_enabled = enabled;
        self
    }

    pub fn with_seasonality_min_periods(mut self, min_periods: usize) -> Self {
        self.seasonality_min_periods = min_periods;
        self
    }

    pub fn with_safety_stock(mut self, safety_stock: SafetyStockConfig) -> Self {
        self.safety_stock = safety_stock;
        self
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> EngineResult<()> {
        if self.min_data_points == 0 {
            return Err(EngineError::invalid_config(
                "min_data_points must be at least 1",
            ));
        }

        if self.seasonality_min_periods == 0 {
            return Err(EngineError::invalid_config(
                "seasonality_min_periods must be at least 1",
            ));
        }

        let service_level = self.safety_stock.service_level;
        if !(service_level.is_finite() && service_level > 0.0 && service_level < 1.0) {
            return Err(EngineError::invalid_config(
                "service_level must be between 0 and 1 (exclusive)",
            ));
        }

        if self.safety_stock.lead_time_days == 0 {
            return Err(EngineError::invalid_config(
                "lead_time_days must be at least 1",
            ));
        }

        Ok(())
    }
}
