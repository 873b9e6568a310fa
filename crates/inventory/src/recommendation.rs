//! Inventory recommendations derived from a demand forecast.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use stockcast_forecast::ForecastDay;
use stockcast_forecast::stats::{mean, stddev_sample};
use stockcast_forecast::z_score;

/// Fixed EOQ economics: 30-day order cycle, 50 per order fixed cost,
/// holding rate 0.2 of unit value.
const ORDER_CYCLE_DAYS: f64 = 30.0;
const ORDER_COST: f64 = 50.0;
const HOLDING_COST_RATE: f64 = 0.2;

/// Days of average demand a replenishment order should cover.
const RESTOCK_COVER_DAYS: f64 = 14.0;

/// Days-of-cover thresholds for status classification.
const CRITICAL_DAYS: usize = 7;
const LOW_DAYS: usize = 14;

/// Coarse classification of the current stock position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critical,
    Low,
    Adequate,
}

/// Safety-stock configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyStockConfig {
    /// Target probability of not stocking out during lead time.
    pub service_level: f64,
    /// Days between placing and receiving a replenishment order.
    pub lead_time_days: u32,
}

impl Default for SafetyStockConfig {
    fn default() -> Self {
        Self {
            service_level: 0.95,
            lead_time_days: 3,
        }
    }
}

impl SafetyStockConfig {
    pub fn with_service_level(mut self, service_level: f64) -> Self {
        self.service_level = service_level;
        self
    }

    pub fn with_lead_time_days(mut self, lead_time_days: u32) -> Self {
        self.lead_time_days = lead_time_days;
        self
    }
}

/// Advisory replenishment output for one product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecommendation {
    pub stock_status: StockStatus,
    /// Forecast-day offset at which cumulative demand first exceeds current
    /// stock; capped at the horizon length when stock outlasts the horizon.
    pub days_until_stockout: usize,
    pub should_reorder: bool,
    pub recommended_quantity: i64,
    pub optimal_order_date: NaiveDate,
}

/// Sample standard deviation of the forecast demand series.
///
/// This sizes the safety-stock buffer. It is deliberately a different
/// computation from the historical stddev that drives prediction-interval
/// width; the two must not be conflated.
pub fn forecast_demand_stddev(days: &[ForecastDay]) -> f64 {
    let demands: Vec<f64> = days.iter().map(|d| d.predicted_demand as f64).collect();
    stddev_sample(&demands)
}

/// Derive the replenishment recommendation for one product.
pub fn recommend(
    days: &[ForecastDay],
    current_stock: i64,
    config: &SafetyStockConfig,
    as_of: NaiveDate,
) -> InventoryRecommendation {
    let stockout = days_until_stockout(days, current_stock);

    let stock_status = if stockout < CRITICAL_DAYS {
        StockStatus::Critical
    } else if stockout < LOW_DAYS {
        StockStatus::Low
    } else {
        StockStatus::Adequate
    };

    let demands: Vec<f64> = days.iter().map(|d| d.predicted_demand as f64).collect();
    let avg_daily_demand = mean(&demands);
    let lead_time = config.lead_time_days as f64;

    let safety_stock =
        (z_score(config.service_level) * forecast_demand_stddev(days) * lead_time.sqrt()).ceil();
    let reorder_point = (avg_daily_demand * lead_time + safety_stock).ceil();

    let eoq = economic_order_quantity(avg_daily_demand);
    let restock_need = reorder_point - current_stock as f64 + avg_daily_demand * RESTOCK_COVER_DAYS;
    let recommended_quantity = eoq.max(restock_need).round().max(0.0) as i64;

    let should_reorder = (current_stock as f64) <= reorder_point;

    let lead_days = config.lead_time_days as usize;
    let optimal_order_date = if stockout > lead_days {
        as_of + Duration::days((stockout - lead_days) as i64)
    } else {
        as_of
    };

    InventoryRecommendation {
        stock_status,
        days_until_stockout: stockout,
        should_reorder,
        recommended_quantity,
        optimal_order_date,
    }
}

/// First forecast-day offset at which cumulative demand exceeds stock.
fn days_until_stockout(days: &[ForecastDay], current_stock: i64) -> usize {
    let mut cumulative = 0i64;
    for (i, day) in days.iter().enumerate() {
        cumulative += day.predicted_demand;
        if cumulative > current_stock {
            return i;
        }
    }
    days.len()
}

/// Classical economic order quantity with the fixed cost constants.
///
/// With these constants the demand term cancels algebraically, so every
/// positive demand level yields the same quantity; zero demand is
/// special-cased to avoid the undefined division.
fn economic_order_quantity(avg_daily_demand: f64) -> f64 {
    if avg_daily_demand == 0.0 {
        return 0.0;
    }
    ((2.0 * ORDER_CYCLE_DAYS * avg_daily_demand * ORDER_COST)
        / (HOLDING_COST_RATE * avg_daily_demand))
        .sqrt()
        .ceil()
}
