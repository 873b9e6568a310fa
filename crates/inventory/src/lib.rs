//! Inventory control module.
//!
//! This crate contains the replenishment rules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). It consumes a
//! finished demand forecast and the current stock level; it never mutates
//! stock — output is advisory.

pub mod recommendation;

pub use recommendation::{
    InventoryRecommendation, SafetyStockConfig, StockStatus, forecast_demand_stddev, recommend,
};
