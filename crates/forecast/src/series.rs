//! Daily sales series construction.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockcast_core::{EngineError, EngineResult, ProductId};

/// One raw sale observation, carrying the static product attributes the
/// surrounding system attaches to each row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub product_id: ProductId,
    /// Calendar day of the sale. Time of day is irrelevant to the model and
    /// is dropped before records reach this crate.
    pub date: NaiveDate,
    pub quantity: i64,
    pub product_name: String,
    pub sku: String,
    pub current_stock: i64,
}

/// One day of aggregated demand for a single product.
///
/// Invariant (guaranteed by [`build_daily_series`]): within a series, dates
/// are strictly increasing and quantity is the sum of same-day sales.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeriesPoint {
    pub date: NaiveDate,
    pub quantity: i64,
}

/// Validate a single sale record.
///
/// Malformed records fail fast rather than being silently dropped.
pub fn validate_record(record: &SaleRecord) -> EngineResult<()> {
    if record.quantity < 0 {
        return Err(EngineError::invalid_record(
            record.product_id,
            record.date,
            "quantity cannot be negative",
        ));
    }
    Ok(())
}

/// Bucket raw records for one product by calendar day, summing quantities.
///
/// Emits buckets in ascending date order. Empty input yields an empty
/// series; the data-sufficiency branch downstream handles that case.
pub fn build_daily_series(records: &[SaleRecord]) -> Vec<DailySeriesPoint> {
    let mut buckets: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for record in records {
        *buckets.entry(record.date).or_insert(0) += record.quantity;
    }

    buckets
        .into_iter()
        .map(|(date, quantity)| DailySeriesPoint { date, quantity })
        .collect()
}
