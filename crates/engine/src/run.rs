//! Batch forecast execution.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::{debug, warn};

use stockcast_core::{EngineError, EngineResult, ProductId};
use stockcast_forecast::{
    SaleRecord, SeasonalFactors, TrendResult, build_daily_series, estimate_seasonal_factors,
    estimate_trend, fallback_forecast, generate_forecast, validate_record,
};
use stockcast_inventory::recommend;

use crate::accuracy::{ActualSale, evaluate_accuracy};
use crate::config::EngineConfig;
use crate::request::ForecastRequest;
use crate::response::{
    ForecastMetadata, ForecastResponse, ForecastSummary, ProductFailure, ProductForecast,
};

/// Run a forecasting request over a batch of products.
///
/// Products are computed independently: one product's invalid records are
/// reported under `failures` without aborting its siblings. Output is
/// ordered by product id so identical requests serialize identically.
pub fn run_forecast(
    request: &ForecastRequest,
    config: &EngineConfig,
) -> EngineResult<ForecastResponse> {
    run_forecast_with_actuals(request, config, &[])
}

/// Same as [`run_forecast`], additionally scoring the batch against
/// realized sales when the caller has them.
pub fn run_forecast_with_actuals(
    request: &ForecastRequest,
    config: &EngineConfig,
    actuals: &[ActualSale],
) -> EngineResult<ForecastResponse> {
    config.validate()?;
    validate_confidence_level(request.confidence_level)?;

    let by_product = group_by_product(&request.sales_data);
    debug!(
        products = by_product.len(),
        horizon = request.period.days(),
        "running forecast batch"
    );

    let mut forecasts = Vec::with_capacity(by_product.len());
    let mut failures = Vec::new();

    for (product_id, records) in by_product {
        match forecast_product(product_id, &records, request, config) {
            Ok(forecast) => forecasts.push(forecast),
            Err(error) => {
                warn!(%product_id, %error, "product forecast failed");
                failures.push(ProductFailure { product_id, error });
            }
        }
    }

    let accuracy = evaluate_accuracy(&forecasts, actuals);

    Ok(ForecastResponse {
        forecasts,
        failures,
        metadata: ForecastMetadata {
            generated_at: midnight_utc(request.as_of),
            period: request.period,
            accuracy,
        },
    })
}

/// The full per-product pipeline: validate, aggregate, branch on data
/// sufficiency, forecast, recommend.
fn forecast_product(
    product_id: ProductId,
    records: &[SaleRecord],
    request: &ForecastRequest,
    config: &EngineConfig,
) -> EngineResult<ProductForecast> {
    for record in records {
        validate_record(record)?;
    }

    // Static attributes ride along on every record; the latest-dated one
    // wins if they disagree.
    let (product_name, sku, current_stock) = match records.iter().max_by_key(|r| r.date) {
        Some(r) => (r.product_name.clone(), r.sku.clone(), r.current_stock),
        None => (String::new(), String::new(), 0),
    };

    let series = build_daily_series(records);
    let horizon = request.period.days();

    let (days, trend, seasonal_factors) = if series.len() >= config.min_data_points {
        let trend = estimate_trend(&series);
        let factors = estimate_seasonal_factors(
            &series,
            config.seasonality_enabled,
            config.seasonality_min_periods,
        );
        let days = generate_forecast(
            &series,
            horizon,
            request.confidence_level,
            trend,
            &factors,
            request.as_of,
        );
        (days, trend, factors)
    } else {
        debug!(%product_id, observed_days = series.len(), "history too short, using fallback forecast");
        let days = fallback_forecast(&series, horizon, request.confidence_level, request.as_of);
        (days, TrendResult::stable(), SeasonalFactors::unit())
    };

    let recommendation = recommend(&days, current_stock, &config.safety_stock, request.as_of);

    let total_predicted_demand: i64 = days.iter().map(|d| d.predicted_demand).sum();
    let average_daily_demand = if days.is_empty() {
        0.0
    } else {
        total_predicted_demand as f64 / days.len() as f64
    };

    Ok(ProductForecast {
        product_id,
        product_name,
        sku,
        current_stock,
        days,
        summary: ForecastSummary {
            total_predicted_demand,
            average_daily_demand,
            trend,
            seasonal_factors,
            recommendation,
        },
        history: request.include_history.then_some(series),
    })
}

/// Group records by product, in stable product-id order.
fn group_by_product(records: &[SaleRecord]) -> BTreeMap<ProductId, Vec<SaleRecord>> {
    let mut grouped: BTreeMap<ProductId, Vec<SaleRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.product_id)
            .or_default()
            .push(record.clone());
    }
    grouped
}

fn validate_confidence_level(confidence_level: f64) -> EngineResult<()> {
    if !(confidence_level.is_finite() && confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(EngineError::invalid_config(
            "confidence_level must be between 0 and 1 (exclusive)",
        ));
    }
    Ok(())
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
