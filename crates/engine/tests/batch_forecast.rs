//! Black-box tests for the batch forecasting engine.

use chrono::{Duration, NaiveDate};

use stockcast_engine::{
    EngineConfig, EngineError, ForecastPeriod, ForecastRequest, ProductId, SaleRecord, StockStatus,
    TrendDirection, run_forecast, run_forecast_with_actuals,
};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

/// One record per day, quantities in order, ending the day before `as_of`.
fn daily_records(product_id: ProductId, quantities: &[i64], current_stock: i64) -> Vec<SaleRecord> {
    let start = as_of() - Duration::days(quantities.len() as i64);
    quantities
        .iter()
        .enumerate()
        .map(|(i, &quantity)| SaleRecord {
            product_id,
            date: start + Duration::days(i as i64),
            quantity,
            product_name: "Widget".to_string(),
            sku: "W-1".to_string(),
            current_stock,
        })
        .collect()
}

#[test]
fn short_history_takes_the_fallback_path() {
    let product_id = ProductId::new();
    let records = daily_records(product_id, &[2, 3, 2, 4, 3], 10);
    let request = ForecastRequest::new(records, as_of());

    let response = run_forecast(&request, &EngineConfig::default()).unwrap();
    assert!(response.failures.is_empty());
    assert_eq!(response.forecasts.len(), 1);

    let forecast = &response.forecasts[0];
    assert_eq!(forecast.days.len(), 30);
    for day in &forecast.days {
        // Average of 2.8 rounds to 3 on every day of the horizon.
        assert_eq!(day.predicted_demand, 3);
    }
    assert_eq!(forecast.summary.trend.slope, 0.0);
    assert_eq!(forecast.summary.trend.direction, TrendDirection::Stable);

    let f = forecast.summary.seasonal_factors;
    for factor in [
        f.sunday,
        f.monday,
        f.tuesday,
        f.wednesday,
        f.thursday,
        f.friday,
        f.saturday,
    ] {
        assert_eq!(factor, 1.0);
    }
}

#[test]
fn growing_demand_forecasts_an_increasing_trend() {
    let product_id = ProductId::new();
    let quantities: Vec<i64> = (1..=20).collect();
    let records = daily_records(product_id, &quantities, 100);
    let request =
        ForecastRequest::new(records, as_of()).with_period(ForecastPeriod::SevenDays);

    let response = run_forecast(&request, &EngineConfig::default()).unwrap();
    let forecast = &response.forecasts[0];

    assert_eq!(forecast.days.len(), 7);
    assert_eq!(
        forecast.summary.trend.direction,
        TrendDirection::Increasing
    );
    assert!(forecast.summary.trend.slope > 0.0);
    assert!(forecast.days[6].predicted_demand > forecast.days[0].predicted_demand);
}

#[test]
fn ample_stock_survives_the_whole_horizon() {
    let product_id = ProductId::new();
    let records = daily_records(product_id, &[2, 3, 2, 4, 3], 1_000);
    let request = ForecastRequest::new(records, as_of());

    let response = run_forecast(&request, &EngineConfig::default()).unwrap();
    let recommendation = &response.forecasts[0].summary.recommendation;

    assert_eq!(recommendation.days_until_stockout, 30);
    assert_eq!(recommendation.stock_status, StockStatus::Adequate);
    assert!(!recommendation.should_reorder);
}

#[test]
fn low_stock_is_flagged_for_reorder() {
    let product_id = ProductId::new();
    let records = daily_records(product_id, &[10; 20], 25);
    let request = ForecastRequest::new(records, as_of());

    let response = run_forecast(&request, &EngineConfig::default()).unwrap();
    let recommendation = &response.forecasts[0].summary.recommendation;

    assert_eq!(recommendation.stock_status, StockStatus::Critical);
    assert!(recommendation.should_reorder);
    assert!(recommendation.recommended_quantity > 0);
    assert_eq!(recommendation.optimal_order_date, as_of());
}

#[test]
fn one_bad_product_does_not_abort_the_batch() {
    let good = ProductId::new();
    let bad = ProductId::new();

    let mut records = daily_records(good, &[5; 20], 100);
    let mut bad_records = daily_records(bad, &[5; 20], 100);
    bad_records[3].quantity = -1;
    records.extend(bad_records);

    let request = ForecastRequest::new(records, as_of());
    let response = run_forecast(&request, &EngineConfig::default()).unwrap();

    assert_eq!(response.forecasts.len(), 1);
    assert_eq!(response.forecasts[0].product_id, good);

    assert_eq!(response.failures.len(), 1);
    assert_eq!(response.failures[0].product_id, bad);
    match &response.failures[0].error {
        EngineError::InvalidRecord { product_id, .. } => assert_eq!(*product_id, bad),
        other => panic!("Expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn history_is_echoed_only_on_request() {
    let product_id = ProductId::new();
    let records = daily_records(product_id, &[2, 3, 2, 4, 3], 10);

    let request = ForecastRequest::new(records.clone(), as_of());
    let response = run_forecast(&request, &EngineConfig::default()).unwrap();
    assert!(response.forecasts[0].history.is_none());

    let request = ForecastRequest::new(records, as_of()).with_history(true);
    let response = run_forecast(&request, &EngineConfig::default()).unwrap();
    let history = response.forecasts[0].history.as_ref().unwrap();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0].quantity, 2);
}

#[test]
fn metadata_reflects_the_request() {
    let product_id = ProductId::new();
    let records = daily_records(product_id, &[5; 20], 100);
    let request =
        ForecastRequest::new(records, as_of()).with_period(ForecastPeriod::FourteenDays);

    let response = run_forecast(&request, &EngineConfig::default()).unwrap();

    assert_eq!(response.metadata.period, ForecastPeriod::FourteenDays);
    assert_eq!(
        response.metadata.generated_at,
        as_of().and_hms_opt(0, 0, 0).unwrap().and_utc()
    );
    assert!(response.metadata.accuracy.is_none());
}

#[test]
fn accuracy_appears_only_when_actuals_are_supplied() {
    let product_id = ProductId::new();
    let records = daily_records(product_id, &[5; 20], 100);
    let request = ForecastRequest::new(records, as_of());

    let actuals = vec![stockcast_engine::ActualSale {
        product_id,
        date: as_of(),
        quantity: 5,
    }];

    let response =
        run_forecast_with_actuals(&request, &EngineConfig::default(), &actuals).unwrap();
    let metrics = response.metadata.accuracy.unwrap();
    assert_eq!(metrics.matched_days, 1);
}

#[test]
fn empty_batch_yields_an_empty_response() {
    let request = ForecastRequest::new(Vec::new(), as_of());
    let response = run_forecast(&request, &EngineConfig::default()).unwrap();

    assert!(response.forecasts.is_empty());
    assert!(response.failures.is_empty());
}

#[test]
fn invalid_confidence_level_is_rejected() {
    let request = ForecastRequest::new(Vec::new(), as_of()).with_confidence_level(1.5);
    let err = run_forecast(&request, &EngineConfig::default()).unwrap_err();

    match err {
        EngineError::InvalidConfig(msg) => assert!(msg.contains("confidence_level")),
        other => panic!("Expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn identical_requests_produce_byte_identical_responses() {
    let product_a = ProductId::new();
    let product_b = ProductId::new();

    let mut records = daily_records(product_a, &(1..=20).collect::<Vec<i64>>(), 40);
    records.extend(daily_records(product_b, &[2, 3, 2, 4, 3], 10));
    let request = ForecastRequest::new(records, as_of()).with_history(true);
    let config = EngineConfig::default();

    let first = run_forecast(&request, &config).unwrap();
    let second = run_forecast(&request, &config).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn products_come_back_in_stable_id_order() {
    let mut ids: Vec<ProductId> = (0..4).map(|_| ProductId::new()).collect();
    let mut records = Vec::new();
    // Interleave records in reverse id order.
    ids.sort();
    for id in ids.iter().rev() {
        records.extend(daily_records(*id, &[3; 5], 50));
    }

    let request = ForecastRequest::new(records, as_of());
    let response = run_forecast(&request, &EngineConfig::default()).unwrap();

    let out: Vec<ProductId> = response.forecasts.iter().map(|f| f.product_id).collect();
    assert_eq!(out, ids);
}
