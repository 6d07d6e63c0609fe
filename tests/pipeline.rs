use chrono::{Days, NaiveDate};
use fx_analytics::analytics::{analyze, SeriesCalculator, VolatilityCalculator};
use fx_analytics::network::CurrencyDataFetcher;
use fx_analytics::report::ReportWriter;
use fx_analytics::{AnalyticsResult, Config, Currency, CurrencyCode, Observation, SeriesOrder, TimeSeriesSet};
use uuid::Uuid;

fn newest_first(code: &str, today: NaiveDate, rates: &[f64]) -> TimeSeriesSet {
    let observations = rates
        .iter()
        .enumerate()
        .map(|(i, rate)| Observation::new(today - Days::new(i as u64), *rate))
        .collect();
    TimeSeriesSet::from_series(SeriesOrder::NewestFirst, [(code, observations)])
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 17).unwrap()
}

#[test]
fn sliding_window_scenario() {
    let set = newest_first("usd", today(), &[10.0, 11.0, 9.0, 10.0, 10.0]);
    let bundle = analyze(&set, 3).unwrap();

    let averages = bundle.moving_average[&CurrencyCode::new("usd")].value().unwrap();
    let expected = [10.0, 10.0, 29.0 / 3.0];
    assert_eq!(averages.len(), expected.len());
    for (a, e) in averages.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9);
    }
}

#[test]
fn constant_series_round_trip() {
    let set = newest_first("chf", today(), &[0.94; 7]);
    let bundle = analyze(&set, 5).unwrap();
    let chf = CurrencyCode::new("chf");

    assert_eq!(bundle.volatility[&chf], AnalyticsResult::Value(0.0));
    assert_eq!(bundle.rate_of_change[&chf], AnalyticsResult::Value(0.0));
    assert_eq!(bundle.moving_average[&chf], AnalyticsResult::Value(vec![0.94; 3]));
}

#[test]
fn volatility_is_order_independent_but_positional_metrics_are_not() {
    let rates = [36.08, 36.23, 35.9, 36.4];
    let mut reversed = rates;
    reversed.reverse();

    let forward = analyze(&newest_first("thb", today(), &rates), 2).unwrap();
    let backward = analyze(&newest_first("thb", today(), &reversed), 2).unwrap();
    let thb = CurrencyCode::new("thb");

    let a = forward.volatility[&thb].value().unwrap();
    let b = backward.volatility[&thb].value().unwrap();
    assert!((a - b).abs() < 1e-12);
    assert_ne!(forward.rate_of_change[&thb], backward.rate_of_change[&thb]);
    assert_ne!(forward.moving_average[&thb], backward.moving_average[&thb]);
}

#[test]
fn empty_currency_is_reported_everywhere() {
    let mut set = TimeSeriesSet::new(SeriesOrder::NewestFirst);
    set.insert_currency("jpy");
    let bundle = analyze(&set, 5).unwrap();
    let jpy = CurrencyCode::new("jpy");

    assert!(bundle.volatility[&jpy].is_insufficient());
    assert!(bundle.rate_of_change[&jpy].is_insufficient());
    assert!(bundle.moving_average[&jpy].is_insufficient());

    let merged = bundle.per_currency();
    assert_eq!(merged.len(), 1);
    assert_eq!(VolatilityCalculator::new().compute(&set).len(), 1);
}

#[tokio::test]
async fn fetch_analyze_and_render() {
    let mut server = mockito::Server::new_async().await;
    let bodies = [
        ("2024-10-17", r#"{"eur":{"thb":36.08,"usd":1.0834}}"#),
        ("2024-10-16", r#"{"eur":{"thb":36.23,"usd":1.0861}}"#),
        ("2024-10-15", r#"{"eur":{"thb":36.31}}"#),
    ];
    let mut mocks = Vec::new();
    for (date, body) in bodies {
        mocks.push(
            server
                .mock("GET", format!("/{}/eur.json", date).as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create_async()
                .await,
        );
    }

    let config = Config {
        api_url_template: format!("{}/{{date}}/{{base}}.json", server.url()),
        retry_delay_ms: 1,
        ..Config::default()
    };
    let fetcher =
        CurrencyDataFetcher::with_currencies(3, vec![Currency::Thb, Currency::Usd], &config).unwrap();
    let series = fetcher.fetch_data_until(today()).await.unwrap();
    for mock in &mocks {
        mock.assert_async().await;
    }

    let bundle = analyze(&series, 3).unwrap();
    let thb = CurrencyCode::new("thb");
    let usd = CurrencyCode::new("usd");
    let roc = bundle.rate_of_change[&thb].value().unwrap();
    assert!((roc - (36.08 - 36.31) / 36.31 * 100.0).abs() < 1e-9);
    assert!(bundle.moving_average[&usd].is_insufficient());

    let dir = std::env::temp_dir().join(format!("fx-pipeline-{}", Uuid::new_v4()));
    let writer = ReportWriter::new(dir.join("report.txt"), 5, &config.base_currency);
    let path = writer.write(&series, &bundle, Uuid::new_v4()).unwrap();
    let report = std::fs::read_to_string(path).unwrap();
    assert!(report.contains("USD: Insufficient data"));
    assert!(report.contains("36.3100"));
    std::fs::remove_dir_all(dir).unwrap();
}
