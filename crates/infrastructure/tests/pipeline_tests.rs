//! End-to-end pipeline tests
//!
//! Runs the real weather adapter against a wiremock Open-Meteo server and
//! writes through the file report store into a temporary directory.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use application::{ApplicationError, PipelineService};
use domain::RunLogEntry;
use infrastructure::persistence::{
    CSV_FILE, HISTORY_CSV_FILE, HISTORY_FILE, REPORT_FILE, RUN_LOG_FILE, SUMMARY_FILE,
};
use infrastructure::{AppConfig, FileReportStore, WeatherAdapter};
use integration_weather::WeatherConfig;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 43.65,
        "longitude": -79.38,
        "timezone": "America/Toronto",
        "current": {
            "time": "2024-07-01T14:00",
            "temperature_2m": 22.4,
            "relative_humidity_2m": 55,
            "apparent_temperature": 23.1,
            "precipitation": 0.0,
            "weather_code": 1,
            "wind_speed_10m": 9.7,
            "wind_direction_10m": 240
        },
        "daily": {
            "time": ["2024-07-01", "2024-07-02", "2024-07-03", "2024-07-04"],
            "weather_code": [1, 2, 95, 0],
            "temperature_2m_max": [26.0, 27.5, 35.0, 36.4],
            "temperature_2m_min": [17.2, 18.0, 21.0, 22.3],
            "precipitation_sum": [0.0, 0.0, 14.2, 0.0],
            "precipitation_probability_max": [5, 10, 90, 0],
            "wind_speed_10m_max": [18.5, 20.1, 35.2, 12.0],
            "wind_direction_10m_dominant": [225, 230, 250, 200]
        }
    })
}

async fn mock_provider(status: u16) -> MockServer {
    let server = MockServer::start().await;
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(forecast_body())
    } else {
        ResponseTemplate::new(status)
    };
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("timezone", "America/Toronto"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn pipeline(server: &MockServer, dir: &TempDir) -> (PipelineService, FileReportStore) {
    let config = AppConfig::default();
    let adapter = WeatherAdapter::with_config(WeatherConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        forecast_days: 4,
    })
    .expect("adapter");
    let store = FileReportStore::new(dir.path().join("data"));
    let service = PipelineService::new(
        Arc::new(adapter),
        Arc::new(store.clone()),
        config.location().expect("default location"),
    )
    .with_forecast_days(4);
    (service, store)
}

fn run_log(store: &FileReportStore) -> Vec<RunLogEntry> {
    let bytes = std::fs::read(store.path_of(RUN_LOG_FILE)).expect("run log exists");
    serde_json::from_slice(&bytes).expect("run log parses")
}

#[tokio::test]
async fn run_writes_all_outputs() {
    let server = mock_provider(200).await;
    let dir = TempDir::new().unwrap();
    let (service, store) = pipeline(&server, &dir);

    let run = service.run().await.expect("pipeline run");

    assert!(run.changed());
    for name in [REPORT_FILE, CSV_FILE, SUMMARY_FILE, RUN_LOG_FILE] {
        assert!(store.path_of(name).exists(), "{name} missing");
    }

    let csv = std::fs::read_to_string(store.path_of(CSV_FILE)).unwrap();
    assert_eq!(csv.lines().count(), 1 + 1 + 4);
}

#[tokio::test]
async fn run_produces_expected_labels_and_alerts() {
    let server = mock_provider(200).await;
    let dir = TempDir::new().unwrap();
    let (service, _store) = pipeline(&server, &dir);

    let run = service.run().await.expect("pipeline run");
    let analysis = &run.report.analysis;

    assert_eq!(analysis.current.comfort.to_string(), "Very Comfortable");
    assert_eq!(analysis.forecast.trend.to_string(), "Warming");
    assert_eq!(
        analysis.alerts,
        vec![
            "Heavy precipitation expected on 2024-07-03: 14.2mm".to_string(),
            "Thunderstorm possible on 2024-07-03".to_string(),
            "Heat alert on 2024-07-04: high of 36.4°C".to_string(),
        ]
    );
}

#[tokio::test]
async fn second_identical_run_is_unchanged() {
    let server = mock_provider(200).await;
    let dir = TempDir::new().unwrap();
    let (service, store) = pipeline(&server, &dir);

    service.run().await.expect("first run");
    let first_json = std::fs::read(store.path_of(REPORT_FILE)).unwrap();
    let first_csv = std::fs::read(store.path_of(CSV_FILE)).unwrap();

    let second = service.run().await.expect("second run");

    assert!(!second.changed());
    assert_eq!(std::fs::read(store.path_of(REPORT_FILE)).unwrap(), first_json);
    assert_eq!(std::fs::read(store.path_of(CSV_FILE)).unwrap(), first_csv);

    let log = run_log(&store);
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].changed, Some(true));
    assert_eq!(log[1].changed, Some(false));
}

#[tokio::test]
async fn only_the_run_log_moves_on_an_unchanged_run() {
    let server = mock_provider(200).await;
    let dir = TempDir::new().unwrap();
    let (service, store) = pipeline(&server, &dir);

    service.run().await.expect("first run");
    let data_files = [REPORT_FILE, CSV_FILE, SUMMARY_FILE, HISTORY_FILE, HISTORY_CSV_FILE];
    let before: Vec<Vec<u8>> = data_files
        .iter()
        .map(|name| std::fs::read(store.path_of(name)).unwrap())
        .collect();
    let log_before = std::fs::read(store.path_of(RUN_LOG_FILE)).unwrap();

    let second = service.run().await.expect("second run");

    // The run log is not part of the change signal; CI commits it only
    // together with changed data.
    assert!(!second.changed());
    for (name, bytes) in data_files.iter().zip(&before) {
        assert_eq!(&std::fs::read(store.path_of(name)).unwrap(), bytes, "{name}");
        assert_eq!(
            second.outcome.status_of(name),
            Some(application::ports::FileStatus::Unchanged)
        );
    }
    assert_ne!(std::fs::read(store.path_of(RUN_LOG_FILE)).unwrap(), log_before);
}

#[tokio::test]
async fn history_holds_one_entry_per_observation() {
    use application::ports::ReportStorePort;

    let server = mock_provider(200).await;
    let dir = TempDir::new().unwrap();
    let (service, store) = pipeline(&server, &dir);

    service.run().await.expect("first run");
    service.run().await.expect("second run");

    let history = store.load_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].weather_description, "Mainly clear");
}

#[tokio::test]
async fn provider_failure_is_logged_and_returned() {
    let server = mock_provider(503).await;
    let dir = TempDir::new().unwrap();
    let (service, store) = pipeline(&server, &dir);

    let err = service.run().await.unwrap_err();
    assert!(matches!(err, ApplicationError::ExternalService(_)));
    assert!(!store.path_of(REPORT_FILE).exists());

    let log = run_log(&store);
    assert_eq!(log.len(), 1);
    assert!(!log[0].success);
    assert!(log[0].error.as_deref().unwrap_or_default().contains("503"));
}

#[tokio::test]
async fn stored_report_can_be_read_back() {
    use application::ports::ReportStorePort;

    let server = mock_provider(200).await;
    let dir = TempDir::new().unwrap();
    let (service, store) = pipeline(&server, &dir);

    let run = service.run().await.expect("pipeline run");
    let loaded = store.load_report().await.unwrap();

    assert_eq!(loaded, Some(run.report));
}
