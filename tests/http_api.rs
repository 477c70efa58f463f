mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{reference_request, write_artifact_with, write_linear_artifact};
use edupredict::application::PredictionService;
use edupredict::application::ml::ModelFormat;
use edupredict::config::{AllowedOrigins, CorsEnvConfig};
use edupredict::infrastructure::observability::Metrics;
use edupredict::interfaces::http::{AppState, build_router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

fn router_for(model_path: &Path, metrics: Option<Metrics>, cors: &CorsEnvConfig) -> Router {
    let service =
        PredictionService::initialize(ModelFormat::Linear, model_path, Duration::from_secs(5));
    build_router(AppState::new(service, metrics), cors).expect("router")
}

fn loaded_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = write_linear_artifact(dir.path());
    let app = router_for(&path, Some(Metrics::new().unwrap()), &CorsEnvConfig::default());
    (app, dir)
}

fn degraded_app() -> Router {
    router_for(
        Path::new("definitely/missing/model.json"),
        Some(Metrics::new().unwrap()),
        &CorsEnvConfig::default(),
    )
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn with_field(mut request: Value, field: &str, value: Value) -> Value {
    request[field] = value;
    request
}

#[tokio::test]
async fn test_root_descriptor() {
    let (app, _dir) = loaded_app();
    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Education Prediction API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["endpoints"]["predict"], "/predict");
    assert_eq!(body["endpoints"]["health"], "/health");
    assert_eq!(body["endpoints"]["metrics"], "/metrics");
    assert_eq!(body["model"]["name"], "Linear Regression");
    assert_eq!(body["model"]["version"], "test-1");
}

#[tokio::test]
async fn test_health_reports_loaded_model() {
    let (app, _dir) = loaded_app();
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_loaded"], true);
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_predict_reference_scenario_is_medium() {
    let (app, _dir) = loaded_app();
    let (status, body) = send(&app, post_json("/predict", reference_request().to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], 13.7);
    assert_eq!(body["confidence"], "Medium");
    assert_eq!(
        body["message"],
        "Based on moderate government investment in education"
    );
}

#[tokio::test]
async fn test_predict_high_and_low_confidence() {
    let (app, _dir) = loaded_app();

    let high = json!({
        "primary_expenditure_usd": 1000,
        "secondary_expenditure_usd": 800,
        "tertiary_expenditure_usd": 400,
        "primary_expenditure_gdp": 2.0,
        "secondary_expenditure_gdp": 1.5,
        "tertiary_expenditure_gdp": 1.0,
        "year": 2015
    });
    let (status, body) = send(&app, post_json("/predict", high.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["confidence"], "High");
    // 2015 * 0.01 + 4.5 * 0.5 - 8.0
    assert_eq!(body["prediction"], 14.4);

    let low = json!({
        "primary_expenditure_usd": 0,
        "secondary_expenditure_usd": 0,
        "tertiary_expenditure_usd": 0,
        "primary_expenditure_gdp": 0,
        "secondary_expenditure_gdp": 0,
        "tertiary_expenditure_gdp": 0,
        "year": 2010
    });
    let (status, body) = send(&app, post_json("/predict", low.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["confidence"], "Low");
    assert_eq!(
        body["message"],
        "Based on limited government investment in education"
    );
}

#[tokio::test]
async fn test_predict_rejects_year_out_of_range() {
    let (app, _dir) = loaded_app();
    let request = with_field(reference_request(), "year", json!(2031));
    let (status, body) = send(&app, post_json("/predict", request.to_string())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0]["loc"], json!(["body", "year"]));
    assert_eq!(detail[0]["type"], "value_error.number.not_le");
    assert!(detail[0]["msg"].as_str().unwrap().contains("2030"));
}

#[tokio::test]
async fn test_predict_rejects_gdp_out_of_range() {
    let (app, _dir) = loaded_app();
    let request = with_field(reference_request(), "primary_expenditure_gdp", json!(21));
    let (status, body) = send(&app, post_json("/predict", request.to_string())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["detail"][0]["loc"],
        json!(["body", "primary_expenditure_gdp"])
    );
}

#[tokio::test]
async fn test_predict_rejects_fractional_year() {
    let (app, _dir) = loaded_app();
    let request = with_field(reference_request(), "year", json!(2020.5));
    let (status, body) = send(&app, post_json("/predict", request.to_string())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "type_error.integer");
}

#[tokio::test]
async fn test_predict_accepts_whole_float_year() {
    let (app, _dir) = loaded_app();
    let request = with_field(reference_request(), "year", json!(2020.0));
    let (status, body) = send(&app, post_json("/predict", request.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], 13.7);
}

#[tokio::test]
async fn test_predict_rejects_missing_field_and_bad_json() {
    let (app, _dir) = loaded_app();

    let mut missing = reference_request();
    missing.as_object_mut().unwrap().remove("tertiary_expenditure_gdp");
    let (status, body) = send(&app, post_json("/predict", missing.to_string())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body"]));
    assert!(
        body["detail"][0]["msg"]
            .as_str()
            .unwrap()
            .contains("tertiary_expenditure_gdp")
    );

    let (status, _) = send(&app, post_json("/predict", "{not json".to_string())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_degraded_service_fails_predict_but_stays_healthy() {
    let app = degraded_app();

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_loaded"], false);

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("model").is_none());

    for year in [2010, 2020, 2030] {
        let request = with_field(reference_request(), "year", json!(year));
        let (status, body) = send(&app, post_json("/predict", request.to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Prediction error: Model not loaded");
    }

    // Bad input is still a client error
    let request = with_field(reference_request(), "year", json!(2031));
    let (status, _) = send(&app, post_json("/predict", request.to_string())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_runtime_model_failure_returns_500_with_message() {
    let dir = tempfile::tempdir().unwrap();
    // Finite weights, but year * 1e308 overflows to infinity
    let mut coefficients = vec![0.0; 10];
    coefficients[6] = 1e308;
    let path = write_artifact_with(dir.path(), &coefficients, 0.0);
    let app = router_for(&path, Some(Metrics::new().unwrap()), &CorsEnvConfig::default());

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_loaded"], true);

    let (status, body) = send(&app, post_json("/predict", reference_request().to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["detail"],
        "Prediction error: model returned a non-finite value"
    );

    let response = app.clone().oneshot(get("/metrics")).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("edupredict_predictions_total{outcome=\"prediction_error\"} 1"));
}

#[tokio::test]
async fn test_metrics_endpoint_counts_outcomes() {
    let (app, _dir) = loaded_app();

    send(&app, post_json("/predict", reference_request().to_string())).await;
    let bad = with_field(reference_request(), "year", json!(1999));
    send(&app, post_json("/predict", bad.to_string())).await;

    let response = app.clone().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(text.contains("edupredict_model_loaded 1"));
    assert!(text.contains("edupredict_predictions_total{outcome=\"success\"} 1"));
    assert!(text.contains("edupredict_predictions_total{outcome=\"validation_error\"} 1"));
    assert!(text.contains("edupredict_confidence_total{level=\"Medium\"} 1"));
    assert!(text.contains("edupredict_prediction_latency_seconds_count 2"));
}

#[tokio::test]
async fn test_metrics_route_absent_when_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_linear_artifact(dir.path());
    let app = router_for(&path, None, &CorsEnvConfig::default());

    let (status, _) = send(&app, get("/metrics")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, get("/")).await;
    assert!(body["endpoints"].get("metrics").is_none());
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/predict")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_cors_open_by_default() {
    let (app, _dir) = loaded_app();
    let response = app
        .clone()
        .oneshot(preflight("https://anywhere.example.com"))
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_origin_list_is_enforced() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_linear_artifact(dir.path());
    let cors = CorsEnvConfig {
        allowed_origins: AllowedOrigins::List(vec!["https://app.example.org".to_string()]),
        allow_credentials: true,
    };
    let app = router_for(&path, None, &cors);

    let allowed = app
        .clone()
        .oneshot(preflight("https://app.example.org"))
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example.org"
    );
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );

    let denied = app
        .clone()
        .oneshot(preflight("https://evil.example.net"))
        .await
        .unwrap();
    assert!(
        denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
