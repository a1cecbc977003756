//! Router and configuration tests for the serve command.

use std::net::SocketAddr;
use std::sync::Arc;

use super::*;
use crate::serve::{ServeArgs, ServeConfig, SERVICE_NAME, config_from_layers_for_test, router};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use rstest::rstest;
use serde_json::Value;
use tideline_core::test_support::FixedConditionsProvider;
use tideline_core::{ConditionsError, ConditionsProvider};
use tideline_data::test_support::StubConditionsProvider;
use tower::ServiceExt;

async fn get(provider: Arc<dyn ConditionsProvider>, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds");
    let response = router(provider)
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body = serde_json::from_slice(&bytes).expect("body is JSON");
    (status, body)
}

fn fixed() -> Arc<dyn ConditionsProvider> {
    Arc::new(FixedConditionsProvider::default())
}

#[tokio::test]
async fn health_reports_service_name() {
    let (status, body) = get(fixed(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], SERVICE_NAME);
}

#[tokio::test]
async fn conditions_default_to_san_diego() {
    let (status, body) = get(fixed(), "/api/conditions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["conditions"]["location"], DEFAULT_LOCATION);
    let activities = body["activities"].as_array().expect("activities array");
    assert_eq!(activities.len(), 8);
    assert_eq!(body["best"]["key"], activities[0]["key"]);
}

#[tokio::test]
async fn conditions_use_the_requested_location() {
    let (status, body) = get(fixed(), "/api/conditions?location=Malibu%2C%20CA").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["conditions"]["location"], "Malibu, CA");
}

#[tokio::test]
async fn provider_failures_report_an_error_envelope() {
    let provider = Arc::new(StubConditionsProvider::with_error(ConditionsError::NoData {
        location: "Atlantis".to_owned(),
    }));
    let (status, body) = get(provider, "/api/conditions?location=Atlantis").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().expect("error message");
    assert!(error.contains("Atlantis"), "{error}");
    assert!(body.get("activities").is_none());
}

#[tokio::test]
async fn blank_locations_are_bad_requests() {
    let (status, body) = get(fixed(), "/api/conditions?location=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[rstest]
fn bind_defaults_to_all_interfaces() {
    let config = ServeConfig::try_from(ServeArgs::default()).expect("config builds");
    let expected: SocketAddr = DEFAULT_BIND.parse().expect("default parses");
    assert_eq!(config.bind, expected);
    assert!(!config.provider.live);
}

#[rstest]
fn rejects_unparseable_bind() {
    let args = ServeArgs {
        bind: Some("localhost".to_owned()),
        ..ServeArgs::default()
    };
    let err = ServeConfig::try_from(args).expect_err("bind should be rejected");
    match err {
        CliError::InvalidArgument { field, .. } => assert_eq!(field, ARG_BIND),
        other => panic!("expected InvalidArgument, found {other:?}"),
    }
}

#[rstest]
fn serve_flags_parse() {
    let cli = Cli::try_parse_from([
        "tideline",
        "serve",
        "--bind",
        "127.0.0.1:8080",
        "--live",
        "--seed",
        "3",
    ])
    .expect("arguments parse");
    let Command::Serve(args) = cli.command else {
        panic!("expected serve command");
    };
    let config = ServeConfig::try_from(args).expect("config builds");
    assert_eq!(config.bind.port(), 8080);
    assert!(config.provider.live);
    assert_eq!(config.provider.seed, Some(3));
}

#[rstest]
fn merge_layers_prefer_cli_bind() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_environment(json!({ "bind": "0.0.0.0:9000", "noaa_station": "9410230" }));
    composer.push_cli(json!({ "bind": "127.0.0.1:7000" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.bind.port(), 7000);
    assert_eq!(config.provider.noaa_station.as_deref(), Some("9410230"));
}
