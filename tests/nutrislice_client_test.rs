// ABOUTME: Integration tests for the Nutrislice weekly menu client against a mock HTTP server
// ABOUTME: Verifies the endpoint path, document decoding, and failure classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::time::Duration;

use common::{fixture_date, fixture_path, init_test_logging};
use menu_ranker::errors::ErrorCode;
use menu_ranker::external::{build_http_client, MenuSource, NutrisliceClient, NutrisliceConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WEEK_PATH: &str = "/menu/api/weeks/school/glenn-high/menu-type/lunch/2025/02/10/";

fn client_for(server: &MockServer) -> NutrisliceClient {
    init_test_logging();
    let config = NutrisliceConfig {
        base_url: format!("{}/menu/api/weeks", server.uri()),
        school: "glenn-high".to_owned(),
    };
    NutrisliceClient::new(config, build_http_client(Duration::from_secs(5)).unwrap())
}

#[tokio::test]
async fn test_fetch_week_decodes_document() {
    let server = MockServer::start().await;
    let body = std::fs::read_to_string(fixture_path("lunch_week.json")).unwrap();
    Mock::given(method("GET"))
        .and(path(WEEK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let document = client_for(&server)
        .fetch_week("lunch", fixture_date())
        .await
        .unwrap();

    assert_eq!(document.days.len(), 3);
    assert_eq!(document.foods().count(), 8);
}

#[tokio::test]
async fn test_failure_status_is_external_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEEK_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .fetch_week("lunch", fixture_date())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.user_message(), "Error fetching data from the API.");
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEEK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .fetch_week("lunch", fixture_date())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::SerializationError);
    assert_eq!(error.user_message(), "Error fetching data from the API.");
    assert!(!error.user_message().contains("line"));
}

#[tokio::test]
async fn test_unreachable_host_is_unavailable() {
    init_test_logging();
    let config = NutrisliceConfig {
        base_url: "http://127.0.0.1:9/menu/api/weeks".to_owned(),
        school: "glenn-high".to_owned(),
    };
    let client = NutrisliceClient::new(config, build_http_client(Duration::from_secs(2)).unwrap());

    let error = client.fetch_week("lunch", fixture_date()).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(error.http_status(), 502);
}
