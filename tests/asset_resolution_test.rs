// ABOUTME: Integration tests for display asset resolution strategies
// ABOUTME: Upstream photos win; emoji table, placeholder, and photo search with fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{init_test_logging, CountingImageSearch};
use menu_ranker::assets::emoji::DEFAULT_EMOJI;
use menu_ranker::assets::{AssetResolver, AssetStrategy};
use menu_ranker::external::{build_http_client, ImageSearch, ImageSearchClient, ImageSearchConfig};
use menu_ranker::models::DisplayAsset;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PLACEHOLDER: &str = "https://placeholder.example.test/none.png";

fn image(url: &str) -> DisplayAsset {
    DisplayAsset::Image {
        url: url.to_owned(),
    }
}

#[tokio::test]
async fn test_upstream_photo_always_wins() {
    let search = Arc::new(CountingImageSearch::found("https://search.example.test/x.jpg"));
    let resolver = AssetResolver::new(
        AssetStrategy::ImageSearch,
        PLACEHOLDER,
        Some(search.clone() as Arc<dyn ImageSearch>),
    );

    let asset = resolver
        .resolve("Chicken Bowl", Some("https://images.example.test/bowl.jpg"))
        .await;

    assert_eq!(asset, image("https://images.example.test/bowl.jpg"));
    assert_eq!(search.calls(), 0);
}

#[tokio::test]
async fn test_emoji_strategy_uses_keyword_table() {
    let resolver = AssetResolver::new(AssetStrategy::Emoji, PLACEHOLDER, None);

    assert_eq!(
        resolver.resolve("Pepperoni Pizza", None).await,
        DisplayAsset::Emoji {
            symbol: "🍕".to_owned()
        }
    );
    assert_eq!(
        resolver.resolve("Mystery Casserole", Some("  ")).await,
        DisplayAsset::Emoji {
            symbol: DEFAULT_EMOJI.to_owned()
        }
    );
}

#[tokio::test]
async fn test_placeholder_strategy() {
    let resolver = AssetResolver::new(AssetStrategy::Placeholder, PLACEHOLDER, None);

    assert_eq!(resolver.resolve("Veggie Wrap", None).await, image(PLACEHOLDER));
}

#[tokio::test]
async fn test_search_failure_falls_back_to_placeholder() {
    init_test_logging();
    let search = Arc::new(CountingImageSearch::failing());
    let resolver = AssetResolver::new(
        AssetStrategy::ImageSearch,
        PLACEHOLDER,
        Some(search.clone() as Arc<dyn ImageSearch>),
    );

    assert_eq!(resolver.resolve("Veggie Wrap", None).await, image(PLACEHOLDER));
    assert_eq!(search.calls(), 1);
}

#[tokio::test]
async fn test_search_without_credential_uses_placeholder() {
    let resolver = AssetResolver::new(AssetStrategy::ImageSearch, PLACEHOLDER, None);

    assert_eq!(resolver.resolve("Veggie Wrap", None).await, image(PLACEHOLDER));
}

fn search_client(server: &MockServer) -> Arc<dyn ImageSearch> {
    let config = ImageSearchConfig {
        base_url: format!("{}/search/photos", server.uri()),
        api_key: Some("test-token".to_owned()),
    };
    let http = build_http_client(Duration::from_secs(5)).unwrap();
    Arc::new(ImageSearchClient::new(config, http).unwrap())
}

#[tokio::test]
async fn test_search_client_returns_first_photo() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("query", "Veggie Wrap"))
        .and(query_param("per_page", "1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "photos": [
                {"src": {"regular": "https://photos.example.test/wrap.jpg"}},
                {"src": {"regular": "https://photos.example.test/other.jpg"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = AssetResolver::new(
        AssetStrategy::ImageSearch,
        PLACEHOLDER,
        Some(search_client(&server)),
    );

    assert_eq!(
        resolver.resolve("Veggie Wrap", None).await,
        image("https://photos.example.test/wrap.jpg")
    );
}

#[tokio::test]
async fn test_search_client_empty_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"photos": []})))
        .mount(&server)
        .await;

    let client = search_client(&server);
    assert_eq!(client.search_image("Veggie Wrap").await.unwrap(), None);

    let resolver = AssetResolver::new(AssetStrategy::ImageSearch, PLACEHOLDER, Some(client));
    assert_eq!(resolver.resolve("Veggie Wrap", None).await, image(PLACEHOLDER));
}

#[tokio::test]
async fn test_search_client_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = search_client(&server);
    assert!(client.search_image("Veggie Wrap").await.is_err());

    let resolver = AssetResolver::new(AssetStrategy::ImageSearch, PLACEHOLDER, Some(client));
    assert_eq!(resolver.resolve("Veggie Wrap", None).await, image(PLACEHOLDER));
}
