// ABOUTME: Shared helpers for menu ranker integration tests
// ABOUTME: Test logging, fixture loading, and in-memory menu/image sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::NaiveDate;
use menu_ranker::assets::{AssetResolver, AssetStrategy};
use menu_ranker::config::MenuConfig;
use menu_ranker::errors::{AppError, AppResult};
use menu_ranker::external::{ImageSearch, MenuSource};
use menu_ranker::models::MenuDocument;
use menu_ranker::service::MenuService;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Path of a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Parsed fixture document
pub fn load_fixture(name: &str) -> MenuDocument {
    let text = std::fs::read_to_string(fixture_path(name)).unwrap();
    MenuDocument::from_json(&text).unwrap()
}

/// The day every fixture week starts on
pub fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
}

/// Menu source answering from memory, recording the meal types it was asked for
pub struct StaticMenuSource {
    lunch: Option<MenuDocument>,
    breakfast: Option<MenuDocument>,
    requests: Mutex<Vec<(String, NaiveDate)>>,
}

impl StaticMenuSource {
    /// Source serving the lunch and breakfast fixtures
    pub fn fixtures() -> Self {
        Self {
            lunch: Some(load_fixture("lunch_week.json")),
            breakfast: Some(load_fixture("breakfast_week.json")),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Source serving `document` for lunch and nothing for breakfast
    pub fn lunch(document: MenuDocument) -> Self {
        Self {
            lunch: Some(document),
            breakfast: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `(meal_type, date)` pairs requested so far
    pub fn requests(&self) -> Vec<(String, NaiveDate)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MenuSource for StaticMenuSource {
    async fn fetch_week(&self, meal_type: &str, date: NaiveDate) -> AppResult<MenuDocument> {
        self.requests
            .lock()
            .unwrap()
            .push((meal_type.to_owned(), date));
        let document = if meal_type == "breakfast" {
            &self.breakfast
        } else {
            &self.lunch
        };
        document
            .clone()
            .ok_or_else(|| AppError::external_service("Static", format!("no {meal_type} menu")))
    }
}

/// Menu source that always fails like an unreachable API
pub struct FailingMenuSource;

#[async_trait]
impl MenuSource for FailingMenuSource {
    async fn fetch_week(&self, _meal_type: &str, _date: NaiveDate) -> AppResult<MenuDocument> {
        Err(AppError::external_unavailable("Nutrislice", "connection refused"))
    }
}

/// Image search answering with a fixed result and counting calls
pub struct CountingImageSearch {
    result: Option<String>,
    fail: bool,
    calls: AtomicUsize,
}

impl CountingImageSearch {
    pub fn found(url: &str) -> Self {
        Self {
            result: Some(url.to_owned()),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: None,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageSearch for CountingImageSearch {
    async fn search_image(&self, _query: &str) -> AppResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::external_service("Image search", "HTTP 500"));
        }
        Ok(self.result.clone())
    }
}

/// Service over `source` with the default configuration and emoji assets
pub fn service_with(source: Arc<dyn MenuSource>) -> MenuService {
    init_test_logging();
    let config = Arc::new(MenuConfig::default());
    let assets = AssetResolver::new(
        AssetStrategy::Emoji,
        config.assets.placeholder_url.clone(),
        None,
    );
    MenuService::new(config, source, assets)
}

/// Service over the lunch and breakfast fixtures
pub fn fixture_service() -> MenuService {
    service_with(Arc::new(StaticMenuSource::fixtures()))
}
