// ABOUTME: External API clients (Nutrislice weekly menus, photo search) behind narrow traits
// ABOUTME: Keeps the ranking pipeline pure and lets tests swap in fixture sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! The service only ever talks to the network through [`MenuSource`] and
//! [`ImageSearch`]. Each call is a single request: no retries, no backoff.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::models::MenuDocument;

/// Offline menu source reading a JSON document from disk
pub mod fixture;
/// Photo search client used as a display asset fallback
pub mod image_search_client;
/// Nutrislice weekly menu client
pub mod nutrislice_client;

pub use fixture::FixtureMenuSource;
pub use image_search_client::{ImageSearchClient, ImageSearchConfig};
pub use nutrislice_client::{NutrisliceClient, NutrisliceConfig};

/// Something that can produce the weekly menu containing `date`
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Fetch the week of `meal_type` menus that contains `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the menu cannot be fetched or decoded
    async fn fetch_week(&self, meal_type: &str, date: NaiveDate) -> AppResult<MenuDocument>;
}

/// Something that can find a photo for a free-text query
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// First matching photo URL, `None` when the search came back empty
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status
    async fn search_image(&self, query: &str) -> AppResult<Option<String>>;
}

/// Build the HTTP client shared by all upstream calls
///
/// # Errors
///
/// Returns an internal error if the TLS backend cannot be initialized
pub fn build_http_client(timeout: Duration) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("menu-ranker/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")).with_source(e))
}

/// Classify a transport-level reqwest failure
pub(crate) fn transport_error(service: &str, error: reqwest::Error) -> AppError {
    if error.is_connect() || error.is_timeout() {
        AppError::external_unavailable(service, error.to_string()).with_source(error)
    } else {
        AppError::external_service(service, error.to_string()).with_source(error)
    }
}
