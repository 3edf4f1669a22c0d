// ABOUTME: Nutrislice weekly menu API client for per-school, per-meal-type menus
// ABOUTME: Single GET per fetch; a non-success status is the only recognized failure signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrislice Weekly Menu Client
//!
//! Endpoint shape:
//! `{base_url}/school/{school}/menu-type/{meal_type}/{YYYY}/{MM}/{DD}/`
//!
//! The API answers with the whole week containing the date.
//!
//! ```rust,no_run
//! use menu_ranker::external::{build_http_client, MenuSource, NutrisliceClient, NutrisliceConfig};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let http = build_http_client(Duration::from_secs(30))?;
//! let client = NutrisliceClient::new(NutrisliceConfig::default(), http);
//! let today = chrono::Local::now().date_naive();
//! let week = client.fetch_week("lunch", today).await?;
//! println!("{} days", week.days.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::{transport_error, MenuSource};
use crate::constants::menu_api::{DEFAULT_BASE_URL, DEFAULT_SCHOOL, SERVICE_NAME};
use crate::dates::endpoint_segment;
use crate::errors::{AppError, AppResult};
use crate::models::MenuDocument;

/// Nutrislice client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutrisliceConfig {
    /// Weekly menu endpoint root (default: district endpoint)
    pub base_url: String,
    /// School slug
    pub school: String,
}

impl Default for NutrisliceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            school: DEFAULT_SCHOOL.to_owned(),
        }
    }
}

/// Nutrislice weekly menu client
pub struct NutrisliceClient {
    config: NutrisliceConfig,
    http_client: reqwest::Client,
}

impl NutrisliceClient {
    /// Create a client sharing an existing HTTP client
    #[must_use]
    pub const fn new(config: NutrisliceConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Full URL of the week containing `date`
    #[must_use]
    pub fn week_url(&self, meal_type: &str, date: NaiveDate) -> String {
        format!(
            "{}/school/{}/menu-type/{}/{}/",
            self.config.base_url.trim_end_matches('/'),
            self.config.school,
            meal_type,
            endpoint_segment(date)
        )
    }
}

#[async_trait]
impl MenuSource for NutrisliceClient {
    async fn fetch_week(&self, meal_type: &str, date: NaiveDate) -> AppResult<MenuDocument> {
        let url = self.week_url(meal_type, date);
        info!(%url, "Fetching weekly menu");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(SERVICE_NAME, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Menu API returned a failure status");
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {status} for {url}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(SERVICE_NAME, e))?;
        let document = MenuDocument::from_json(&body)?;
        debug!(days = document.days.len(), "Decoded weekly menu");

        Ok(document)
    }
}
