// ABOUTME: Photo search client used to find a picture for menu items without an upstream image
// ABOUTME: Bearer-authenticated GET; first result's src.regular is the photo URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{transport_error, ImageSearch};
use crate::constants::image_search::{DEFAULT_BASE_URL, SERVICE_NAME};
use crate::errors::{AppError, AppResult};

/// Photo search configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSearchConfig {
    /// Search endpoint
    pub base_url: String,
    /// Bearer credential; without one the search is never attempted
    pub api_key: Option<String>,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PhotoSearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    #[serde(default)]
    src: Option<PhotoSource>,
}

#[derive(Debug, Deserialize)]
struct PhotoSource {
    #[serde(default)]
    regular: Option<String>,
}

/// Photo search client
pub struct ImageSearchClient {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl ImageSearchClient {
    /// Create a client; `None` when no credential is configured
    #[must_use]
    pub fn new(config: ImageSearchConfig, http_client: reqwest::Client) -> Option<Self> {
        let api_key = config.api_key.filter(|key| !key.trim().is_empty())?;
        Some(Self {
            base_url: config.base_url,
            api_key,
            http_client,
        })
    }
}

#[async_trait]
impl ImageSearch for ImageSearchClient {
    async fn search_image(&self, query: &str) -> AppResult<Option<String>> {
        let response = self
            .http_client
            .get(&self.base_url)
            .bearer_auth(&self.api_key)
            .query(&[("query", query), ("per_page", "1")])
            .send()
            .await
            .map_err(|e| transport_error(SERVICE_NAME, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {status}"),
            ));
        }

        let body: PhotoSearchResponse = response.json().await.map_err(|e| {
            AppError::serialization(format!("{SERVICE_NAME}: JSON parse error: {e}"))
        })?;

        let url = body
            .photos
            .into_iter()
            .next()
            .and_then(|photo| photo.src)
            .and_then(|src| src.regular)
            .filter(|url| !url.trim().is_empty());
        debug!(query, found = url.is_some(), "Image search finished");

        Ok(url)
    }
}
