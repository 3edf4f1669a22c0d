// ABOUTME: Menu source that reads a saved weekly menu JSON document from disk
// ABOUTME: Used for offline runs (--fixture) and reproducible rankings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

use super::MenuSource;
use crate::errors::AppResult;
use crate::models::MenuDocument;

/// Reads the same document for every meal type and date
#[derive(Debug, Clone)]
pub struct FixtureMenuSource {
    path: PathBuf,
}

impl FixtureMenuSource {
    /// Source backed by the JSON file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MenuSource for FixtureMenuSource {
    async fn fetch_week(&self, meal_type: &str, date: NaiveDate) -> AppResult<MenuDocument> {
        info!(path = %self.path.display(), meal_type, %date, "Loading menu fixture");
        let text = tokio::fs::read_to_string(&self.path).await?;
        MenuDocument::from_json(&text)
    }
}
