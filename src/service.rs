// ABOUTME: Menu service orchestrating fetch, ranking, and display asset resolution per view
// ABOUTME: Turns upstream failures and empty qualifying sets into terminal AppErrors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Menu Service
//!
//! One call to [`MenuService::build_report`] is one page load: a single menu
//! request, a fresh ranking, and asset resolution for the cards that will
//! actually be shown. Nothing is cached between calls.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assets::AssetResolver;
use crate::config::MenuConfig;
use crate::dates::{display_date, today_in};
use crate::errors::{AppError, AppResult};
use crate::external::{
    build_http_client, ImageSearch, ImageSearchClient, MenuSource, NutrisliceClient,
};
use crate::models::{ArchivedItem, MenuCategory, RankedItem};
use crate::ranking::{rank_menu, RankingOutcome};

/// Which slice of the ranking a caller wants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuView {
    /// Top N entrées
    Top,
    /// Every ranked entrée
    All,
    /// Ranked entrées whose name contains the query
    Search(String),
    /// Entrées with a photo that failed the nutrient guard
    Archive,
    /// Top N breakfast items, fewest calories first
    Breakfast,
}

impl MenuView {
    /// Stable view name used in reports and logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::All => "all",
            Self::Search(_) => "search",
            Self::Archive => "archive",
            Self::Breakfast => "breakfast",
        }
    }

    /// Category the view ranks
    #[must_use]
    pub const fn category(&self) -> MenuCategory {
        match self {
            Self::Breakfast => MenuCategory::Breakfast,
            _ => MenuCategory::Entree,
        }
    }
}

impl fmt::Display for MenuView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything the presentation layer needs for one view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuReport {
    /// View name
    pub view: String,
    /// Date the week was requested for
    pub menu_date: NaiveDate,
    /// Human label for `menu_date`
    pub formatted_date: String,
    /// Search query, for search views
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Number of items that qualified for ranking
    pub total_ranked: usize,
    /// Cards to show, in rank order
    pub items: Vec<RankedItem>,
    /// Archive entries, for the archive view
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub archive: Vec<ArchivedItem>,
}

/// Fetches, ranks, and decorates menu views
pub struct MenuService {
    config: Arc<MenuConfig>,
    source: Arc<dyn MenuSource>,
    assets: AssetResolver,
}

impl MenuService {
    /// Create a service from its parts
    pub fn new(config: Arc<MenuConfig>, source: Arc<dyn MenuSource>, assets: AssetResolver) -> Self {
        Self {
            config,
            source,
            assets,
        }
    }

    /// Create a service talking to the configured upstream APIs
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: Arc<MenuConfig>) -> AppResult<Self> {
        let http = build_http_client(config.http_timeout)?;
        let source: Arc<dyn MenuSource> = Arc::new(NutrisliceClient::new(
            config.menu_api.client.clone(),
            http.clone(),
        ));
        Ok(Self::with_source(config, source, http))
    }

    /// Create a service over a custom menu source, with the configured asset strategy
    #[must_use]
    pub fn with_source(
        config: Arc<MenuConfig>,
        source: Arc<dyn MenuSource>,
        http: reqwest::Client,
    ) -> Self {
        let image_search = ImageSearchClient::new(config.assets.image_search.clone(), http)
            .map(|client| Arc::new(client) as Arc<dyn ImageSearch>);
        let assets = AssetResolver::new(
            config.assets.strategy,
            config.assets.placeholder_url.clone(),
            image_search,
        );
        Self::new(config, source, assets)
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Date used when the caller does not pick one
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        today_in(self.config.timezone)
    }

    /// Fetch and rank the week containing `date` for `category`
    ///
    /// # Errors
    ///
    /// Returns an error if the menu cannot be fetched or decoded
    pub async fn rank(&self, category: MenuCategory, date: NaiveDate) -> AppResult<RankingOutcome> {
        let (meal_type, policy) = match category {
            MenuCategory::Entree => (
                self.config.menu_api.lunch_meal_type.as_str(),
                self.config.entree_policy(),
            ),
            MenuCategory::Breakfast => (
                self.config.menu_api.breakfast_meal_type.as_str(),
                self.config.breakfast_policy(),
            ),
        };

        let document = self.source.fetch_week(meal_type, date).await?;
        Ok(rank_menu(&document, &policy))
    }

    /// Build the report for one view
    ///
    /// `top_n` overrides the configured card count for the top views.
    ///
    /// # Errors
    ///
    /// - upstream failures (terminal, no partial report)
    /// - `NoItems` when nothing qualified for a ranking view
    /// - invalid input for a zero `top_n`
    pub async fn build_report(
        &self,
        view: &MenuView,
        date: Option<NaiveDate>,
        top_n: Option<usize>,
    ) -> AppResult<MenuReport> {
        let top_n = top_n.unwrap_or(self.config.ranking.top_n);
        if top_n == 0 {
            return Err(AppError::invalid_input("top N must be at least 1"));
        }

        let date = date.unwrap_or_else(|| self.today());
        let outcome = self.rank(view.category(), date).await?;

        if outcome.is_empty() && *view != MenuView::Archive {
            warn!(view = %view, %date, "No qualifying items after filtering");
            return Err(AppError::no_items(view.name()));
        }

        let mut items: Vec<RankedItem> = match view {
            MenuView::Top | MenuView::Breakfast => outcome.top(top_n).to_vec(),
            MenuView::All => outcome.ranked.clone(),
            MenuView::Search(query) => outcome.search(query).into_iter().cloned().collect(),
            MenuView::Archive => Vec::new(),
        };
        self.assets.resolve_all(&mut items).await;

        let archive = if *view == MenuView::Archive {
            outcome.archive
        } else {
            Vec::new()
        };

        info!(
            view = %view,
            %date,
            ranked = outcome.ranked.len(),
            shown = items.len(),
            archived = archive.len(),
            "Built menu report"
        );

        Ok(MenuReport {
            view: view.name().to_owned(),
            menu_date: date,
            formatted_date: display_date(date),
            query: match view {
                MenuView::Search(query) => Some(query.clone()),
                _ => None,
            },
            total_ranked: outcome.ranked.len(),
            items,
            archive,
        })
    }
}
