// ABOUTME: Menu view route handlers (top, all, search, archive, breakfast)
// ABOUTME: Parses query parameters and maps service errors onto HTTP responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::dates::parse_date;
use crate::errors::AppResult;
use crate::service::{MenuReport, MenuService, MenuView};

/// Query parameters shared by every menu view
#[derive(Debug, Default, Deserialize)]
struct MenuQuery {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    n: Option<usize>,
}

/// Query parameters for the search view
#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    date: Option<String>,
}

fn requested_date(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_date)
        .transpose()
}

/// Menu routes
pub struct MenuRoutes;

impl MenuRoutes {
    /// Create all menu view routes
    pub fn routes(service: Arc<MenuService>) -> Router {
        Router::new()
            .route("/menu/top", get(Self::handle_top))
            .route("/menu/all", get(Self::handle_all))
            .route("/menu/search", get(Self::handle_search))
            .route("/menu/archive", get(Self::handle_archive))
            .route("/menu/breakfast", get(Self::handle_breakfast))
            .with_state(service)
    }

    async fn report(
        service: &MenuService,
        view: MenuView,
        query: &MenuQuery,
    ) -> AppResult<Json<MenuReport>> {
        let date = requested_date(query.date.as_deref())?;
        let report = service.build_report(&view, date, query.n).await?;
        Ok(Json(report))
    }

    async fn handle_top(
        State(service): State<Arc<MenuService>>,
        Query(query): Query<MenuQuery>,
    ) -> AppResult<Json<MenuReport>> {
        Self::report(&service, MenuView::Top, &query).await
    }

    async fn handle_all(
        State(service): State<Arc<MenuService>>,
        Query(query): Query<MenuQuery>,
    ) -> AppResult<Json<MenuReport>> {
        Self::report(&service, MenuView::All, &query).await
    }

    async fn handle_archive(
        State(service): State<Arc<MenuService>>,
        Query(query): Query<MenuQuery>,
    ) -> AppResult<Json<MenuReport>> {
        Self::report(&service, MenuView::Archive, &query).await
    }

    async fn handle_breakfast(
        State(service): State<Arc<MenuService>>,
        Query(query): Query<MenuQuery>,
    ) -> AppResult<Json<MenuReport>> {
        Self::report(&service, MenuView::Breakfast, &query).await
    }

    async fn handle_search(
        State(service): State<Arc<MenuService>>,
        Query(query): Query<SearchQuery>,
    ) -> AppResult<Json<MenuReport>> {
        let date = requested_date(query.date.as_deref())?;
        let report = service
            .build_report(&MenuView::Search(query.q), date, None)
            .await?;
        Ok(Json(report))
    }
}
