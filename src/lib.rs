// ABOUTME: Main library entry point for the school menu ranker
// ABOUTME: Fetches a district weekly menu, ranks entrées by protein per calorie, and serves the views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Menu Ranker
//!
//! Pulls the weekly lunch (or breakfast) menu for one school from the
//! district's Nutrislice API, keeps the items that qualify, and orders them
//! so the most protein-dense entrées come first.
//!
//! ## Architecture
//!
//! - **Models**: upstream menu documents and ranked/archived items
//! - **Ranking**: pure eligibility, dedupe, and ordering over a menu document
//! - **External**: menu and photo search clients behind traits
//! - **Assets**: emoji or photo chosen for each displayed card
//! - **Service**: one report per view and page load
//! - **Routes / Formatters**: JSON and text presentation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use menu_ranker::config::MenuConfig;
//! use menu_ranker::errors::AppResult;
//! use menu_ranker::service::{MenuService, MenuView};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = Arc::new(MenuConfig::from_env()?);
//!     let service = MenuService::from_config(config)?;
//!     let report = service.build_report(&MenuView::Top, None, None).await?;
//!     for item in &report.items {
//!         println!("{} - {}", item.rank, item.name);
//!     }
//!     Ok(())
//! }
//! ```

/// Display asset (emoji or photo) resolution
pub mod assets;

/// Configuration management
pub mod config;

/// Application constants and defaults
pub mod constants;

/// District-local date helpers
pub mod dates;

/// Unified error handling
pub mod errors;

/// External API clients
pub mod external;

/// Plain-text report rendering
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Menu and ranking data models
pub mod models;

/// Eligibility, dedupe, and ordering
pub mod ranking;

/// HTTP routes
pub mod routes;

/// View orchestration
pub mod service;
