// ABOUTME: Menu ranking pipeline: filter, deduplicate, score, sort, and rank menu items
// ABOUTME: Pure functions over a parsed MenuDocument, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Menu Ranking
//!
//! The pipeline flattens every food record of a weekly menu, keeps the ones in
//! the target category that pass the nutrient guard, deduplicates them by name
//! (last occurrence wins), scores them by protein-to-calorie ratio and assigns a
//! dense 1-based rank. Items with a photo that fail the guard go to the archive.
//!
//! ```rust
//! use menu_ranker::models::MenuDocument;
//! use menu_ranker::ranking::{rank_menu, RankingPolicy};
//!
//! let doc = MenuDocument::from_json(r#"{"days":[{"menu_items":[
//!     {"food":{"name":"Chicken Bowl","food_category":"entree",
//!              "rounded_nutrition_info":{"calories":400,"g_protein":40}}}
//! ]}]}"#).unwrap();
//!
//! let outcome = rank_menu(&doc, &RankingPolicy::entrees());
//! assert_eq!(outcome.ranked[0].rank, 1);
//! ```

/// Ranking pipeline and its outcome
pub mod pipeline;
/// Category, nutrient guard, and name exclusion policies
pub mod policy;

pub use pipeline::{rank_menu, RankingOutcome};
pub use policy::{NutrientPolicy, RankingPolicy, SortPolicy};
