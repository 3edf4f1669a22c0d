// ABOUTME: Data models for the upstream menu document and the derived ranked views
// ABOUTME: Re-exports MenuDocument, Food, RankedItem, ArchivedItem and DisplayAsset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - [`menu`]: the raw weekly menu document exactly as the Nutrislice API
//!   returns it. Every field is optional because the upstream omits freely.
//! - [`ranked`]: values produced by the ranking pipeline and handed to the
//!   presentation layer.

/// Raw upstream menu document
pub mod menu;
/// Ranked items, archive entries and display assets
pub mod ranked;

pub use menu::{Food, MenuDay, MenuDocument, MenuEntry, NutritionInfo};
pub use ranked::{ArchivedItem, DisplayAsset, MenuCategory, RankedItem};
