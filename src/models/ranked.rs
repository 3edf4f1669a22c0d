// ABOUTME: Derived values produced by the ranking pipeline for the presentation layer
// ABOUTME: RankedItem with ratio and dense rank, ArchivedItem, DisplayAsset, MenuCategory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Food category a view ranks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    /// Lunch entrées, ranked by protein-to-calorie ratio
    Entree,
    /// Breakfast items, ordered by calories then sugar
    Breakfast,
}

impl MenuCategory {
    /// Normalized category string as it appears upstream
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entree => "entree",
            Self::Breakfast => "breakfast",
        }
    }
}

/// What a card shows next to the nutrient values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayAsset {
    /// A photo URL (upstream, searched, or placeholder)
    Image {
        /// Photo URL
        url: String,
    },
    /// An emoji picked from the keyword table
    Emoji {
        /// The emoji
        symbol: String,
    },
}

/// A qualifying item after ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    /// Dense 1-based position in the sorted sequence
    pub rank: usize,
    /// Unique key within one ranking
    pub name: String,
    /// Energy in kcal, always > 0
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Sodium in milligrams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    /// Sugar in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    /// protein / calories
    pub protein_calorie_ratio: f64,
    /// Upstream photo, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Resolved display asset; filled in by the service, never by the pipeline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<DisplayAsset>,
}

/// An item with a photo whose nutrient values failed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedItem {
    /// Item name
    pub name: String,
    /// Energy in kcal as reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein in grams as reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Sodium in milligrams as reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    /// Upstream photo
    pub image_url: String,
}
