// ABOUTME: Ranking policies deciding which menu items qualify and how they are ordered
// ABOUTME: NutrientPolicy (strict vs coerce-to-zero), name exclusions, and sort policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::display::DEFAULT_EXCLUDED_NAMES;
use crate::errors::AppError;
use crate::models::{MenuCategory, NutritionInfo};

/// How missing or zero nutrient values are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientPolicy {
    /// Missing or non-positive values drop the item from ranking
    #[default]
    Strict,
    /// Missing values count as zero; calories must still be positive
    CoerceZero,
}

impl FromStr for NutrientPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" | "reject" => Ok(Self::Strict),
            "coerce" | "coerce_zero" | "coerce-zero" => Ok(Self::CoerceZero),
            other => Err(AppError::config(format!(
                "unknown nutrient policy '{other}' (expected 'strict' or 'coerce')"
            ))),
        }
    }
}

impl fmt::Display for NutrientPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::CoerceZero => write!(f, "coerce"),
        }
    }
}

/// Ordering applied to the qualifying items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Highest protein-to-calorie ratio first
    RatioDescending,
    /// Fewest calories first, then least sugar
    CaloriesThenSugarAscending,
}

/// Nutrient values an item ranks with, after the guard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardedNutrients {
    /// Energy in kcal, > 0
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Sugar in grams, only tracked for breakfast
    pub sugar: Option<f64>,
}

/// Everything the pipeline needs to decide eligibility and order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingPolicy {
    /// Category that participates
    pub category: MenuCategory,
    /// Missing/zero nutrient handling
    pub nutrients: NutrientPolicy,
    /// Only rank items that carry an upstream photo
    pub require_image: bool,
    /// Lowercased name fragments that are skipped unconditionally
    pub excluded_names: Vec<String>,
}

impl RankingPolicy {
    /// Lunch entrées with the default guard and exclusions
    #[must_use]
    pub fn entrees() -> Self {
        Self {
            category: MenuCategory::Entree,
            nutrients: NutrientPolicy::Strict,
            require_image: false,
            excluded_names: parse_excluded_names(DEFAULT_EXCLUDED_NAMES),
        }
    }

    /// Breakfast items with the default guard and exclusions
    #[must_use]
    pub fn breakfast() -> Self {
        Self {
            category: MenuCategory::Breakfast,
            ..Self::entrees()
        }
    }

    /// Replace the nutrient policy
    #[must_use]
    pub const fn with_nutrients(mut self, nutrients: NutrientPolicy) -> Self {
        self.nutrients = nutrients;
        self
    }

    /// Replace the excluded name fragments
    #[must_use]
    pub fn with_excluded_names(mut self, names: Vec<String>) -> Self {
        self.excluded_names = names
            .into_iter()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        self
    }

    /// Require an upstream photo to rank
    #[must_use]
    pub const fn with_require_image(mut self, require_image: bool) -> Self {
        self.require_image = require_image;
        self
    }

    /// Ordering for this policy's category
    #[must_use]
    pub const fn sort_policy(&self) -> SortPolicy {
        match self.category {
            MenuCategory::Entree => SortPolicy::RatioDescending,
            MenuCategory::Breakfast => SortPolicy::CaloriesThenSugarAscending,
        }
    }

    /// Whether the item name contains an excluded fragment
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.excluded_names
            .iter()
            .any(|fragment| lowered.contains(fragment.as_str()))
    }

    /// Apply the nutrient guard; `None` means the item does not rank
    #[must_use]
    pub fn guard(&self, nutrition: &NutritionInfo) -> Option<GuardedNutrients> {
        match (self.category, self.nutrients) {
            (MenuCategory::Entree, NutrientPolicy::Strict) => {
                let calories = positive(nutrition.calories)?;
                let protein = positive(nutrition.g_protein)?;
                Some(GuardedNutrients {
                    calories,
                    protein,
                    sugar: nutrition.g_sugar,
                })
            }
            (MenuCategory::Breakfast, NutrientPolicy::Strict) => {
                let calories = positive(nutrition.calories)?;
                let sugar = nutrition.g_sugar.filter(|value| value.is_finite())?;
                Some(GuardedNutrients {
                    calories,
                    protein: nutrition.g_protein.unwrap_or(0.0),
                    sugar: Some(sugar),
                })
            }
            (category, NutrientPolicy::CoerceZero) => {
                let calories = positive(Some(nutrition.calories.unwrap_or(0.0)))?;
                let sugar = match category {
                    MenuCategory::Breakfast => Some(nutrition.g_sugar.unwrap_or(0.0)),
                    MenuCategory::Entree => nutrition.g_sugar,
                };
                Some(GuardedNutrients {
                    calories,
                    protein: nutrition.g_protein.unwrap_or(0.0),
                    sugar,
                })
            }
        }
    }
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self::entrees()
    }
}

/// Split a comma separated exclusion list into lowercased fragments
#[must_use]
pub fn parse_excluded_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
