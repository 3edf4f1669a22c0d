// ABOUTME: Serde contract for the Nutrislice weekly menu document
// ABOUTME: days -> menu_items -> food with rounded nutrition info, all fields optional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::display::UNKNOWN_ITEM_NAME;

/// Weekly menu document returned by the menu API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDocument {
    /// Days of the requested week, in API order
    #[serde(default)]
    pub days: Vec<MenuDay>,
}

/// One day of the weekly menu
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDay {
    /// ISO date of the day, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Menu rows for the day, in API order
    #[serde(default)]
    pub menu_items: Vec<MenuEntry>,
}

/// A menu row. Section headers and blank rows carry no food record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Wrapped food record
    #[serde(
        default,
        deserialize_with = "lenient_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub food: Option<Food>,
}

/// Food record attached to a menu row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Food {
    /// Display name
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Free-text category ("entree", "Breakfast", ...)
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub food_category: Option<String>,
    /// Upstream photo
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    /// Rounded nutrient values
    #[serde(
        default,
        deserialize_with = "lenient_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub rounded_nutrition_info: Option<NutritionInfo>,
}

/// Rounded nutrient values; any of them may be absent or null
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    /// Energy in kcal
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(default, deserialize_with = "lenient_number")]
    pub g_protein: Option<f64>,
    /// Sodium in milligrams
    #[serde(default, deserialize_with = "lenient_number")]
    pub mg_sodium: Option<f64>,
    /// Sugar in grams
    #[serde(default, deserialize_with = "lenient_number")]
    pub g_sugar: Option<f64>,
}

// Per-item fields decode through `Value`; a value of the wrong type becomes
// `None` and only affects its own record.

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|number| number.is_finite()))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

fn lenient_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

impl MenuDocument {
    /// Parse a document from its JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text is not a menu document
    pub fn from_json(text: &str) -> crate::errors::AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// All food records across all days, in API order
    pub fn foods(&self) -> impl Iterator<Item = &Food> {
        self.days
            .iter()
            .flat_map(|day| day.menu_items.iter())
            .filter_map(|entry| entry.food.as_ref())
    }
}

impl Food {
    /// Category trimmed and lowercased; empty when absent
    #[must_use]
    pub fn normalized_category(&self) -> String {
        self.food_category
            .as_deref()
            .map(|category| category.trim().to_lowercase())
            .unwrap_or_default()
    }

    /// Display name, falling back to a generic label
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_ITEM_NAME)
    }

    /// Upstream image URL when present and non-blank
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Nutrient values, all absent when the record has none
    #[must_use]
    pub fn nutrition(&self) -> NutritionInfo {
        self.rounded_nutrition_info.unwrap_or_default()
    }
}
