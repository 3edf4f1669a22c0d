// ABOUTME: The ranking pipeline turning a weekly menu document into ranked items and an archive
// ABOUTME: Flatten, filter, name-keyed last-wins dedupe, ratio, stable sort, dense rank, search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::policy::{RankingPolicy, SortPolicy};
use crate::models::{ArchivedItem, Food, MenuDocument, RankedItem};

/// Ranked items plus the archive, built fresh for every request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingOutcome {
    /// Qualifying items in rank order
    pub ranked: Vec<RankedItem>,
    /// Items with a photo that failed the nutrient guard
    pub archive: Vec<ArchivedItem>,
}

impl RankingOutcome {
    /// The first `n` ranked items
    #[must_use]
    pub fn top(&self, n: usize) -> &[RankedItem] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Ranked items whose name contains `query`, case-insensitively, in rank order
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&RankedItem> {
        let needle = query.to_lowercase();
        self.ranked
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Whether nothing qualified for ranking
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Name-keyed container: re-inserting a key replaces the value in place
struct NameKeyed<T> {
    positions: HashMap<String, usize>,
    entries: Vec<T>,
}

impl<T> NameKeyed<T> {
    fn new() -> Self {
        Self {
            positions: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn upsert(&mut self, name: &str, value: T) {
        if let Some(&position) = self.positions.get(name) {
            self.entries[position] = value;
        } else {
            self.positions.insert(name.to_owned(), self.entries.len());
            self.entries.push(value);
        }
    }

    fn into_values(self) -> Vec<T> {
        self.entries
    }
}

/// Run the ranking pipeline over a weekly menu document
#[must_use]
pub fn rank_menu(document: &MenuDocument, policy: &RankingPolicy) -> RankingOutcome {
    let target = policy.category.as_str();
    let mut ranked: NameKeyed<RankedItem> = NameKeyed::new();
    let mut archive: NameKeyed<ArchivedItem> = NameKeyed::new();

    for food in document.foods() {
        if food.normalized_category() != target {
            continue;
        }

        let name = food.display_name();
        if policy.is_excluded(name) {
            debug!(item = name, "Skipping excluded menu item");
            continue;
        }

        let image = food.image();
        if policy.require_image && image.is_none() {
            continue;
        }

        let nutrition = food.nutrition();
        match policy.guard(&nutrition) {
            Some(values) => ranked.upsert(
                name,
                RankedItem {
                    rank: 0,
                    name: name.to_owned(),
                    calories: values.calories,
                    protein: values.protein,
                    sodium: nutrition.mg_sodium,
                    sugar: values.sugar,
                    protein_calorie_ratio: values.protein / values.calories,
                    image_url: image.map(str::to_owned),
                    asset: None,
                },
            ),
            None => {
                if let Some(url) = image {
                    archive.upsert(name, archived(food, url));
                }
            }
        }
    }

    let mut ranked = ranked.into_values();
    sort_items(&mut ranked, policy.sort_policy());
    for (position, item) in ranked.iter_mut().enumerate() {
        item.rank = position + 1;
    }

    let outcome = RankingOutcome {
        ranked,
        archive: archive.into_values(),
    };
    debug!(
        category = target,
        ranked = outcome.ranked.len(),
        archived = outcome.archive.len(),
        "Ranked menu"
    );
    outcome
}

fn archived(food: &Food, url: &str) -> ArchivedItem {
    let nutrition = food.nutrition();
    ArchivedItem {
        name: food.display_name().to_owned(),
        calories: nutrition.calories,
        protein: nutrition.g_protein,
        sodium: nutrition.mg_sodium,
        image_url: url.to_owned(),
    }
}

// `sort_by` is stable, so ties keep container order
fn sort_items(items: &mut [RankedItem], policy: SortPolicy) {
    match policy {
        SortPolicy::RatioDescending => {
            items.sort_by(|a, b| b.protein_calorie_ratio.total_cmp(&a.protein_calorie_ratio));
        }
        SortPolicy::CaloriesThenSugarAscending => items.sort_by(|a, b| {
            a.calories
                .total_cmp(&b.calories)
                .then_with(|| a.sugar.unwrap_or(0.0).total_cmp(&b.sugar.unwrap_or(0.0)))
        }),
    }
}
