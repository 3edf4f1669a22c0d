// ABOUTME: Plain-text card rendering of menu reports for the command-line view
// ABOUTME: Rank, name, protein, calories, sodium (or N/A), ratio to 4 decimals, and asset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write;

use crate::models::{ArchivedItem, DisplayAsset, RankedItem};
use crate::service::MenuReport;

/// Render a nutrient value without a trailing `.0` for whole numbers
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn format_optional(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "N/A".to_owned(), |v| format!("{}{unit}", format_amount(v)))
}

fn format_asset(asset: Option<&DisplayAsset>) -> String {
    match asset {
        Some(DisplayAsset::Emoji { symbol }) => symbol.clone(),
        Some(DisplayAsset::Image { url }) => url.clone(),
        None => String::new(),
    }
}

/// One ranked card
#[must_use]
pub fn render_card(item: &RankedItem) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "{} - {}", item.rank, item.name);
    let asset = format_asset(item.asset.as_ref());
    if !asset.is_empty() {
        let _ = writeln!(card, "  {asset}");
    }
    let _ = writeln!(card, "  Protein: {}g", format_amount(item.protein));
    let _ = writeln!(card, "  Calories: {}", format_amount(item.calories));
    let _ = writeln!(card, "  Sodium: {}", format_optional(item.sodium, " mg"));
    if let Some(sugar) = item.sugar {
        let _ = writeln!(card, "  Sugar: {}g", format_amount(sugar));
    }
    let _ = writeln!(
        card,
        "  Protein-to-Calorie Ratio: {:.4}",
        item.protein_calorie_ratio
    );
    card
}

/// One archive card
#[must_use]
pub fn render_archived(item: &ArchivedItem) -> String {
    format!(
        "{}\n  {}\n  Protein: {}\n  Calories: {}\n  Sodium: {}\n",
        item.name,
        item.image_url,
        format_optional(item.protein, "g"),
        format_optional(item.calories, ""),
        format_optional(item.sodium, " mg"),
    )
}

/// Whole report: heading, then cards separated by blank lines
#[must_use]
pub fn render_report(report: &MenuReport) -> String {
    let mut out = String::new();
    let heading = match report.view.as_str() {
        "top" => format!("Top {} High-Protein Entrées", report.items.len()),
        "breakfast" => format!("Top {} Light Breakfast Items", report.items.len()),
        "archive" => "Archived Items".to_owned(),
        "search" => format!(
            "Search results for \"{}\"",
            report.query.as_deref().unwrap_or_default()
        ),
        _ => "All Ranked Entrées".to_owned(),
    };
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out, "Menu for {}", report.formatted_date);

    if report.view == "archive" {
        if report.archive.is_empty() {
            let _ = writeln!(out, "\nNo archived items.");
        }
        for item in &report.archive {
            let _ = write!(out, "\n{}", render_archived(item));
        }
        return out;
    }

    if report.items.is_empty() {
        let _ = writeln!(out, "\nNo matching items.");
    }
    for item in &report.items {
        let _ = write!(out, "\n{}", render_card(item));
    }
    out
}
