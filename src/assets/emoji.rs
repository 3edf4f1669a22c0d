// ABOUTME: Ordered keyword-to-emoji table for menu items without a photo
// ABOUTME: First matching keyword in declaration order wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Emoji used when no keyword matches
pub const DEFAULT_EMOJI: &str = "🍽️";

/// `(keyword, emoji)` pairs scanned in order against the lowercased name.
///
/// More specific keywords sit above the generic ones they contain
/// ("chicken nugget" before "chicken", "hot dog" before "dog").
pub const EMOJI_TABLE: &[(&str, &str)] = &[
    ("chicken nugget", "🍗"),
    ("chicken sandwich", "🥪"),
    ("burger", "🍔"),
    ("pizza", "🍕"),
    ("taco", "🌮"),
    ("nacho", "🌮"),
    ("burrito", "🌯"),
    ("wrap", "🌯"),
    ("quesadilla", "🫓"),
    ("hot dog", "🌭"),
    ("corn dog", "🌭"),
    ("sandwich", "🥪"),
    ("submarine", "🥪"),
    ("hoagie", "🥪"),
    ("spaghetti", "🍝"),
    ("pasta", "🍝"),
    ("mac and cheese", "🧀"),
    ("mac n cheese", "🧀"),
    ("mac & cheese", "🧀"),
    ("macaroni", "🧀"),
    ("salad", "🥗"),
    ("fried rice", "🍚"),
    ("rice bowl", "🍚"),
    ("teriyaki", "🍚"),
    ("noodle", "🍜"),
    ("ramen", "🍜"),
    ("fish stick", "🐟"),
    ("fish fillet", "🐟"),
    ("catfish", "🐟"),
    ("shrimp", "🍤"),
    ("chicken", "🍗"),
    ("turkey", "🦃"),
    ("beef", "🥩"),
    ("steak", "🥩"),
    ("pork", "🥓"),
    ("scrambled egg", "🍳"),
    ("eggs", "🍳"),
    ("egg and", "🍳"),
    ("egg &", "🍳"),
    ("omelet", "🍳"),
    ("pancake", "🥞"),
    ("waffle", "🧇"),
    ("bagel", "🥯"),
    ("biscuit", "🥐"),
    ("muffin", "🧁"),
    ("cereal", "🥣"),
    ("yogurt", "🥛"),
    ("soup", "🥣"),
];

/// Emoji for a menu item name
#[must_use]
pub fn emoji_for(name: &str) -> &'static str {
    let lowered = name.to_lowercase();
    EMOJI_TABLE
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map_or(DEFAULT_EMOJI, |(_, emoji)| emoji)
}
