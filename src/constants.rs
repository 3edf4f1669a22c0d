// ABOUTME: System-wide constants and default configuration values for the menu ranker
// ABOUTME: Upstream endpoints, env variable names, display defaults, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults. Every value that an operator may reasonably change is
//! also exposed through [`crate::config::environment::MenuConfig`].

/// Upstream menu API defaults
pub mod menu_api {
    /// Weekly menu endpoint root for the district
    pub const DEFAULT_BASE_URL: &str = "https://leanderisd.api.nutrislice.com/menu/api/weeks";

    /// School slug in the endpoint path
    pub const DEFAULT_SCHOOL: &str = "glenn-high";

    /// Meal type slug for the lunch views
    pub const DEFAULT_LUNCH_MEAL_TYPE: &str = "lunch";

    /// Meal type slug for the breakfast view
    pub const DEFAULT_BREAKFAST_MEAL_TYPE: &str = "breakfast";

    /// Service label used in error messages and logs
    pub const SERVICE_NAME: &str = "Nutrislice";
}

/// Image search defaults
pub mod image_search {
    /// Photo search endpoint
    pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com/search/photos";

    /// Service label used in error messages and logs
    pub const SERVICE_NAME: &str = "Image search";
}

/// Ranking and display defaults
pub mod display {
    /// Number of cards shown by the top views
    pub const DEFAULT_TOP_N: usize = 3;

    /// Fixed fallback image when no real image is available or resolvable
    pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str =
        "https://via.placeholder.com/300x200.png?text=No+Image";

    /// District-local timezone used to decide which week to fetch
    pub const DEFAULT_TIMEZONE: &str = "America/Chicago";

    /// Name fragments skipped unconditionally (comma separated)
    pub const DEFAULT_EXCLUDED_NAMES: &str = "enchilada";

    /// Name used when the upstream food record has none
    pub const UNKNOWN_ITEM_NAME: &str = "Unknown Item";
}

/// Network defaults
pub mod network {
    /// Per-request timeout applied to the shared HTTP client
    pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

    /// Port for the JSON surface
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Environment variable names
pub mod env_keys {
    /// Menu API root
    pub const MENU_API_BASE_URL: &str = "MENU_API_BASE_URL";
    /// School slug
    pub const MENU_SCHOOL: &str = "MENU_SCHOOL";
    /// Lunch meal type slug
    pub const MENU_MEAL_TYPE: &str = "MENU_MEAL_TYPE";
    /// Breakfast meal type slug
    pub const MENU_BREAKFAST_MEAL_TYPE: &str = "MENU_BREAKFAST_MEAL_TYPE";
    /// IANA timezone name
    pub const MENU_TIMEZONE: &str = "MENU_TIMEZONE";
    /// Cards per top view
    pub const MENU_TOP_N: &str = "MENU_TOP_N";
    /// `strict` or `coerce`
    pub const MENU_NUTRIENT_POLICY: &str = "MENU_NUTRIENT_POLICY";
    /// Require an upstream image to rank
    pub const MENU_REQUIRE_IMAGE: &str = "MENU_REQUIRE_IMAGE";
    /// Comma separated excluded name fragments
    pub const MENU_EXCLUDED_NAMES: &str = "MENU_EXCLUDED_NAMES";
    /// `placeholder`, `emoji` or `image-search`
    pub const MENU_ASSET_STRATEGY: &str = "MENU_ASSET_STRATEGY";
    /// Placeholder image URL
    pub const MENU_PLACEHOLDER_IMAGE_URL: &str = "MENU_PLACEHOLDER_IMAGE_URL";
    /// Image search endpoint
    pub const IMAGE_SEARCH_BASE_URL: &str = "IMAGE_SEARCH_BASE_URL";
    /// Image search bearer credential
    pub const IMAGE_SEARCH_API_KEY: &str = "IMAGE_SEARCH_API_KEY";
    /// HTTP client timeout
    pub const MENU_HTTP_TIMEOUT_SECS: &str = "MENU_HTTP_TIMEOUT_SECS";
    /// JSON surface port
    pub const HTTP_PORT: &str = "HTTP_PORT";
}

/// Service names for structured logging
pub mod service_names {
    /// Binary / service name
    pub const MENU_RANKER: &str = "menu-ranker";
}
