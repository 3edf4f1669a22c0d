// ABOUTME: Tests for environment-driven configuration parsing and policy derivation
// ABOUTME: Defaults, overrides, malformed values, and process environment loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use menu_ranker::assets::AssetStrategy;
use menu_ranker::config::MenuConfig;
use menu_ranker::constants::env_keys;
use menu_ranker::errors::ErrorCode;
use menu_ranker::models::MenuCategory;
use menu_ranker::ranking::NutrientPolicy;
use serial_test::serial;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_empty_environment_uses_defaults() {
    let config = MenuConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config, MenuConfig::default());
    assert_eq!(config.menu_api.client.school, "glenn-high");
    assert_eq!(config.menu_api.lunch_meal_type, "lunch");
    assert_eq!(config.ranking.top_n, 3);
    assert_eq!(config.ranking.nutrient_policy, NutrientPolicy::Strict);
    assert_eq!(config.ranking.excluded_names, vec!["enchilada".to_owned()]);
    assert_eq!(config.assets.strategy, AssetStrategy::Emoji);
    assert_eq!(config.timezone, chrono_tz::America::Chicago);
    assert_eq!(config.http_timeout, Duration::from_secs(30));
}

#[test]
fn test_overrides_are_applied() {
    let config = MenuConfig::from_lookup(lookup(&[
        (env_keys::MENU_SCHOOL, "cedar-park-high"),
        (env_keys::MENU_TOP_N, "5"),
        (env_keys::MENU_NUTRIENT_POLICY, "coerce"),
        (env_keys::MENU_REQUIRE_IMAGE, "true"),
        (env_keys::MENU_EXCLUDED_NAMES, "Enchilada, Corn Dog ,"),
        (env_keys::MENU_ASSET_STRATEGY, "image-search"),
        (env_keys::IMAGE_SEARCH_API_KEY, "abc123"),
        (env_keys::MENU_TIMEZONE, "America/New_York"),
        (env_keys::MENU_HTTP_TIMEOUT_SECS, "10"),
        (env_keys::HTTP_PORT, "9090"),
    ]))
    .unwrap();

    assert_eq!(config.menu_api.client.school, "cedar-park-high");
    assert_eq!(config.ranking.top_n, 5);
    assert_eq!(config.ranking.nutrient_policy, NutrientPolicy::CoerceZero);
    assert!(config.ranking.require_image);
    assert_eq!(
        config.ranking.excluded_names,
        vec!["enchilada".to_owned(), "corn dog".to_owned()]
    );
    assert_eq!(config.assets.strategy, AssetStrategy::ImageSearch);
    assert_eq!(config.assets.image_search.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.timezone, chrono_tz::America::New_York);
    assert_eq!(config.http_timeout, Duration::from_secs(10));
    assert_eq!(config.http_port, 9090);
}

#[test]
fn test_empty_exclusion_list_disables_exclusions() {
    let config = MenuConfig::from_lookup(lookup(&[(env_keys::MENU_EXCLUDED_NAMES, "")])).unwrap();

    assert!(config.ranking.excluded_names.is_empty());
    assert!(!config.entree_policy().is_excluded("Cheese Enchiladas"));
}

#[test]
fn test_policies_carry_ranking_settings() {
    let config = MenuConfig::from_lookup(lookup(&[
        (env_keys::MENU_NUTRIENT_POLICY, "coerce_zero"),
        (env_keys::MENU_REQUIRE_IMAGE, "1"),
    ]))
    .unwrap();

    let entrees = config.entree_policy();
    assert_eq!(entrees.category, MenuCategory::Entree);
    assert_eq!(entrees.nutrients, NutrientPolicy::CoerceZero);
    assert!(entrees.require_image);

    let breakfast = config.breakfast_policy();
    assert_eq!(breakfast.category, MenuCategory::Breakfast);
    assert!(breakfast.require_image);
}

#[test]
fn test_malformed_values_are_rejected() {
    for (key, value) in [
        (env_keys::MENU_TOP_N, "three"),
        (env_keys::MENU_TOP_N, "0"),
        (env_keys::MENU_NUTRIENT_POLICY, "lenient"),
        (env_keys::MENU_REQUIRE_IMAGE, "sometimes"),
        (env_keys::MENU_ASSET_STRATEGY, "clipart"),
        (env_keys::MENU_TIMEZONE, "Mars/Olympus"),
        (env_keys::HTTP_PORT, "70000"),
    ] {
        let error = MenuConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{key}={value}");
    }
}

#[test]
fn test_blank_api_key_counts_as_missing() {
    let config =
        MenuConfig::from_lookup(lookup(&[(env_keys::IMAGE_SEARCH_API_KEY, "   ")])).unwrap();

    assert!(config.assets.image_search.api_key.is_none());
    assert!(config.summary().contains("Image Search: Disabled"));
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    env::set_var(env_keys::MENU_SCHOOL, "vista-ridge-high");
    env::set_var(env_keys::MENU_TOP_N, "4");

    let config = MenuConfig::from_env().unwrap();

    env::remove_var(env_keys::MENU_SCHOOL);
    env::remove_var(env_keys::MENU_TOP_N);

    assert_eq!(config.menu_api.client.school, "vista-ridge-high");
    assert_eq!(config.ranking.top_n, 4);
}
