// ABOUTME: Environment configuration for the menu ranker (upstream endpoints, policies, display)
// ABOUTME: Parses environment variables into a typed MenuConfig with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! All settings have defaults that reproduce the district lunch dashboard, so
//! `MenuConfig::from_env()` never fails on an empty environment. Present but
//! malformed values are rejected instead of silently ignored.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;
use tracing::info;

use crate::assets::AssetStrategy;
use crate::constants::{display, env_keys, image_search, menu_api, network};
use crate::dates::parse_timezone;
use crate::errors::{AppError, AppResult};
use crate::external::{ImageSearchConfig, NutrisliceConfig};
use crate::ranking::policy::parse_excluded_names;
use crate::ranking::{NutrientPolicy, RankingPolicy};

/// Upstream menu API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuApiConfig {
    /// Client settings (base URL and school slug)
    pub client: NutrisliceConfig,
    /// Meal type slug for the lunch views
    pub lunch_meal_type: String,
    /// Meal type slug for the breakfast view
    pub breakfast_meal_type: String,
}

/// Eligibility and ordering settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingConfig {
    /// Cards per top view
    pub top_n: usize,
    /// Missing/zero nutrient handling
    pub nutrient_policy: NutrientPolicy,
    /// Only rank items with an upstream photo
    pub require_image: bool,
    /// Lowercased name fragments skipped unconditionally
    pub excluded_names: Vec<String>,
}

/// Display asset settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    /// Strategy for items without an upstream photo
    pub strategy: AssetStrategy,
    /// Fixed fallback photo
    pub placeholder_url: String,
    /// Photo search settings
    pub image_search: ImageSearchConfig,
}

/// Complete menu ranker configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Upstream menu API
    pub menu_api: MenuApiConfig,
    /// Ranking policy
    pub ranking: RankingConfig,
    /// Display assets
    pub assets: AssetConfig,
    /// District-local timezone deciding "today"
    pub timezone: Tz,
    /// Per-request HTTP timeout
    pub http_timeout: Duration,
    /// Port of the JSON surface
    pub http_port: u16,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            menu_api: MenuApiConfig {
                client: NutrisliceConfig::default(),
                lunch_meal_type: menu_api::DEFAULT_LUNCH_MEAL_TYPE.to_owned(),
                breakfast_meal_type: menu_api::DEFAULT_BREAKFAST_MEAL_TYPE.to_owned(),
            },
            ranking: RankingConfig {
                top_n: display::DEFAULT_TOP_N,
                nutrient_policy: NutrientPolicy::Strict,
                require_image: false,
                excluded_names: parse_excluded_names(display::DEFAULT_EXCLUDED_NAMES),
            },
            assets: AssetConfig {
                strategy: AssetStrategy::Emoji,
                placeholder_url: display::DEFAULT_PLACEHOLDER_IMAGE_URL.to_owned(),
                image_search: ImageSearchConfig::default(),
            },
            timezone: chrono_tz::America::Chicago,
            http_timeout: Duration::from_secs(network::DEFAULT_HTTP_TIMEOUT_SECS),
            http_port: network::DEFAULT_HTTP_PORT,
        }
    }
}

impl MenuConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any variable is present but malformed
    pub fn from_env() -> AppResult<Self> {
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!("Menu configuration loaded from environment");
        Ok(config)
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any value is present but malformed
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let top_n: usize = parse_var(&lookup, env_keys::MENU_TOP_N, display::DEFAULT_TOP_N)?;
        if top_n == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                env_keys::MENU_TOP_N
            )));
        }

        let timeout_secs: u64 = parse_var(
            &lookup,
            env_keys::MENU_HTTP_TIMEOUT_SECS,
            network::DEFAULT_HTTP_TIMEOUT_SECS,
        )?;

        Ok(Self {
            menu_api: MenuApiConfig {
                client: NutrisliceConfig {
                    base_url: var_or(env_keys::MENU_API_BASE_URL, menu_api::DEFAULT_BASE_URL),
                    school: var_or(env_keys::MENU_SCHOOL, menu_api::DEFAULT_SCHOOL),
                },
                lunch_meal_type: var_or(
                    env_keys::MENU_MEAL_TYPE,
                    menu_api::DEFAULT_LUNCH_MEAL_TYPE,
                ),
                breakfast_meal_type: var_or(
                    env_keys::MENU_BREAKFAST_MEAL_TYPE,
                    menu_api::DEFAULT_BREAKFAST_MEAL_TYPE,
                ),
            },
            ranking: RankingConfig {
                top_n,
                nutrient_policy: parse_var(
                    &lookup,
                    env_keys::MENU_NUTRIENT_POLICY,
                    NutrientPolicy::Strict,
                )?,
                require_image: parse_bool(&lookup, env_keys::MENU_REQUIRE_IMAGE, false)?,
                excluded_names: parse_excluded_names(&var_or(
                    env_keys::MENU_EXCLUDED_NAMES,
                    display::DEFAULT_EXCLUDED_NAMES,
                )),
            },
            assets: AssetConfig {
                strategy: parse_var(&lookup, env_keys::MENU_ASSET_STRATEGY, AssetStrategy::Emoji)?,
                placeholder_url: var_or(
                    env_keys::MENU_PLACEHOLDER_IMAGE_URL,
                    display::DEFAULT_PLACEHOLDER_IMAGE_URL,
                ),
                image_search: ImageSearchConfig {
                    base_url: var_or(env_keys::IMAGE_SEARCH_BASE_URL, image_search::DEFAULT_BASE_URL),
                    api_key: lookup(env_keys::IMAGE_SEARCH_API_KEY)
                        .map(|key| key.trim().to_owned())
                        .filter(|key| !key.is_empty()),
                },
            },
            timezone: parse_timezone(&var_or(env_keys::MENU_TIMEZONE, display::DEFAULT_TIMEZONE))?,
            http_timeout: Duration::from_secs(timeout_secs),
            http_port: parse_var(&lookup, env_keys::HTTP_PORT, network::DEFAULT_HTTP_PORT)?,
        })
    }

    /// Ranking policy for the lunch views
    #[must_use]
    pub fn entree_policy(&self) -> RankingPolicy {
        self.policy_from(RankingPolicy::entrees())
    }

    /// Ranking policy for the breakfast view
    #[must_use]
    pub fn breakfast_policy(&self) -> RankingPolicy {
        self.policy_from(RankingPolicy::breakfast())
    }

    fn policy_from(&self, base: RankingPolicy) -> RankingPolicy {
        base.with_nutrients(self.ranking.nutrient_policy)
            .with_require_image(self.ranking.require_image)
            .with_excluded_names(self.ranking.excluded_names.clone())
    }

    /// One-line-per-setting summary for startup logs; never includes credentials
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Menu Ranker Configuration:\n\
             - Menu API: {}\n\
             - School: {}\n\
             - Meal Types: {} / {}\n\
             - Timezone: {}\n\
             - Top N: {}\n\
             - Nutrient Policy: {}\n\
             - Require Image: {}\n\
             - Excluded Names: {}\n\
             - Asset Strategy: {}\n\
             - Image Search: {}\n\
             - HTTP Timeout: {}s\n\
             - HTTP Port: {}",
            self.menu_api.client.base_url,
            self.menu_api.client.school,
            self.menu_api.lunch_meal_type,
            self.menu_api.breakfast_meal_type,
            self.timezone.name(),
            self.ranking.top_n,
            self.ranking.nutrient_policy,
            self.ranking.require_image,
            if self.ranking.excluded_names.is_empty() {
                "none".to_owned()
            } else {
                self.ranking.excluded_names.join(", ")
            },
            self.assets.strategy,
            if self.assets.image_search.api_key.is_some() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.http_timeout.as_secs(),
            self.http_port,
        )
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("invalid {key} value '{raw}': {e}"))),
    }
}

fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> AppResult<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim).map(str::to_lowercase) {
        None => Ok(default),
        Some(value) => match value.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::config(format!("invalid {key} value '{value}'"))),
        },
    }
}
