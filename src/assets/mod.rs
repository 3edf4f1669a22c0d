// ABOUTME: Display asset resolution for ranked menu items (photo, emoji, or placeholder)
// ABOUTME: Three mutually exclusive strategies; image search degrades to the placeholder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Display Assets
//!
//! An upstream photo always wins. For items without one, the configured
//! [`AssetStrategy`] decides what the card shows. The image search strategy
//! never fails a request: any error is logged and the placeholder is used.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::external::ImageSearch;
use crate::models::{DisplayAsset, RankedItem};

/// Ordered keyword-to-emoji lookup
pub mod emoji;

/// What to show for items without an upstream photo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetStrategy {
    /// Fixed placeholder photo
    Placeholder,
    /// Emoji from the keyword table
    #[default]
    Emoji,
    /// Photo search, placeholder on any failure
    ImageSearch,
}

impl FromStr for AssetStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "placeholder" => Ok(Self::Placeholder),
            "emoji" => Ok(Self::Emoji),
            "image-search" | "image_search" | "search" => Ok(Self::ImageSearch),
            other => Err(AppError::config(format!(
                "unknown asset strategy '{other}' (expected 'placeholder', 'emoji' or 'image-search')"
            ))),
        }
    }
}

impl fmt::Display for AssetStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder => write!(f, "placeholder"),
            Self::Emoji => write!(f, "emoji"),
            Self::ImageSearch => write!(f, "image-search"),
        }
    }
}

/// Resolves the display asset of ranked items
#[derive(Clone)]
pub struct AssetResolver {
    strategy: AssetStrategy,
    placeholder_url: String,
    image_search: Option<Arc<dyn ImageSearch>>,
}

impl AssetResolver {
    /// Create a resolver; `image_search` is only consulted by [`AssetStrategy::ImageSearch`]
    pub fn new(
        strategy: AssetStrategy,
        placeholder_url: impl Into<String>,
        image_search: Option<Arc<dyn ImageSearch>>,
    ) -> Self {
        Self {
            strategy,
            placeholder_url: placeholder_url.into(),
            image_search,
        }
    }

    /// Active strategy
    #[must_use]
    pub const fn strategy(&self) -> AssetStrategy {
        self.strategy
    }

    /// Asset for one item
    pub async fn resolve(&self, name: &str, image_url: Option<&str>) -> DisplayAsset {
        if let Some(url) = image_url.filter(|url| !url.trim().is_empty()) {
            return DisplayAsset::Image {
                url: url.to_owned(),
            };
        }

        match self.strategy {
            AssetStrategy::Placeholder => self.placeholder(),
            AssetStrategy::Emoji => DisplayAsset::Emoji {
                symbol: emoji::emoji_for(name).to_owned(),
            },
            AssetStrategy::ImageSearch => self.search_or_placeholder(name).await,
        }
    }

    /// Fill in the asset of every item, one lookup at a time
    pub async fn resolve_all(&self, items: &mut [RankedItem]) {
        for item in items.iter_mut() {
            let asset = self.resolve(&item.name, item.image_url.as_deref()).await;
            item.asset = Some(asset);
        }
    }

    fn placeholder(&self) -> DisplayAsset {
        DisplayAsset::Image {
            url: self.placeholder_url.clone(),
        }
    }

    async fn search_or_placeholder(&self, name: &str) -> DisplayAsset {
        let Some(search) = &self.image_search else {
            warn!(item = name, "Image search has no credential configured, using placeholder");
            return self.placeholder();
        };

        match search.search_image(name).await {
            Ok(Some(url)) => DisplayAsset::Image { url },
            Ok(None) => {
                warn!(item = name, "Image search returned no photos, using placeholder");
                self.placeholder()
            }
            Err(e) => {
                warn!(item = name, error = %e, "Image search failed, using placeholder");
                self.placeholder()
            }
        }
    }
}

impl fmt::Debug for AssetResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetResolver")
            .field("strategy", &self.strategy)
            .field("placeholder_url", &self.placeholder_url)
            .field("image_search", &self.image_search.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("Placeholder".parse::<AssetStrategy>().unwrap(), AssetStrategy::Placeholder);
        assert_eq!("emoji".parse::<AssetStrategy>().unwrap(), AssetStrategy::Emoji);
        assert_eq!(
            "image-search".parse::<AssetStrategy>().unwrap(),
            AssetStrategy::ImageSearch
        );
        assert!("pexels".parse::<AssetStrategy>().is_err());
    }

    #[tokio::test]
    async fn test_upstream_photo_always_wins() {
        let resolver = AssetResolver::new(AssetStrategy::Emoji, "https://placeholder.test", None);
        let asset = resolver
            .resolve("Pizza", Some("https://cdn.test/pizza.jpg"))
            .await;
        assert_eq!(
            asset,
            DisplayAsset::Image {
                url: "https://cdn.test/pizza.jpg".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn test_search_without_credential_uses_placeholder() {
        let resolver =
            AssetResolver::new(AssetStrategy::ImageSearch, "https://placeholder.test", None);
        let asset = resolver.resolve("Pizza", None).await;
        assert_eq!(
            asset,
            DisplayAsset::Image {
                url: "https://placeholder.test".to_owned()
            }
        );
    }
}
