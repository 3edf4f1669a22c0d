// ABOUTME: Configuration management module for the menu ranker
// ABOUTME: Re-exports the environment-driven MenuConfig and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: typed settings loaded from environment variables

/// Environment and service configuration
pub mod environment;

pub use environment::{AssetConfig, MenuApiConfig, MenuConfig, RankingConfig};
