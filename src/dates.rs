// ABOUTME: Timezone-aware menu dates: district-local today, endpoint segment, display label
// ABOUTME: Uses chrono-tz so the fetched week follows the school's calendar, not the host's
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::errors::{AppError, AppResult};

/// Today's date in `timezone`
#[must_use]
pub fn today_in(timezone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&timezone).date_naive()
}

/// Path segment the menu API expects, `YYYY/MM/DD`
#[must_use]
pub fn endpoint_segment(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Human label, e.g. `October 19, 2026`
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Parse a `YYYY-MM-DD` date supplied by a caller
///
/// # Errors
///
/// Returns an invalid input error if the text is not a calendar date
pub fn parse_date(text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::invalid_input(format!("invalid date '{text}': {e}")))
}

/// Parse an IANA timezone name
///
/// # Errors
///
/// Returns a configuration error for unknown zone names
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| AppError::config(format!("unknown timezone '{name}': {e}")))
}
