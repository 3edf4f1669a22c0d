// ABOUTME: Unified error handling with error codes, user-facing banners, and HTTP mapping
// ABOUTME: Every fallible operation in the crate returns AppResult<T>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every failure the ranker can hit is classified by an [`ErrorCode`]. Codes map
//! to an HTTP status for the JSON surface and to a single static banner for the
//! command-line view, so callers never render partial results next to an error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Banner shown when the menu API cannot be reached or answers with a failure
pub const FETCH_FAILED_BANNER: &str = "Error fetching data from the API.";

/// Banner shown for failures the user cannot act on
pub const INTERNAL_ERROR_BANNER: &str = "Something went wrong while building this menu.";

/// Banner shown when filtering leaves nothing to rank
pub const NO_ITEMS_BANNER: &str = "No qualifying items found for this menu.";

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Caller supplied a malformed value
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Filtering left an empty qualifying set
    #[serde(rename = "NO_ITEMS")]
    NoItems,
    /// Upstream answered with a non-success status
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    /// Upstream could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable,
    /// Configuration value could not be parsed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Payload could not be decoded
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Anything else
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::NoItems => 404,
            Self::ExternalServiceError | Self::ExternalServiceUnavailable => 502,
            Self::ConfigInvalid | Self::SerializationError | Self::InternalError => 500,
        }
    }

    /// Get a short description of this error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::NoItems => "No items matched the menu filters",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// The single banner an end user sees for this failure
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self.code {
            ErrorCode::ExternalServiceError
            | ErrorCode::ExternalServiceUnavailable
            | ErrorCode::SerializationError => FETCH_FAILED_BANNER,
            ErrorCode::NoItems => NO_ITEMS_BANNER,
            ErrorCode::InternalError => INTERNAL_ERROR_BANNER,
            ErrorCode::InvalidInput | ErrorCode::ConfigInvalid => &self.message,
        }
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Empty qualifying set for a view
    pub fn no_items(view: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::NoItems,
            format!("no qualifying items for view '{}'", view.into()),
        )
    }

    /// External service answered with a failure
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service could not be reached
    pub fn external_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Decoding error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(format!("JSON parse error: {error}")).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::internal(format!("I/O error: {error}")).with_source(error)
    }
}

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// User-facing banner
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.user_message().to_owned(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::NoItems.http_status(), 404);
        assert_eq!(ErrorCode::ExternalServiceError.http_status(), 502);
        assert_eq!(ErrorCode::ExternalServiceUnavailable.http_status(), 502);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_upstream_failures_share_one_banner() {
        let status = AppError::external_service("Nutrislice", "HTTP 503");
        let offline = AppError::external_unavailable("Nutrislice", "connection refused");

        assert_eq!(status.user_message(), FETCH_FAILED_BANNER);
        assert_eq!(offline.user_message(), FETCH_FAILED_BANNER);
    }

    #[test]
    fn test_decode_and_internal_details_stay_out_of_banner() {
        let decode: AppError = serde_json::from_str::<u32>("\"n/a\"").unwrap_err().into();
        assert_eq!(decode.code, ErrorCode::SerializationError);
        assert_eq!(decode.user_message(), FETCH_FAILED_BANNER);
        assert!(decode.message.contains("JSON parse error"));

        let internal = AppError::internal("failed to bind 0.0.0.0:8081");
        assert_eq!(internal.user_message(), INTERNAL_ERROR_BANNER);
    }

    #[test]
    fn test_no_items_banner_is_distinct() {
        let error = AppError::no_items("top");
        assert_eq!(error.code, ErrorCode::NoItems);
        assert_eq!(error.user_message(), NO_ITEMS_BANNER);
        assert_ne!(NO_ITEMS_BANNER, FETCH_FAILED_BANNER);
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::invalid_input("bad date '2024-13-01'");
        let rendered = error.to_string();
        assert!(rendered.starts_with("The provided input is invalid"));
        assert!(rendered.contains("2024-13-01"));
    }

    #[test]
    fn test_json_error_converts_with_source() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = AppError::from(parse_error);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(std::error::Error::source(&error).is_some());
    }
}
