//! Typed errors for the CPF service
//!
//! # Error Categories
//!
//! - [`CpfError`]: why a candidate string is not a valid CPF
//! - [`RequestError`]: problems with an incoming HTTP request
//! - [`ConfigError`]: problems loading or validating configuration
//!
//! An invalid CPF is an ordinary outcome of the endpoint, not a failure, so
//! [`CpfError`] never becomes an HTTP error by itself. Only
//! [`RequestError`] implements `IntoResponse`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

// =============================================================================
// CPF Errors
// =============================================================================

/// Reason a candidate was rejected by [`Cpf::parse`](crate::core::cpf::Cpf::parse)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpfError {
    /// Wrong number of digits once non-digits are stripped
    #[error("CPF must have 11 digits, found {length}")]
    InvalidLength { length: usize },

    /// All 11 digits are the same
    #[error("CPF cannot be a single repeated digit")]
    RepeatedDigits,

    #[error("first check digit mismatch: expected {expected}, found {found}")]
    FirstCheckDigitMismatch { expected: u8, found: u8 },

    #[error("second check digit mismatch: expected {expected}, found {found}")]
    SecondCheckDigitMismatch { expected: u8, found: u8 },
}

// =============================================================================
// Request Errors
// =============================================================================

/// Message returned when neither the query string nor the body carries a CPF
pub const MISSING_CPF_MESSAGE: &str =
    "Por favor, forneça um CPF válido na query string ou no corpo da requisição.";

/// Errors related to HTTP requests
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// No `cpf` query parameter and an empty body
    #[error("{}", MISSING_CPF_MESSAGE)]
    MissingCpf,
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MissingCpf => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MissingCpf => "MISSING_CPF",
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors related to configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}
