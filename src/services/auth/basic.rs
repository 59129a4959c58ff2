//! HTTP Basic authentication (RFC 7617, server side) - core logic.
//!
//! This module only classifies an `Authorization` header against the configured
//! pair. It does not know about axum middleware or responses; the gate in
//! `middleware::auth::basic` turns the outcome into a response.

use axum::http::{HeaderMap, header};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::Credentials;

/// Literal, case-sensitive scheme prefix (single space).
pub const SCHEME_PREFIX: &[u8] = b"Basic ";

/// Why a request was turned away by the gate.
///
/// The `Display` text is the exact response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthRejection {
    #[error("Missing or invalid authentication")]
    MissingOrInvalidScheme,
    #[error("Malformed authentication credentials")]
    MalformedCredentials,
    #[error("Unauthorized: Invalid credentials")]
    InvalidCredentials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("credentials are not valid base64")]
    Base64,
    #[error("decoded credentials are not valid utf-8")]
    Utf8,
    #[error("decoded credentials have no ':' separator")]
    MissingSeparator,
}

/// Parsed view of the `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationHeader {
    /// Absent, or not using the `Basic` scheme.
    Missing,
    Malformed(DecodeError),
    WellFormed { username: String, password: String },
}

impl AuthorizationHeader {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        // Raw bytes: a non-ASCII token must still reach the decoder (and fail there).
        let Some(raw) = headers.get(header::AUTHORIZATION).map(|v| v.as_bytes()) else {
            return Self::Missing;
        };

        let Some(encoded) = raw.strip_prefix(SCHEME_PREFIX) else {
            return Self::Missing;
        };

        match decode_credentials(encoded) {
            Ok((username, password)) => Self::WellFormed { username, password },
            Err(err) => Self::Malformed(err),
        }
    }
}

/// base64 → utf-8 → split on the first ':'.
pub fn decode_credentials(encoded: &[u8]) -> Result<(String, String), DecodeError> {
    let bytes = STANDARD.decode(encoded).map_err(|_| DecodeError::Base64)?;
    let text = String::from_utf8(bytes).map_err(|_| DecodeError::Utf8)?;

    let (username, password) = text
        .split_once(':')
        .ok_or(DecodeError::MissingSeparator)?;

    Ok((username.to_owned(), password.to_owned()))
}

/// Classify a request. On success returns the authenticated username.
pub fn authenticate(credentials: &Credentials, headers: &HeaderMap) -> Result<String, AuthRejection> {
    match AuthorizationHeader::from_headers(headers) {
        AuthorizationHeader::Missing => Err(AuthRejection::MissingOrInvalidScheme),
        AuthorizationHeader::Malformed(_) => Err(AuthRejection::MalformedCredentials),
        AuthorizationHeader::WellFormed { username, password } => {
            if credentials.matches(&username, &password) {
                Ok(username)
            } else {
                Err(AuthRejection::InvalidCredentials)
            }
        }
    }
}
