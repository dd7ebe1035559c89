//! The closed error union produced by request normalization.
//!
//! # Design
//! Every way a call can fail without delivering a usable envelope collapses
//! into one of three variants, so call sites can match exhaustively instead
//! of probing an open-ended error chain. Business failures are not errors at
//! all — they arrive as resolved envelopes with `is_success == false`.
//! `Server` keeps the parsed failure envelope when the body contained one,
//! so the backend's own `code`/`message` reach the user unchanged.

use std::fmt;

use crate::envelope::{
    Failure, NETWORK_ERROR_CODE, NETWORK_ERROR_MESSAGE, REQUEST_ERROR_CODE, REQUEST_ERROR_MESSAGE,
};
use crate::http::TransportError;

/// Errors returned by `ApiClient` calls.
#[derive(Debug)]
pub enum ApiError {
    /// The server responded with an error status, or with a body that does
    /// not conform to the envelope contract. `failure` is present when the
    /// body parsed as a failed envelope; `body` keeps the raw text either way.
    Server {
        status: u16,
        failure: Option<Failure>,
        body: String,
    },

    /// The request was sent but no response arrived.
    Network(String),

    /// The request could not be constructed or sent.
    Request(String),
}

impl ApiError {
    /// The failure code for this error: the server's own code when it sent
    /// one, a sentinel code otherwise.
    pub fn code(&self) -> String {
        match self {
            ApiError::Server {
                failure: Some(failure),
                ..
            } => failure.code.clone(),
            ApiError::Server { status, .. } => format!("HTTP_{status}"),
            ApiError::Network(_) => NETWORK_ERROR_CODE.to_string(),
            ApiError::Request(_) => REQUEST_ERROR_CODE.to_string(),
        }
    }

    /// The message suitable for showing to the user, if one exists.
    ///
    /// `None` means the server gave no envelope; the caller supplies its own
    /// per-action fallback string.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ApiError::Server {
                failure: Some(failure),
                ..
            } => Some(&failure.message),
            ApiError::Server { .. } => None,
            ApiError::Network(_) => Some(NETWORK_ERROR_MESSAGE),
            ApiError::Request(_) => Some(REQUEST_ERROR_MESSAGE),
        }
    }

    /// Collapse this error into the envelope-shaped [`Failure`].
    pub fn into_failure(self) -> Failure {
        match self {
            ApiError::Server {
                failure: Some(failure),
                ..
            } => failure,
            ApiError::Server { status, body, .. } => Failure {
                is_success: false,
                code: format!("HTTP_{status}"),
                message: body,
                result: None,
            },
            ApiError::Network(_) => Failure::network(),
            ApiError::Request(_) => Failure::request(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::NoResponse(detail) => ApiError::Network(detail),
            TransportError::InvalidRequest(detail) => ApiError::Request(detail),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server {
                status,
                failure: Some(failure),
                ..
            } => write!(f, "HTTP {status} [{}]: {}", failure.code, failure.message),
            ApiError::Server { status, body, .. } => write!(f, "HTTP {status}: {body}"),
            ApiError::Network(detail) => write!(f, "no response received: {detail}"),
            ApiError::Request(detail) => write!(f, "request failed to send: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}
