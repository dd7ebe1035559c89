//! The uniform response wrapper the backend returns for every call.
//!
//! # Design
//! The backend wraps every reply — success or failure — in the same
//! camelCase envelope: `{ isSuccess, code, message, result }`. [`Envelope`]
//! is that wrapper, generic over the operation's payload. [`Failure`] is the
//! concrete failed shape (`result` always null); it is what error-status
//! bodies parse into and what the client synthesizes when no real envelope
//! exists, so callers see one rejection shape no matter why a call failed.

use serde::{Deserialize, Serialize};

/// Sentinel code for "the request was sent but no response arrived".
pub const NETWORK_ERROR_CODE: &str = "NETWORK_ERROR";
/// Fixed message paired with [`NETWORK_ERROR_CODE`].
pub const NETWORK_ERROR_MESSAGE: &str = "네트워크 오류가 발생했습니다.";

/// Sentinel code for "the request could not be constructed or sent".
pub const REQUEST_ERROR_CODE: &str = "REQUEST_ERROR";
/// Fixed message paired with [`REQUEST_ERROR_CODE`].
pub const REQUEST_ERROR_MESSAGE: &str = "요청 중 오류가 발생했습니다.";

/// Backend response envelope for a call whose payload type is `T`.
///
/// `is_success == false` is a legitimate, *resolved* business failure: the
/// backend processed the request and declined it. Callers must branch on the
/// flag; a delivered envelope never becomes an `Err`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<T>,
}

/// A failed envelope: same wire shape as [`Envelope`], `result` always null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<serde_json::Value>,
}

impl Failure {
    /// Synthesized failure for a request that got no response.
    pub fn network() -> Self {
        Self::synthesized(NETWORK_ERROR_CODE, NETWORK_ERROR_MESSAGE)
    }

    /// Synthesized failure for a request that never left the client.
    pub fn request() -> Self {
        Self::synthesized(REQUEST_ERROR_CODE, REQUEST_ERROR_MESSAGE)
    }

    fn synthesized(code: &str, message: &str) -> Self {
        Failure {
            is_success: false,
            code: code.to_string(),
            message: message.to_string(),
            result: None,
        }
    }
}
