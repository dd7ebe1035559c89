//! HTTP transport types and the injection seam for the real network client.
//!
//! # Design
//! Requests and responses are plain data with owned fields. The core never
//! opens a connection itself: callers hand an implementation of [`Transport`]
//! to `ApiClient`, which keeps the library deterministic and lets tests swap
//! in a recording transport. `TransportError` has exactly two variants —
//! "the request went out and nothing came back" versus "the request never
//! left" — because the normalization layer maps each to its own sentinel
//! failure code.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built internally by `ApiClient`; a [`Transport`] implementation executes
/// it against the network.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the [`Transport`] after executing an [`HttpRequest`]. Any
/// status is valid here — status interpretation belongs to the normalization
/// layer, not the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Failure of the transport itself, before any response body exists.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// The request was sent but no response arrived (timeout, connection
    /// reset, DNS failure).
    NoResponse(String),

    /// The request could not be constructed or handed to the network at all.
    InvalidRequest(String),
}

/// Executes one HTTP round-trip.
///
/// Implementations must return `Ok` for every delivered response regardless
/// of status code; `Err` is reserved for the cases where no response exists.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
