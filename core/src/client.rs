//! Request execution and response normalization for the board API.
//!
//! # Design
//! `ApiClient` holds a base URL and an injected [`Transport`]; it is
//! constructed once per process and shared by every resource client. Each
//! call serializes the body, executes the round-trip, and normalizes the
//! outcome into `Result<Envelope<T>, ApiError>`:
//!
//! - a delivered 2xx body is returned verbatim as the envelope, including
//!   envelopes reporting a business failure (`is_success == false`);
//! - an error status becomes `ApiError::Server`, carrying the body's failed
//!   envelope when it parses so the backend's own message survives;
//! - transport failures become `ApiError::Network` / `ApiError::Request`.
//!
//! The client is stateless between calls: no retries, no caching, no
//! in-flight tracking.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

const CONTENT_TYPE_JSON: (&str, &str) = ("content-type", "application/json");

/// The one process-wide HTTP client for the board backend.
pub struct ApiClient {
    base_url: String,
    transport: Box<dyn Transport>,
}

impl ApiClient {
    /// `base_url` should include the API prefix, e.g.
    /// `http://127.0.0.1:3000/api`. A trailing slash is stripped.
    pub fn new(base_url: &str, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport: Box::new(transport),
        }
    }

    pub(crate) fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.send(HttpMethod::Get, path, Vec::new(), None)
    }

    pub(crate) fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        extra_headers: Vec<(String, String)>,
    ) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.send_json(HttpMethod::Post, path, body, extra_headers)
    }

    pub(crate) fn put<B, T>(
        &self,
        path: &str,
        body: &B,
        extra_headers: Vec<(String, String)>,
    ) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.send_json(HttpMethod::Put, path, body, extra_headers)
    }

    pub(crate) fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        extra_headers: Vec<(String, String)>,
    ) -> Result<Envelope<T>, ApiError> {
        self.send(HttpMethod::Delete, path, extra_headers, None)
    }

    fn send_json<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
        extra_headers: Vec<(String, String)>,
    ) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Request(e.to_string()))?;
        let mut headers = vec![(CONTENT_TYPE_JSON.0.to_string(), CONTENT_TYPE_JSON.1.to_string())];
        headers.extend(extra_headers);
        self.send(method, path, headers, Some(body))
    }

    fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        headers: Vec<(String, String)>,
        body: Option<String>,
    ) -> Result<Envelope<T>, ApiError> {
        let request = HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers,
            body,
        };
        let response = self.transport.execute(&request)?;
        unwrap_envelope(response)
    }
}

/// Normalize a delivered response into an envelope or a server error.
fn unwrap_envelope<T: DeserializeOwned>(response: HttpResponse) -> Result<Envelope<T>, ApiError> {
    if (200..300).contains(&response.status) {
        match serde_json::from_str(&response.body) {
            Ok(envelope) => Ok(envelope),
            // A 2xx body that is not an envelope is a contract violation.
            Err(_) => Err(ApiError::Server {
                status: response.status,
                failure: None,
                body: response.body,
            }),
        }
    } else {
        let failure = serde_json::from_str(&response.body).ok();
        Err(ApiError::Server {
            status: response.status,
            failure,
            body: response.body,
        })
    }
}
