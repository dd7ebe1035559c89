//! ureq-backed implementation of the core's `Transport` seam.

use board_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Executes requests with a single ureq agent.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses are
/// returned as data; status interpretation belongs to the core. An invalid
/// URI fails before anything is sent and maps to `InvalidRequest`; every
/// error out of the agent itself means no response arrived.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        request
            .path
            .parse::<ureq::http::Uri>()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let result = match (&request.method, &request.body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&request.path);
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Delete, _) => {
                let mut builder = self.agent.delete(&request.path);
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&request.path);
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            (HttpMethod::Put, body) => {
                let mut builder = self.agent.put(&request.path);
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(|e| TransportError::NoResponse(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_uri_is_an_invalid_request() {
        let transport = UreqTransport::new();
        let request = HttpRequest {
            method: HttpMethod::Get,
            path: "not a uri at all".to_string(),
            headers: Vec::new(),
            body: None,
        };
        let error = transport.execute(&request).unwrap_err();
        assert!(matches!(error, TransportError::InvalidRequest(_)));
    }
}
