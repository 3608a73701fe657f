//! Generic HTTP verb wrappers over a `Transport`.
//!
//! # Design
//! `Gateway` has no domain knowledge. Each verb is split into a pure
//! `build_request` step and a pure `parse_response` step with the transport
//! round-trip in between, so both halves can be tested without I/O. Any
//! non-2xx status fails with `ApiError::RequestFailed`; the body of an error
//! response is never inspected. There is no caching, retry or timeout.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Verb-level client bound to a base URL and a transport.
#[derive(Debug, Clone)]
pub struct Gateway<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(HttpMethod::Get, path, None)
    }

    pub fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body = encode(body)?;
        self.send(HttpMethod::Post, path, Some(body))
    }

    pub fn put<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body = encode(body)?;
        self.send(HttpMethod::Put, path, Some(body))
    }

    pub fn patch<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body = encode(body)?;
        self.send(HttpMethod::Patch, path, Some(body))
    }

    pub fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(HttpMethod::Delete, path, None)
    }

    /// Describe a call as plain data. Requests with a body carry
    /// `content-type: application/json`.
    pub fn build_request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let headers = if body.is_some() {
            vec![("content-type".to_string(), "application/json".to_string())]
        } else {
            Vec::new()
        };
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }

    fn send<R: DeserializeOwned>(&self, method: HttpMethod, path: &str, body: Option<String>) -> Result<R, ApiError> {
        let request = self.build_request(method, path, body);
        debug!(method = method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        parse_response(response).inspect_err(|e| {
            warn!(method = method.as_str(), %path, error = ?e, "request did not succeed");
        })
    }
}

/// Turn a response into the expected body, failing on any non-2xx status.
pub fn parse_response<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        return Err(ApiError::RequestFailed {
            status: Some(response.status),
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::{json, Value};

    use super::*;

    /// Replies with a fixed response and remembers what it was asked.
    struct FixedTransport {
        response: HttpResponse,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl FixedTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                response: HttpResponse {
                    status,
                    headers: Vec::new(),
                    body: body.to_string(),
                },
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for FixedTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request);
            Ok(self.response.clone())
        }
    }

    fn gateway() -> Gateway<FixedTransport> {
        Gateway::new("http://localhost:8000", FixedTransport::new(200, "{}"))
    }

    #[test]
    fn build_get_has_no_body_or_headers() {
        let req = gateway().build_request(HttpMethod::Get, "/animals", None);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/animals");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_with_body_sets_json_content_type() {
        let req = gateway().build_request(HttpMethod::Patch, "/lost/7/found", Some("{}".to_string()));
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert_eq!(req.body.as_deref(), Some("{}"));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let gw = Gateway::new("http://localhost:8000/", FixedTransport::new(200, "[]"));
        let req = gw.build_request(HttpMethod::Get, "/lost", None);
        assert_eq!(req.path, "http://localhost:8000/lost");
    }

    #[test]
    fn post_serializes_body_and_parses_reply() {
        let gw = Gateway::new("http://api", FixedTransport::new(201, r#"{"id":1}"#));
        let reply: Value = gw.post("/animals", &json!({"name": "Rex"})).unwrap();
        assert_eq!(reply["id"], 1);

        let seen = gw.transport().seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, HttpMethod::Post);
        let sent: Value = serde_json::from_str(seen[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"name": "Rex"}));
    }

    #[test]
    fn non_success_status_is_request_failed() {
        for status in [400, 404, 422, 500, 503] {
            let gw = Gateway::new("http://api", FixedTransport::new(status, r#"{"detail":"nope"}"#));
            let err = gw.get::<Value>("/animals").unwrap_err();
            assert_eq!(err, ApiError::RequestFailed { status: Some(status) });
        }
    }

    #[test]
    fn bad_json_is_deserialization_error() {
        let gw = Gateway::new("http://api", FixedTransport::new(200, "not json"));
        let err = gw.delete::<Value>("/animals/1").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_response_accepts_any_2xx() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"message":"ok"}"#.to_string(),
        };
        let body: Value = parse_response(response).unwrap();
        assert_eq!(body["message"], "ok");
    }
}
