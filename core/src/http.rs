//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network. The host supplies an `HttpExecutor` that turns
//! one into the other.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed to
//! any transport without lifetime concerns.

use std::fmt;

/// Value sent in the `Accept-Version` header on every API request.
pub const API_VERSION: &str = "v1";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// The verb as it appears on the request line.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single outbound header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeader {
    pub name: String,
    pub value: String,
}

impl RequestHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Public (application-level) authorization with an access key.
    pub fn client_id(access_key: &str) -> Self {
        Self::new("Authorization", format!("Client-ID {access_key}"))
    }

    /// User-level authorization with an OAuth bearer token.
    pub fn bearer(token: &str) -> Self {
        Self::new("Authorization", format!("Bearer {token}"))
    }

    pub fn accept_version() -> Self {
        Self::new("Accept-Version", API_VERSION)
    }
}

/// An HTTP request described as plain data.
///
/// Built by `build_request` (usually through `UnsplashClient::build_*`). The
/// URL is absolute and already carries the encoded query string. Header names
/// are unique, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Look up a header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed to
/// `UnsplashClient::parse_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Body as text, replacing invalid UTF-8. Used for error messages.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The transport seam. The host implements this over whatever HTTP stack it
/// uses; the core only ever sees one request in and one response out.
pub trait HttpExecutor {
    type Error: fmt::Display;

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error>;
}

pub(crate) fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_renders_as_verb() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn credential_headers() {
        assert_eq!(
            RequestHeader::client_id("abc"),
            RequestHeader::new("Authorization", "Client-ID abc")
        );
        assert_eq!(RequestHeader::bearer("tok").value, "Bearer tok");
        assert_eq!(RequestHeader::accept_version().value, "v1");
    }

    #[test]
    fn response_header_lookup_ignores_case() {
        let response = HttpResponse::new(
            200,
            vec![("x-ratelimit-limit".to_string(), "50".to_string())],
            Vec::new(),
        );
        assert_eq!(response.header("X-Ratelimit-Limit"), Some("50"));
        assert_eq!(response.header("X-Total"), None);
    }
}
