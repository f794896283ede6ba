//! Synchronous API client core for the Unsplash photo API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `Endpoint` is a closed enum; every operation has exactly one path.
//! - Each parameters struct emits an ordered list of query items through
//!   `QueryItems`. Absent optionals are omitted, never sent empty.
//! - `build_request` assembles method, URL and headers and rejects a bad base
//!   location before any network attempt.
//! - `headers::parse_headers` reads the rate-limit and pagination counters.
//! - `Decoder` turns bodies into the entities in `types`, failing on broken
//!   required fields and tolerating broken optional ones.
//! - `UnsplashClient` ties these together. It holds configuration only, and
//!   every operation is split into `build_*` and `parse_*`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod decoder;
pub mod endpoint;
pub mod error;
pub mod headers;
pub mod http;
pub mod params;
pub mod request;
pub mod search;
pub mod types;

pub use client::{ApiResponse, UnsplashClient};
pub use config::ClientConfig;
pub use decoder::{Decoder, Timestamp};
pub use endpoint::Endpoint;
pub use error::{ApiError, ApiResult};
pub use headers::{parse_headers, ResponseHeader, ResponseMetadata};
pub use http::{HttpExecutor, HttpMethod, HttpRequest, HttpResponse, RequestHeader};
pub use params::{QueryItems, QueryParameter};
pub use request::build_request;
pub use search::SearchType;
