//! In-process stand-in for the Unsplash API, serving the JSON fixtures.
//!
//! Every API route requires an `Authorization` header (`Client-ID` or
//! `Bearer`) and answers with rate-limit headers. Listings carry `X-Total`
//! and `X-Per-Page`. The OAuth routes sit outside that check.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const PHOTO: &str = include_str!("../../fixtures/photo.json");
pub const USER: &str = include_str!("../../fixtures/user_profile.json");
pub const COLLECTION: &str = include_str!("../../fixtures/collection.json");
pub const TOPIC: &str = include_str!("../../fixtures/topic.json");
pub const PHOTO_STATISTICS: &str = include_str!("../../fixtures/photo_statistics.json");
pub const USER_STATISTICS: &str = include_str!("../../fixtures/user_statistics.json");
pub const TOTAL_STATS: &str = include_str!("../../fixtures/total_stats.json");
pub const MONTHLY_STATS: &str = include_str!("../../fixtures/monthly_stats.json");
pub const SEARCH_PHOTOS: &str = include_str!("../../fixtures/search_photos.json");
pub const TOKEN: &str = include_str!("../../fixtures/token.json");

pub const PHOTO_ID: &str = "DSpHm6LMSHA";
pub const USERNAME: &str = "kaiwen";
pub const COLLECTION_ID: &str = "206";
pub const TOPIC_ID: &str = "bo8jQKTaE0Y";
pub const TOPIC_SLUG: &str = "nature";
/// The only code `/oauth/token` accepts.
pub const VALID_CODE: &str = "valid-code";

/// Size of every photo listing the server pretends to hold.
pub const TOTAL_PHOTOS: u32 = 24;
pub const DEFAULT_RATE_LIMIT: u64 = 50;

const DEFAULT_PER_PAGE: u32 = 10;
const MAX_PER_PAGE: u32 = 30;

const RATE_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
const RATE_LIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
const TOTAL: HeaderName = HeaderName::from_static("x-total");
const PER_PAGE: HeaderName = HeaderName::from_static("x-per-page");

#[derive(Clone)]
pub struct AppState {
    requests: Arc<AtomicU64>,
    limit: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RandomQuery {
    pub count: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct NewCollectionQuery {
    pub title: String,
    pub description: Option<String>,
    pub private: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TokenQuery {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub code: Option<String>,
    pub grant_type: Option<String>,
}

pub fn app() -> Router {
    app_with_rate_limit(DEFAULT_RATE_LIMIT)
}

/// Like `app`, but API requests beyond `limit` are answered with 403.
pub fn app_with_rate_limit(limit: u64) -> Router {
    let state = AppState {
        requests: Arc::new(AtomicU64::new(0)),
        limit,
    };

    let api = Router::new()
        .route("/me", get(current_user))
        .route("/users/{username}", get(user))
        .route("/users/{username}/photos", get(user_photos))
        .route("/users/{username}/statistics", get(user_statistics))
        .route("/photos", get(list_photos))
        .route("/photos/random", get(random_photo))
        .route("/photos/{id}", get(photo))
        .route("/photos/{id}/statistics", get(photo_statistics))
        .route("/photos/{id}/download", get(download))
        .route("/search/photos", get(search_photos))
        .route("/collections", post(create_collection))
        .route("/collections/{id}", get(collection).delete(delete_collection))
        .route("/topics/{id_or_slug}", get(topic))
        .route("/stats/total", get(total_stats))
        .route("/stats/month", get(monthly_stats))
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    Router::new()
        .merge(api)
        .route("/oauth/token", post(token))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn authorize(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let credentials = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Client-ID ") || v.starts_with("Bearer "));
    if !credentials {
        tracing::debug!(uri = %request.uri(), "rejecting request without credentials");
        return errors(StatusCode::UNAUTHORIZED, "OAuth error: The access token is invalid");
    }

    let used = state.requests.fetch_add(1, Ordering::SeqCst) + 1;
    let remaining = state.limit.saturating_sub(used);
    let mut response = if used > state.limit {
        tracing::debug!(used, limit = state.limit, "rate limit exceeded");
        (StatusCode::FORBIDDEN, "Rate Limit Exceeded").into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(RATE_LIMIT, HeaderValue::from(state.limit));
    headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from(remaining));
    response
}

fn raw_json(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn ok(body: &str) -> Response {
    raw_json(StatusCode::OK, body.to_string())
}

fn errors(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "errors": [message] }))).into_response()
}

fn not_found(kind: &str) -> Response {
    errors(StatusCode::NOT_FOUND, &format!("Couldn't find {kind}"))
}

/// One page of the photo listing with its pagination headers.
fn photo_page(query: &ListQuery) -> Response {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
    let skipped = (page - 1).saturating_mul(per_page);
    let count = TOTAL_PHOTOS.saturating_sub(skipped).min(per_page) as usize;

    let body = format!("[{}]", vec![PHOTO.trim(); count].join(","));
    let mut response = raw_json(StatusCode::OK, body);
    let headers = response.headers_mut();
    headers.insert(TOTAL, HeaderValue::from(TOTAL_PHOTOS));
    headers.insert(PER_PAGE, HeaderValue::from(per_page));
    response
}

async fn current_user(headers: HeaderMap) -> Response {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer "));
    if !bearer {
        return errors(StatusCode::UNAUTHORIZED, "OAuth error: The access token is invalid");
    }
    ok(USER)
}

async fn user(Path(username): Path<String>) -> Response {
    if username != USERNAME {
        return not_found("User");
    }
    ok(USER)
}

async fn user_photos(Path(username): Path<String>, Query(query): Query<ListQuery>) -> Response {
    if username != USERNAME {
        return not_found("User");
    }
    photo_page(&query)
}

async fn user_statistics(Path(username): Path<String>) -> Response {
    if username != USERNAME {
        return not_found("User");
    }
    ok(USER_STATISTICS)
}

async fn list_photos(Query(query): Query<ListQuery>) -> Response {
    photo_page(&query)
}

async fn random_photo(Query(query): Query<RandomQuery>) -> Response {
    match query.count {
        None => ok(PHOTO),
        Some(count) => {
            let count = count.clamp(1, MAX_PER_PAGE) as usize;
            raw_json(StatusCode::OK, format!("[{}]", vec![PHOTO.trim(); count].join(",")))
        }
    }
}

async fn photo(Path(id): Path<String>) -> Response {
    if id != PHOTO_ID {
        return not_found("Photo");
    }
    ok(PHOTO)
}

async fn photo_statistics(Path(id): Path<String>) -> Response {
    if id != PHOTO_ID {
        return not_found("Photo");
    }
    ok(PHOTO_STATISTICS)
}

async fn download(Path(id): Path<String>) -> Response {
    if id != PHOTO_ID {
        return not_found("Photo");
    }
    let url = format!("https://images.unsplash.com/photo-1462475279937-40cd8ae3bd3f?ixid={id}");
    (StatusCode::OK, Json(json!({ "url": url }))).into_response()
}

async fn search_photos(Query(query): Query<SearchQuery>) -> Response {
    match query.query.as_deref() {
        None => errors(StatusCode::BAD_REQUEST, "query is missing"),
        Some(text) => {
            tracing::debug!(query = text, page = ?query.page, "search");
            ok(SEARCH_PHOTOS)
        }
    }
}

async fn create_collection(Query(input): Query<NewCollectionQuery>) -> Response {
    let mut collection: Value = match serde_json::from_str(COLLECTION) {
        Ok(value) => value,
        Err(e) => return errors(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    };
    collection["id"] = json!("new-collection");
    collection["title"] = json!(input.title);
    collection["description"] = json!(input.description);
    collection["private"] = json!(input.private.unwrap_or(false));
    collection["total_photos"] = json!(0);
    collection["cover_photo"] = Value::Null;
    (StatusCode::CREATED, Json(collection)).into_response()
}

async fn collection(Path(id): Path<String>) -> Response {
    if id != COLLECTION_ID {
        return not_found("Collection");
    }
    ok(COLLECTION)
}

async fn delete_collection(Path(id): Path<String>) -> Response {
    if id != COLLECTION_ID {
        return not_found("Collection");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn topic(Path(id_or_slug): Path<String>) -> Response {
    if id_or_slug != TOPIC_ID && id_or_slug != TOPIC_SLUG {
        return not_found("Topic");
    }
    ok(TOPIC)
}

async fn total_stats() -> Response {
    ok(TOTAL_STATS)
}

async fn monthly_stats() -> Response {
    ok(MONTHLY_STATS)
}

async fn token(Query(query): Query<TokenQuery>) -> Response {
    let complete = query.client_id.is_some() && query.client_secret.is_some() && query.redirect_uri.is_some();
    if !complete || query.grant_type.as_deref() != Some("authorization_code") {
        return errors(StatusCode::BAD_REQUEST, "invalid_request");
    }
    if query.code.as_deref() != Some(VALID_CODE) {
        return errors(StatusCode::UNAUTHORIZED, "invalid_grant");
    }
    ok(TOKEN)
}
