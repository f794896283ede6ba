use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_rate_limit, PHOTO_ID, TOTAL_PHOTOS, USERNAME, VALID_CODE};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn authorized(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, "Client-ID test-key")
        .body(String::new())
        .unwrap()
}

fn header_u64(response: &axum::response::Response, name: &str) -> Option<u64> {
    response.headers().get(name)?.to_str().ok()?.parse().ok()
}

// --- credentials ---

#[tokio::test]
async fn missing_credentials_returns_401_with_errors() {
    let resp = app()
        .oneshot(Request::builder().uri(format!("/photos/{PHOTO_ID}")).body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["errors"][0], "OAuth error: The access token is invalid");
}

#[tokio::test]
async fn current_user_needs_bearer() {
    let resp = app().oneshot(authorized("GET", "/me")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .uri("/me")
        .header(http::header::AUTHORIZATION, "Bearer token")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: Value = body_json(resp).await;
    assert_eq!(user["username"], USERNAME);
}

// --- photos ---

#[tokio::test]
async fn photo_carries_rate_limit_headers() {
    let resp = app().oneshot(authorized("GET", &format!("/photos/{PHOTO_ID}"))).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header_u64(&resp, "X-Ratelimit-Limit"), Some(50));
    assert_eq!(header_u64(&resp, "X-Ratelimit-Remaining"), Some(49));
    let photo: Value = body_json(resp).await;
    assert_eq!(photo["id"], PHOTO_ID);
}

#[tokio::test]
async fn unknown_photo_returns_404() {
    let resp = app().oneshot(authorized("GET", "/photos/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["errors"][0], "Couldn't find Photo");
}

#[tokio::test]
async fn listing_pages_through_total() {
    let resp = app().oneshot(authorized("GET", "/photos?page=3&per_page=10")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header_u64(&resp, "X-Total"), Some(u64::from(TOTAL_PHOTOS)));
    assert_eq!(header_u64(&resp, "X-Per-Page"), Some(10));
    let photos: Vec<Value> = body_json(resp).await;
    assert_eq!(photos.len(), 4);
}

#[tokio::test]
async fn listing_past_the_end_is_empty() {
    let resp = app().oneshot(authorized("GET", "/photos?page=9")).await.unwrap();
    let photos: Vec<Value> = body_json(resp).await;
    assert!(photos.is_empty());
}

#[tokio::test]
async fn random_photo_shape_follows_count() {
    let resp = app().oneshot(authorized("GET", "/photos/random")).await.unwrap();
    let single: Value = body_json(resp).await;
    assert!(single.is_object());

    let resp = app().oneshot(authorized("GET", "/photos/random?count=3")).await.unwrap();
    let many: Vec<Value> = body_json(resp).await;
    assert_eq!(many.len(), 3);
}

#[tokio::test]
async fn search_requires_query() {
    let resp = app().oneshot(authorized("GET", "/search/photos")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app().oneshot(authorized("GET", "/search/photos?query=fog")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Value = body_json(resp).await;
    assert_eq!(page["total"], 133);
}

// --- collections ---

#[tokio::test]
async fn create_collection_echoes_title() {
    let resp = app()
        .oneshot(authorized("POST", "/collections?title=Misty+ridges&private=true"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let collection: Value = body_json(resp).await;
    assert_eq!(collection["title"], "Misty ridges");
    assert_eq!(collection["private"], true);
    assert!(collection["cover_photo"].is_null());
}

#[tokio::test]
async fn delete_collection_returns_204() {
    let resp = app().oneshot(authorized("DELETE", "/collections/206")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = app().oneshot(authorized("DELETE", "/collections/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- rate limit ---

#[tokio::test]
async fn rate_limit_exhaustion_returns_403() {
    use tower::Service;

    let mut app = app_with_rate_limit(1).into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(authorized("GET", "/stats/total"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header_u64(&resp, "X-Ratelimit-Remaining"), Some(0));

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(authorized("GET", "/stats/total"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(header_u64(&resp, "X-Ratelimit-Limit"), Some(1));
    assert_eq!(body_bytes(resp).await, "Rate Limit Exceeded");
}

// --- oauth ---

#[tokio::test]
async fn token_exchange() {
    let uri = format!(
        "/oauth/token?client_id=a&client_secret=b&redirect_uri=urn&code={VALID_CODE}&grant_type=authorization_code"
    );
    let resp = app()
        .oneshot(Request::builder().method("POST").uri(uri).body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let token: Value = body_json(resp).await;
    assert_eq!(token["token_type"], "bearer");

    let uri = "/oauth/token?client_id=a&client_secret=b&redirect_uri=urn&code=bad&grant_type=authorization_code";
    let resp = app()
        .oneshot(Request::builder().method("POST").uri(uri).body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
