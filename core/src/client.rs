//! Stateless HTTP request builder and response parser for the Unsplash API.
//!
//! # Design
//! `UnsplashClient` holds configuration, an optional user token and the
//! decoder; it carries no mutable state between calls. Each operation is split
//! into a `build_*` method that produces an `HttpRequest` and a `parse_*`
//! method that consumes an `HttpResponse`. The host executes the round-trip,
//! either by hand or through `send` with an `HttpExecutor`.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::decoder::Decoder;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::headers::ResponseMetadata;
use crate::http::{HttpExecutor, HttpMethod, HttpRequest, HttpResponse, RequestHeader};
use crate::params::{
    AuthorizeParameters, CollectionPhotoParameters, CollectionUpdate, ListParameters, NewCollection,
    PhotoListParameters, QueryItems, RandomPhotoParameters, Scope, SearchParameters, StatisticsParameters,
    TokenParameters, TopicListParameters, UserPhotosParameters,
};
use crate::request::build_request;
use crate::search::SearchType;
use crate::types::{
    AccessToken, Collection, CollectionPhotoResult, DownloadLink, ErrorResponse, LikeResult, MonthlyStats, Photo,
    PhotoStatistics, Portfolio, RandomPhotos, SearchResults, Topic, TotalStats, User, UserStatistics,
};

/// A decoded body together with the header metadata of its response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub metadata: ResponseMetadata,
}

impl<T> ApiResponse<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            metadata: self.metadata,
        }
    }
}

/// Synchronous, stateless client for the Unsplash API.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    config: ClientConfig,
    bearer_token: Option<String>,
    decoder: Decoder,
}

impl UnsplashClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        let decoder = config.decoder();
        Ok(Self {
            config,
            bearer_token: None,
            decoder,
        })
    }

    /// Act on behalf of a user. The token takes precedence over the access key.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Execute `request` with the host's transport and hand the response to
    /// `parse`. A transport failure is returned without parsing anything.
    pub fn send<X, T, F>(&self, executor: &X, request: HttpRequest, parse: F) -> ApiResult<T>
    where
        X: HttpExecutor,
        F: FnOnce(&Self, HttpResponse) -> ApiResult<T>,
    {
        let response = executor.execute(&request).map_err(|e| {
            tracing::warn!(method = %request.method, url = %request.url, error = %e, "transport failed");
            ApiError::Transport(e.to_string())
        })?;
        parse(self, response)
    }

    // ---------------------------------------------------------------------
    // Users
    // ---------------------------------------------------------------------

    pub fn build_current_user(&self) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::CurrentUser, None)
    }

    pub fn build_user(&self, username: &str) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::User { username: username.to_string() }, None)
    }

    pub fn build_user_portfolio(&self, username: &str) -> ApiResult<HttpRequest> {
        let endpoint = Endpoint::UserPortfolio { username: username.to_string() };
        self.api_request(HttpMethod::Get, endpoint, None)
    }

    pub fn build_user_photos(&self, username: &str, params: &UserPhotosParameters) -> ApiResult<HttpRequest> {
        let endpoint = Endpoint::UserPhotos { username: username.to_string() };
        self.api_request(HttpMethod::Get, endpoint, Some(params))
    }

    pub fn build_user_likes(&self, username: &str, params: &PhotoListParameters) -> ApiResult<HttpRequest> {
        let endpoint = Endpoint::UserLikes { username: username.to_string() };
        self.api_request(HttpMethod::Get, endpoint, Some(params))
    }

    pub fn build_user_collections(&self, username: &str, params: &ListParameters) -> ApiResult<HttpRequest> {
        let endpoint = Endpoint::UserCollections { username: username.to_string() };
        self.api_request(HttpMethod::Get, endpoint, Some(params))
    }

    pub fn build_user_statistics(&self, username: &str, params: &StatisticsParameters) -> ApiResult<HttpRequest> {
        let endpoint = Endpoint::UserStatistics { username: username.to_string() };
        self.api_request(HttpMethod::Get, endpoint, Some(params))
    }

    pub fn parse_user(&self, response: HttpResponse) -> ApiResult<ApiResponse<User>> {
        self.parse(response, &[200])
    }

    pub fn parse_portfolio(&self, response: HttpResponse) -> ApiResult<ApiResponse<Portfolio>> {
        self.parse(response, &[200])
    }

    pub fn parse_user_statistics(&self, response: HttpResponse) -> ApiResult<ApiResponse<UserStatistics>> {
        let parsed: ApiResponse<UserStatistics> = self.parse(response, &[200])?;
        self.decoder.check_time_series("downloads.historical", &parsed.data.downloads.historical)?;
        self.decoder.check_time_series("views.historical", &parsed.data.views.historical)?;
        Ok(parsed)
    }

    // ---------------------------------------------------------------------
    // Photos
    // ---------------------------------------------------------------------

    pub fn build_photos(&self, params: &ListParameters) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::Photos, Some(params))
    }

    pub fn build_photo(&self, id: &str) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::Photo { id: id.to_string() }, None)
    }

    pub fn build_random_photo(&self, params: &RandomPhotoParameters) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::RandomPhoto, Some(params))
    }

    pub fn build_photo_statistics(&self, id: &str, params: &StatisticsParameters) -> ApiResult<HttpRequest> {
        let endpoint = Endpoint::PhotoStatistics { id: id.to_string() };
        self.api_request(HttpMethod::Get, endpoint, Some(params))
    }

    /// Register a download, as the API guidelines require when a photo is saved.
    pub fn build_track_download(&self, id: &str) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::PhotoDownload { id: id.to_string() }, None)
    }

    pub fn build_like_photo(&self, id: &str) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Post, Endpoint::PhotoLike { id: id.to_string() }, None)
    }

    pub fn build_unlike_photo(&self, id: &str) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Delete, Endpoint::PhotoLike { id: id.to_string() }, None)
    }

    /// Parses any photo listing: `/photos`, user photos and likes, collection
    /// and topic photos.
    pub fn parse_photos(&self, response: HttpResponse) -> ApiResult<ApiResponse<Vec<Photo>>> {
        self.parse(response, &[200])
    }

    pub fn parse_photo(&self, response: HttpResponse) -> ApiResult<ApiResponse<Photo>> {
        self.parse(response, &[200])
    }

    pub fn parse_random_photos(&self, response: HttpResponse) -> ApiResult<ApiResponse<Vec<Photo>>> {
        let parsed: ApiResponse<RandomPhotos> = self.parse(response, &[200])?;
        Ok(parsed.map(RandomPhotos::into_vec))
    }

    pub fn parse_photo_statistics(&self, response: HttpResponse) -> ApiResult<ApiResponse<PhotoStatistics>> {
        let parsed: ApiResponse<PhotoStatistics> = self.parse(response, &[200])?;
        let stats = &parsed.data;
        self.decoder.check_time_series("downloads.historical", &stats.downloads.historical)?;
        self.decoder.check_time_series("views.historical", &stats.views.historical)?;
        self.decoder.check_time_series("likes.historical", &stats.likes.historical)?;
        Ok(parsed)
    }

    pub fn parse_download_link(&self, response: HttpResponse) -> ApiResult<ApiResponse<DownloadLink>> {
        self.parse(response, &[200])
    }

    /// Liking answers 201, unliking 200; both carry the same body.
    pub fn parse_like(&self, response: HttpResponse) -> ApiResult<ApiResponse<LikeResult>> {
        self.parse(response, &[200, 201])
    }

    // ---------------------------------------------------------------------
    // Search
    // ---------------------------------------------------------------------

    pub fn build_search(&self, kind: SearchType, params: &SearchParameters) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, kind.endpoint(), Some(params))
    }

    pub fn parse_search_photos(&self, response: HttpResponse) -> ApiResult<ApiResponse<SearchResults<Photo>>> {
        self.parse(response, &[200])
    }

    pub fn parse_search_collections(
        &self,
        response: HttpResponse,
    ) -> ApiResult<ApiResponse<SearchResults<Collection>>> {
        self.parse(response, &[200])
    }

    pub fn parse_search_users(&self, response: HttpResponse) -> ApiResult<ApiResponse<SearchResults<User>>> {
        self.parse(response, &[200])
    }

    // ---------------------------------------------------------------------
    // Collections
    // ---------------------------------------------------------------------

    pub fn build_collections(&self, params: &ListParameters) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::Collections, Some(params))
    }

    pub fn build_collection(&self, id: &str) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::Collection { id: id.to_string() }, None)
    }

    pub fn build_collection_photos(&self, id: &str, params: &PhotoListParameters) -> ApiResult<HttpRequest> {
        let endpoint = Endpoint::CollectionPhotos { id: id.to_string() };
        self.api_request(HttpMethod::Get, endpoint, Some(params))
    }

    pub fn build_related_collections(&self, id: &str) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::RelatedCollections { id: id.to_string() }, None)
    }

    pub fn build_create_collection(&self, input: &NewCollection) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Post, Endpoint::Collections, Some(input))
    }

    pub fn build_update_collection(&self, id: &str, input: &CollectionUpdate) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Put, Endpoint::Collection { id: id.to_string() }, Some(input))
    }

    pub fn build_delete_collection(&self, id: &str) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Delete, Endpoint::Collection { id: id.to_string() }, None)
    }

    pub fn build_add_to_collection(&self, collection_id: &str, photo_id: &str) -> ApiResult<HttpRequest> {
        let endpoint = Endpoint::AddToCollection { collection_id: collection_id.to_string() };
        let params = CollectionPhotoParameters { photo_id: photo_id.to_string() };
        self.api_request(HttpMethod::Post, endpoint, Some(&params))
    }

    pub fn build_remove_from_collection(&self, collection_id: &str, photo_id: &str) -> ApiResult<HttpRequest> {
        let endpoint = Endpoint::RemoveFromCollection { collection_id: collection_id.to_string() };
        let params = CollectionPhotoParameters { photo_id: photo_id.to_string() };
        self.api_request(HttpMethod::Delete, endpoint, Some(&params))
    }

    pub fn parse_collection(&self, response: HttpResponse) -> ApiResult<ApiResponse<Collection>> {
        self.parse(response, &[200])
    }

    pub fn parse_created_collection(&self, response: HttpResponse) -> ApiResult<ApiResponse<Collection>> {
        self.parse(response, &[201])
    }

    pub fn parse_collections(&self, response: HttpResponse) -> ApiResult<ApiResponse<Vec<Collection>>> {
        self.parse(response, &[200])
    }

    pub fn parse_collection_photo(&self, response: HttpResponse) -> ApiResult<ApiResponse<CollectionPhotoResult>> {
        self.parse(response, &[200, 201])
    }

    pub fn parse_delete_collection(&self, response: HttpResponse) -> ApiResult<ResponseMetadata> {
        check_status(&response, &[204])?;
        Ok(ResponseMetadata::from_raw(&response.headers))
    }

    // ---------------------------------------------------------------------
    // Topics
    // ---------------------------------------------------------------------

    pub fn build_topics(&self, params: &TopicListParameters) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::Topics, Some(params))
    }

    pub fn build_topic(&self, id_or_slug: &str) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::Topic { id_or_slug: id_or_slug.to_string() }, None)
    }

    pub fn build_topic_photos(&self, id_or_slug: &str, params: &PhotoListParameters) -> ApiResult<HttpRequest> {
        let endpoint = Endpoint::TopicPhotos { id_or_slug: id_or_slug.to_string() };
        self.api_request(HttpMethod::Get, endpoint, Some(params))
    }

    pub fn parse_topic(&self, response: HttpResponse) -> ApiResult<ApiResponse<Topic>> {
        self.parse(response, &[200])
    }

    pub fn parse_topics(&self, response: HttpResponse) -> ApiResult<ApiResponse<Vec<Topic>>> {
        self.parse(response, &[200])
    }

    // ---------------------------------------------------------------------
    // Stats
    // ---------------------------------------------------------------------

    pub fn build_total_stats(&self) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::TotalStats, None)
    }

    pub fn build_monthly_stats(&self) -> ApiResult<HttpRequest> {
        self.api_request(HttpMethod::Get, Endpoint::MonthlyStats, None)
    }

    pub fn parse_total_stats(&self, response: HttpResponse) -> ApiResult<ApiResponse<TotalStats>> {
        self.parse(response, &[200])
    }

    pub fn parse_monthly_stats(&self, response: HttpResponse) -> ApiResult<ApiResponse<MonthlyStats>> {
        self.parse(response, &[200])
    }

    // ---------------------------------------------------------------------
    // OAuth
    // ---------------------------------------------------------------------

    /// The page a user visits to grant `scopes`. Needs an access key and a
    /// redirect URI in the configuration.
    pub fn authorize_url(&self, scopes: &[Scope]) -> ApiResult<String> {
        let client_id = self
            .config
            .access_key
            .as_deref()
            .ok_or_else(|| ApiError::config("access_key is required for OAuth"))?;
        let redirect_uri = self
            .config
            .redirect_uri
            .as_deref()
            .ok_or_else(|| ApiError::config("redirect_uri is required for OAuth"))?;
        let params = AuthorizeParameters {
            client_id: client_id.to_string(),
            redirect_uri: redirect_uri.to_string(),
            scopes: scopes.to_vec(),
        };
        let request = self.api_request(HttpMethod::Get, Endpoint::Authorize, Some(&params))?;
        Ok(request.url)
    }

    /// Exchange the code from the authorization redirect for a bearer token.
    pub fn build_token_exchange(&self, code: &str) -> ApiResult<HttpRequest> {
        let (client_id, client_secret, redirect_uri) = self.config.oauth_credentials()?;
        let params = TokenParameters {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            redirect_uri: redirect_uri.to_string(),
            code: code.to_string(),
        };
        self.api_request(HttpMethod::Post, Endpoint::Token, Some(&params))
    }

    pub fn parse_access_token(&self, response: HttpResponse) -> ApiResult<ApiResponse<AccessToken>> {
        self.parse(response, &[200])
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn credential_headers(&self) -> Vec<RequestHeader> {
        let mut headers = vec![RequestHeader::accept_version()];
        if let Some(key) = self.config.access_key.as_deref() {
            headers.push(RequestHeader::client_id(key));
        }
        if let Some(token) = self.bearer_token.as_deref() {
            headers.push(RequestHeader::bearer(token));
        }
        headers
    }

    /// OAuth endpoints live on the site host and carry their credentials in
    /// the query; everything else goes to the API host with auth headers.
    fn api_request(
        &self,
        method: HttpMethod,
        endpoint: Endpoint,
        params: Option<&dyn QueryItems>,
    ) -> ApiResult<HttpRequest> {
        if endpoint.is_oauth() {
            return build_request(method, &endpoint, &self.config.oauth_url, params, &[]);
        }
        build_request(method, &endpoint, &self.config.api_url, params, &self.credential_headers())
    }

    fn parse<T: DeserializeOwned>(&self, response: HttpResponse, expected: &[u16]) -> ApiResult<ApiResponse<T>> {
        check_status(&response, expected)?;
        let data = self.decoder.decode(&response.body)?;
        Ok(ApiResponse {
            data,
            metadata: ResponseMetadata::from_raw(&response.headers),
        })
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> ApiResult<()> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    let message = error_message(response);
    tracing::debug!(status = response.status, %message, "unexpected response status");
    match response.status {
        401 => Err(ApiError::Unauthorized(message)),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError { status, message }),
    }
}

/// The body's `errors` array joined, falling back to the raw text.
fn error_message(response: &HttpResponse) -> String {
    match serde_json::from_slice::<ErrorResponse>(&response.body) {
        Ok(body) if !body.errors.is_empty() => body.errors.join("; "),
        _ => response.body_text(),
    }
}
