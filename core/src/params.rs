//! Typed query parameters, one struct per operation family.
//!
//! # Design
//! Every parameters struct implements `QueryItems`, which emits its fields in
//! a fixed, documented order. Absent optional fields are omitted; list fields
//! collapse into one comma-separated value and are omitted when empty;
//! required fields are always emitted, even when empty. Wire names live in
//! `names` so tests and callers can refer to them directly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire names of every query parameter the client emits.
pub mod names {
    pub const PAGE: &str = "page";
    pub const PER_PAGE: &str = "per_page";
    pub const ORDER_BY: &str = "order_by";
    pub const ORIENTATION: &str = "orientation";
    pub const STATS: &str = "stats";
    pub const RESOLUTION: &str = "resolution";
    pub const QUANTITY: &str = "quantity";
    pub const COLLECTIONS: &str = "collections";
    pub const TOPICS: &str = "topics";
    pub const USERNAME: &str = "username";
    pub const QUERY: &str = "query";
    pub const CONTENT_FILTER: &str = "content_filter";
    pub const COUNT: &str = "count";
    pub const COLOR: &str = "color";
    pub const LANG: &str = "lang";
    pub const IDS: &str = "ids";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const PRIVATE: &str = "private";
    pub const PHOTO_ID: &str = "photo_id";
    pub const CLIENT_ID: &str = "client_id";
    pub const CLIENT_SECRET: &str = "client_secret";
    pub const REDIRECT_URI: &str = "redirect_uri";
    pub const RESPONSE_TYPE: &str = "response_type";
    pub const SCOPE: &str = "scope";
    pub const CODE: &str = "code";
    pub const GRANT_TYPE: &str = "grant_type";
}

/// A single name/value pair of a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    pub name: &'static str,
    pub value: String,
}

impl QueryParameter {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Anything that can be rendered into an ordered list of query parameters.
pub trait QueryItems {
    fn query_items(&self) -> Vec<QueryParameter>;
}

#[derive(Default)]
struct QueryBuilder(Vec<QueryParameter>);

impl QueryBuilder {
    fn required(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.0.push(QueryParameter::new(name, value.to_string()));
        self
    }

    fn optional(self, name: &'static str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.required(name, value),
            None => self,
        }
    }

    fn list(self, name: &'static str, values: &[String]) -> Self {
        if values.is_empty() {
            return self;
        }
        self.required(name, values.join(","))
    }

    fn finish(self) -> Vec<QueryParameter> {
        self.0
    }
}

/// Declares an enum whose variants map one-to-one onto wire codes.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $code:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $code)] $variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Sort order for photo and collection listings.
    OrderBy {
        Latest => "latest",
        Oldest => "oldest",
        Popular => "popular",
        Views => "views",
        Downloads => "downloads",
    }
}

wire_enum! {
    SearchOrder {
        Relevant => "relevant",
        Latest => "latest",
    }
}

wire_enum! {
    TopicOrder {
        Featured => "featured",
        Latest => "latest",
        Oldest => "oldest",
        Position => "position",
    }
}

wire_enum! {
    Orientation {
        Landscape => "landscape",
        Portrait => "portrait",
        Squarish => "squarish",
    }
}

wire_enum! {
    ContentFilter {
        Low => "low",
        High => "high",
    }
}

wire_enum! {
    Color {
        BlackAndWhite => "black_and_white",
        Black => "black",
        White => "white",
        Yellow => "yellow",
        Orange => "orange",
        Red => "red",
        Purple => "purple",
        Magenta => "magenta",
        Green => "green",
        Teal => "teal",
        Blue => "blue",
    }
}

wire_enum! {
    /// Interval unit of a statistics time series.
    Resolution {
        Days => "days",
    }
}

wire_enum! {
    /// OAuth permission scopes.
    Scope {
        Public => "public",
        ReadUser => "read_user",
        WriteUser => "write_user",
        ReadPhotos => "read_photos",
        WritePhotos => "write_photos",
        WriteLikes => "write_likes",
        WriteFollowers => "write_followers",
        ReadCollections => "read_collections",
        WriteCollections => "write_collections",
    }
}

/// Paging and ordering for `/photos`, `/collections` and user listings.
///
/// Emits: `page`, `per_page`, `order_by`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListParameters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub order_by: Option<OrderBy>,
}

impl ListParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }
}

impl QueryItems for ListParameters {
    fn query_items(&self) -> Vec<QueryParameter> {
        QueryBuilder::default()
            .optional(names::PAGE, self.page)
            .optional(names::PER_PAGE, self.per_page)
            .optional(names::ORDER_BY, self.order_by)
            .finish()
    }
}

/// Photo listings that can also filter by orientation: collection photos,
/// topic photos and user likes.
///
/// Emits: `page`, `per_page`, `order_by`, `orientation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoListParameters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub order_by: Option<OrderBy>,
    pub orientation: Option<Orientation>,
}

impl QueryItems for PhotoListParameters {
    fn query_items(&self) -> Vec<QueryParameter> {
        QueryBuilder::default()
            .optional(names::PAGE, self.page)
            .optional(names::PER_PAGE, self.per_page)
            .optional(names::ORDER_BY, self.order_by)
            .optional(names::ORIENTATION, self.orientation)
            .finish()
    }
}

/// `/users/{username}/photos`.
///
/// Emits: `page`, `per_page`, `order_by`, `stats`, `resolution`, `quantity`,
/// `orientation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPhotosParameters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub order_by: Option<OrderBy>,
    pub stats: Option<bool>,
    pub resolution: Option<Resolution>,
    pub quantity: Option<u32>,
    pub orientation: Option<Orientation>,
}

impl QueryItems for UserPhotosParameters {
    fn query_items(&self) -> Vec<QueryParameter> {
        QueryBuilder::default()
            .optional(names::PAGE, self.page)
            .optional(names::PER_PAGE, self.per_page)
            .optional(names::ORDER_BY, self.order_by)
            .optional(names::STATS, self.stats)
            .optional(names::RESOLUTION, self.resolution)
            .optional(names::QUANTITY, self.quantity)
            .optional(names::ORIENTATION, self.orientation)
            .finish()
    }
}

/// Photo and user statistics.
///
/// Emits: `resolution`, `quantity`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsParameters {
    pub resolution: Option<Resolution>,
    pub quantity: Option<u32>,
}

impl QueryItems for StatisticsParameters {
    fn query_items(&self) -> Vec<QueryParameter> {
        QueryBuilder::default()
            .optional(names::RESOLUTION, self.resolution)
            .optional(names::QUANTITY, self.quantity)
            .finish()
    }
}

/// `/photos/random`.
///
/// Emits: `collections`, `topics`, `username`, `query`, `orientation`,
/// `content_filter`, `count`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomPhotoParameters {
    pub collections: Vec<String>,
    pub topics: Vec<String>,
    pub username: Option<String>,
    pub query: Option<String>,
    pub orientation: Option<Orientation>,
    pub content_filter: Option<ContentFilter>,
    /// When set the response is an array of up to `count` photos.
    pub count: Option<u32>,
}

impl QueryItems for RandomPhotoParameters {
    fn query_items(&self) -> Vec<QueryParameter> {
        QueryBuilder::default()
            .list(names::COLLECTIONS, &self.collections)
            .list(names::TOPICS, &self.topics)
            .optional(names::USERNAME, self.username.as_deref())
            .optional(names::QUERY, self.query.as_deref())
            .optional(names::ORIENTATION, self.orientation)
            .optional(names::CONTENT_FILTER, self.content_filter)
            .optional(names::COUNT, self.count)
            .finish()
    }
}

/// `/search/{photos,collections,users}`. The filters after `per_page` only
/// affect photo searches; the API ignores them elsewhere.
///
/// Emits: `query`, `page`, `per_page`, `order_by`, `collections`,
/// `content_filter`, `color`, `orientation`, `lang`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParameters {
    pub query: String,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub order_by: Option<SearchOrder>,
    pub collections: Vec<String>,
    pub content_filter: Option<ContentFilter>,
    pub color: Option<Color>,
    pub orientation: Option<Orientation>,
    pub lang: Option<String>,
}

impl SearchParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_collections<I, S>(mut self, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collections = collections.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

impl QueryItems for SearchParameters {
    fn query_items(&self) -> Vec<QueryParameter> {
        QueryBuilder::default()
            .required(names::QUERY, &self.query)
            .optional(names::PAGE, self.page)
            .optional(names::PER_PAGE, self.per_page)
            .optional(names::ORDER_BY, self.order_by)
            .list(names::COLLECTIONS, &self.collections)
            .optional(names::CONTENT_FILTER, self.content_filter)
            .optional(names::COLOR, self.color)
            .optional(names::ORIENTATION, self.orientation)
            .optional(names::LANG, self.lang.as_deref())
            .finish()
    }
}

/// `/topics`.
///
/// Emits: `ids`, `page`, `per_page`, `order_by`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicListParameters {
    pub ids: Vec<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub order_by: Option<TopicOrder>,
}

impl QueryItems for TopicListParameters {
    fn query_items(&self) -> Vec<QueryParameter> {
        QueryBuilder::default()
            .list(names::IDS, &self.ids)
            .optional(names::PAGE, self.page)
            .optional(names::PER_PAGE, self.per_page)
            .optional(names::ORDER_BY, self.order_by)
            .finish()
    }
}

/// `POST /collections`.
///
/// Emits: `title`, `description`, `private`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCollection {
    pub title: String,
    pub description: Option<String>,
    pub private: Option<bool>,
}

impl QueryItems for NewCollection {
    fn query_items(&self) -> Vec<QueryParameter> {
        QueryBuilder::default()
            .required(names::TITLE, &self.title)
            .optional(names::DESCRIPTION, self.description.as_deref())
            .optional(names::PRIVATE, self.private)
            .finish()
    }
}

/// `PUT /collections/{id}`; only the fields that are set change.
///
/// Emits: `title`, `description`, `private`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub private: Option<bool>,
}

impl QueryItems for CollectionUpdate {
    fn query_items(&self) -> Vec<QueryParameter> {
        QueryBuilder::default()
            .optional(names::TITLE, self.title.as_deref())
            .optional(names::DESCRIPTION, self.description.as_deref())
            .optional(names::PRIVATE, self.private)
            .finish()
    }
}

/// Adding a photo to, or removing it from, a collection.
///
/// Emits: `photo_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPhotoParameters {
    pub photo_id: String,
}

impl QueryItems for CollectionPhotoParameters {
    fn query_items(&self) -> Vec<QueryParameter> {
        QueryBuilder::default()
            .required(names::PHOTO_ID, &self.photo_id)
            .finish()
    }
}

/// Query of the OAuth authorization page.
///
/// Emits: `client_id`, `redirect_uri`, `response_type`, `scope`. Scopes are
/// space separated, which form encoding renders as `public+read_user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeParameters {
    pub client_id: String,
    pub redirect_uri: String,
    pub scopes: Vec<Scope>,
}

impl QueryItems for AuthorizeParameters {
    fn query_items(&self) -> Vec<QueryParameter> {
        let scope = self
            .scopes
            .iter()
            .map(|scope| scope.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        QueryBuilder::default()
            .required(names::CLIENT_ID, &self.client_id)
            .required(names::REDIRECT_URI, &self.redirect_uri)
            .required(names::RESPONSE_TYPE, "code")
            .required(names::SCOPE, scope)
            .finish()
    }
}

/// Authorization-code exchange at `/oauth/token`.
///
/// Emits: `client_id`, `client_secret`, `redirect_uri`, `code`, `grant_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenParameters {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub code: String,
}

impl QueryItems for TokenParameters {
    fn query_items(&self) -> Vec<QueryParameter> {
        QueryBuilder::default()
            .required(names::CLIENT_ID, &self.client_id)
            .required(names::CLIENT_SECRET, &self.client_secret)
            .required(names::REDIRECT_URI, &self.redirect_uri)
            .required(names::CODE, &self.code)
            .required(names::GRANT_TYPE, "authorization_code")
            .finish()
    }
}
