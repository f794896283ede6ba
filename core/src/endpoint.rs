//! Catalog of every API operation the client can address.
//!
//! Each variant carries only the path arguments it needs. Arguments are
//! opaque identifiers; escaping happens when the URL is assembled in
//! `request::build_request`, one segment at a time.

/// One logical API operation, resolving to exactly one path template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CurrentUser,
    User { username: String },
    UserPortfolio { username: String },
    UserPhotos { username: String },
    UserLikes { username: String },
    UserCollections { username: String },
    UserStatistics { username: String },

    Photos,
    Photo { id: String },
    RandomPhoto,
    PhotoStatistics { id: String },
    PhotoDownload { id: String },
    PhotoLike { id: String },

    PhotoSearch,
    CollectionSearch,
    UserSearch,

    Collections,
    Collection { id: String },
    CollectionPhotos { id: String },
    RelatedCollections { id: String },
    AddToCollection { collection_id: String },
    RemoveFromCollection { collection_id: String },

    Topics,
    Topic { id_or_slug: String },
    TopicPhotos { id_or_slug: String },

    TotalStats,
    MonthlyStats,

    Authorize,
    Token,
}

impl Endpoint {
    /// The canonical path for this operation, starting with `/`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }

    /// Path segments in order. Arguments are returned verbatim, one segment
    /// each, so a `/` inside an identifier never splits it.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::CurrentUser => vec!["me"],
            Endpoint::User { username } => vec!["users", username.as_str()],
            Endpoint::UserPortfolio { username } => vec!["users", username.as_str(), "portfolio"],
            Endpoint::UserPhotos { username } => vec!["users", username.as_str(), "photos"],
            Endpoint::UserLikes { username } => vec!["users", username.as_str(), "likes"],
            Endpoint::UserCollections { username } => vec!["users", username.as_str(), "collections"],
            Endpoint::UserStatistics { username } => vec!["users", username.as_str(), "statistics"],

            Endpoint::Photos => vec!["photos"],
            Endpoint::Photo { id } => vec!["photos", id.as_str()],
            Endpoint::RandomPhoto => vec!["photos", "random"],
            Endpoint::PhotoStatistics { id } => vec!["photos", id.as_str(), "statistics"],
            Endpoint::PhotoDownload { id } => vec!["photos", id.as_str(), "download"],
            Endpoint::PhotoLike { id } => vec!["photos", id.as_str(), "like"],

            Endpoint::PhotoSearch => vec!["search", "photos"],
            Endpoint::CollectionSearch => vec!["search", "collections"],
            Endpoint::UserSearch => vec!["search", "users"],

            Endpoint::Collections => vec!["collections"],
            Endpoint::Collection { id } => vec!["collections", id.as_str()],
            Endpoint::CollectionPhotos { id } => vec!["collections", id.as_str(), "photos"],
            Endpoint::RelatedCollections { id } => vec!["collections", id.as_str(), "related"],
            Endpoint::AddToCollection { collection_id } => vec!["collections", collection_id.as_str(), "add"],
            Endpoint::RemoveFromCollection { collection_id } => vec!["collections", collection_id.as_str(), "remove"],

            Endpoint::Topics => vec!["topics"],
            Endpoint::Topic { id_or_slug } => vec!["topics", id_or_slug.as_str()],
            Endpoint::TopicPhotos { id_or_slug } => vec!["topics", id_or_slug.as_str(), "photos"],

            Endpoint::TotalStats => vec!["stats", "total"],
            Endpoint::MonthlyStats => vec!["stats", "month"],

            Endpoint::Authorize => vec!["oauth", "authorize"],
            Endpoint::Token => vec!["oauth", "token"],
        }
    }

    /// OAuth endpoints live on the website host, not the API host.
    pub fn is_oauth(&self) -> bool {
        matches!(self, Endpoint::Authorize | Endpoint::Token)
    }
}
