//! Search kinds and their endpoints.

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;

/// What a search query looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    Photo,
    Collection,
    User,
}

impl SearchType {
    pub fn endpoint(self) -> Endpoint {
        match self {
            SearchType::Photo => Endpoint::PhotoSearch,
            SearchType::Collection => Endpoint::CollectionSearch,
            SearchType::User => Endpoint::UserSearch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_each_kind() {
        assert_eq!(SearchType::Photo.endpoint(), Endpoint::PhotoSearch);
        assert_eq!(SearchType::Collection.endpoint().path(), "/search/collections");
        assert_eq!(SearchType::User.endpoint().path(), "/search/users");
    }
}
