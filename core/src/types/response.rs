//! Envelopes and small bodies returned alongside the main entities.

use std::fmt;

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::decoder::{lenient, Timestamp};

use super::photo::Photo;
use super::user::User;

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub total: u64,
    pub total_pages: u32,
    pub results: Vec<T>,
}

/// `/photos/random` returns a bare photo, or an array when `count` is set.
///
/// The shape is chosen from the first JSON token, so a broken field inside
/// either shape is reported at its own path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RandomPhotos {
    Many(Vec<Photo>),
    One(Box<Photo>),
}

impl<'de> Deserialize<'de> for RandomPhotos {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShapeVisitor;

        impl<'de> Visitor<'de> for ShapeVisitor {
            type Value = RandomPhotos;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a photo or an array of photos")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<RandomPhotos, A::Error> {
                Vec::<Photo>::deserialize(SeqAccessDeserializer::new(seq)).map(RandomPhotos::Many)
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<RandomPhotos, A::Error> {
                Photo::deserialize(MapAccessDeserializer::new(map)).map(|photo| RandomPhotos::One(Box::new(photo)))
            }
        }

        deserializer.deserialize_any(ShapeVisitor)
    }
}

impl RandomPhotos {
    pub fn into_vec(self) -> Vec<Photo> {
        match self {
            RandomPhotos::Many(photos) => photos,
            RandomPhotos::One(photo) => vec![*photo],
        }
    }
}

/// Body of `/photos/{id}/download`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub url: Url,
}

/// Body returned when a photo is liked or unliked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeResult {
    pub photo: Photo,
    pub user: User,
}

/// Error body: `{"errors": ["..."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Result of the authorization-code exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    #[serde(default, deserialize_with = "lenient")]
    pub refresh_token: Option<String>,
    /// Space-separated granted scopes.
    pub scope: String,
    /// Sent as Unix seconds.
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;

    #[test]
    fn search_page() {
        let page: SearchResults<Photo> = Decoder::new()
            .decode(include_bytes!("../../../fixtures/search_photos.json"))
            .unwrap();
        assert_eq!(page.total, 133);
        assert_eq!(page.total_pages, 14);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, "DSpHm6LMSHA");
    }

    #[test]
    fn random_photos_both_shapes() {
        let photo = include_str!("../../../fixtures/photo.json");
        let one: RandomPhotos = serde_json::from_str(photo).unwrap();
        assert_eq!(one.into_vec().len(), 1);

        let many: RandomPhotos = serde_json::from_str(&format!("[{photo},{photo}]")).unwrap();
        assert_eq!(many.into_vec().len(), 2);
    }

    #[test]
    fn random_photos_rejects_scalars() {
        let err = Decoder::new().decode::<RandomPhotos>(b"42").unwrap_err();
        assert!(matches!(err, crate::error::ApiError::Decode { ref message, .. } if message.contains("array of photos")));
    }

    #[test]
    fn access_token_epoch_created_at() {
        let token: AccessToken = Decoder::new()
            .decode(include_bytes!("../../../fixtures/token.json"))
            .unwrap();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.created_at.to_string(), "2015-07-10T16:07:45+00:00");
        assert!(token.refresh_token.is_some());
    }

    #[test]
    fn error_body() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"errors":["Username is missing","Password cannot be blank"]}"#).unwrap();
        assert_eq!(body.errors.len(), 2);
    }
}
