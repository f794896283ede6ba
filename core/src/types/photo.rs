use serde::{Deserialize, Serialize};
use url::Url;

use crate::decoder::{lenient, Timestamp};

use super::location::{Exif, Location};
use super::user::User;

/// A single photo as returned by photo, search and listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub created_at: Timestamp,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub promoted_at: Option<Timestamp>,
    pub width: u32,
    pub height: u32,
    /// Dominant colour as `#RRGGBB`.
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub blur_hash: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alt_description: Option<String>,
    pub urls: PhotoUrls,
    pub links: PhotoLinks,
    pub likes: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub liked_by_user: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub downloads: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub views: Option<u64>,
    pub user: User,
    #[serde(default, deserialize_with = "lenient")]
    pub exif: Option<Exif>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "lenient")]
    pub tags: Option<Vec<Tag>>,
}

/// Rendition URLs, from the original upload down to a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub raw: Url,
    pub full: Url,
    pub regular: Url,
    pub small: Url,
    pub thumb: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoLinks {
    #[serde(rename = "self")]
    pub self_link: Url,
    pub html: Url,
    pub download: Url,
    /// Must be hit (see `UnsplashClient::build_track_download`) when a photo
    /// is downloaded.
    pub download_location: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;

    fn fixture() -> Photo {
        Decoder::new()
            .decode(include_bytes!("../../../fixtures/photo.json"))
            .unwrap()
    }

    #[test]
    fn decodes_known_photo() {
        let photo = fixture();
        assert_eq!(photo.id, "DSpHm6LMSHA");
        assert_eq!(photo.width, 5456);
        assert_eq!(photo.height, 3064);
        assert_eq!(photo.color.as_deref(), Some("#0c2626"));
        assert_eq!(photo.description.as_deref(), Some("Fog rolling over the ridge at dawn"));
        assert_eq!(photo.likes, 427);
        assert_eq!(photo.user.username, "kaiwen");
        assert_eq!(photo.urls.thumb.host_str(), Some("images.unsplash.com"));
        assert_eq!(photo.created_at.to_string(), "2016-05-03T15:00:28+00:00");
    }

    #[test]
    fn nested_entities_use_the_same_rules() {
        let photo = fixture();
        let exif = photo.exif.as_ref().unwrap();
        assert_eq!(exif.make.as_deref(), Some("SONY"));
        assert_eq!(exif.iso, Some(100));
        let position = photo.location.as_ref().and_then(|l| l.position).unwrap();
        assert!((position.latitude - 46.852_2).abs() < 1e-6);
        assert_eq!(photo.tags.as_ref().map(Vec::len), Some(2));
        assert!(photo.user.last_name.is_none());
    }

    #[test]
    fn serialize_then_decode_is_stable() {
        let photo = fixture();
        let json = serde_json::to_vec(&photo).unwrap();
        let back: Photo = Decoder::new().decode(&json).unwrap();
        assert_eq!(back, photo);
    }

    #[test]
    fn wrong_type_in_required_nested_field_reports_path() {
        let mut value: serde_json::Value =
            serde_json::from_slice(include_bytes!("../../../fixtures/photo.json")).unwrap();
        value["user"]["total_photos"] = serde_json::json!("many");
        let body = serde_json::to_vec(&value).unwrap();
        let err = Decoder::new().decode::<Photo>(&body).unwrap_err();
        match err {
            crate::error::ApiError::Decode { path, .. } => assert_eq!(path, "user.total_photos"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
