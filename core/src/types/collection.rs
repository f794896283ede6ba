use serde::{Deserialize, Serialize};
use url::Url;

use crate::decoder::{lenient, string_or_number, Timestamp};

use super::photo::{Photo, PhotoUrls};
use super::user::User;

/// A curated set of photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub published_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_collected_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub featured: Option<bool>,
    pub total_photos: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub private: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub share_key: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_photo: Option<Box<Photo>>,
    #[serde(default, deserialize_with = "lenient")]
    pub preview_photos: Option<Vec<PreviewPhoto>>,
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<User>,
    pub links: CollectionLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Url,
    pub html: Url,
    pub photos: Url,
    #[serde(default, deserialize_with = "lenient")]
    pub related: Option<Url>,
}

/// The reduced photo shape embedded in collection and topic previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewPhoto {
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub blur_hash: Option<String>,
    pub urls: PhotoUrls,
}

/// Body returned when a photo is added to or removed from a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPhotoResult {
    pub photo: Photo,
    pub collection: Collection,
    pub user: User,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;

    #[test]
    fn decodes_collection_with_cover() {
        let collection: Collection = Decoder::new()
            .decode(include_bytes!("../../../fixtures/collection.json"))
            .unwrap();
        assert_eq!(collection.id, "206");
        assert_eq!(collection.title, "Misty mornings");
        assert_eq!(collection.total_photos, 12);
        let cover = collection.cover_photo.as_deref().unwrap();
        assert_eq!(cover.id, "DSpHm6LMSHA");
        assert_eq!(cover.user.username, "kaiwen");
        assert_eq!(collection.preview_photos.as_ref().map(Vec::len), Some(1));
        assert!(collection.links.related.is_some());
    }

    #[test]
    fn numeric_and_string_ids() {
        let mut value: serde_json::Value =
            serde_json::from_slice(include_bytes!("../../../fixtures/collection.json")).unwrap();
        value["id"] = serde_json::json!("xyz-123");
        value["cover_photo"] = serde_json::Value::Null;
        let collection: Collection = serde_json::from_value(value).unwrap();
        assert_eq!(collection.id, "xyz-123");
        assert!(collection.cover_photo.is_none());
    }
}
