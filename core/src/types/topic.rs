use serde::{Deserialize, Serialize};
use url::Url;

use crate::decoder::{lenient, Timestamp};

use super::collection::PreviewPhoto;
use super::photo::Photo;
use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    Open,
    Closed,
}

/// An editorial theme that photos can be submitted to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    pub published_at: Timestamp,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub starts_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub ends_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub only_submissions_after: Option<Timestamp>,
    pub featured: bool,
    pub total_photos: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<TopicStatus>,
    pub links: TopicLinks,
    #[serde(default, deserialize_with = "lenient")]
    pub owners: Option<Vec<User>>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_photo: Option<Box<Photo>>,
    #[serde(default, deserialize_with = "lenient")]
    pub preview_photos: Option<Vec<PreviewPhoto>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicLinks {
    #[serde(rename = "self")]
    pub self_link: Url,
    pub html: Url,
    pub photos: Url,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;

    #[test]
    fn decodes_topic() {
        let topic: Topic = Decoder::new()
            .decode(include_bytes!("../../../fixtures/topic.json"))
            .unwrap();
        assert_eq!(topic.slug, "nature");
        assert_eq!(topic.status, Some(TopicStatus::Open));
        assert!(topic.featured);
        assert!(topic.ends_at.is_none());
        assert_eq!(topic.owners.as_ref().map(Vec::len), Some(1));
        assert_eq!(topic.cover_photo.as_ref().map(|p| p.likes), Some(427));
    }

    #[test]
    fn unknown_status_is_dropped() {
        let mut value: serde_json::Value =
            serde_json::from_slice(include_bytes!("../../../fixtures/topic.json")).unwrap();
        value["status"] = serde_json::json!("archived");
        let topic: Topic = serde_json::from_value(value).unwrap();
        assert!(topic.status.is_none());
    }
}
