//! Photographers and their public profiles.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::decoder::{lenient, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub portfolio_url: Option<Url>,
    #[serde(default, deserialize_with = "lenient")]
    pub instagram_username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub twitter_username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub profile_image: Option<ProfileImage>,
    pub links: UserLinks,
    #[serde(default, deserialize_with = "lenient")]
    pub social: Option<SocialProfiles>,
    #[serde(default, deserialize_with = "lenient")]
    pub badge: Option<Badge>,
    pub total_likes: u32,
    pub total_photos: u32,
    pub total_collections: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub followers_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub following_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub downloads: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub for_hire: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub followed_by_user: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub small: Url,
    pub medium: Url,
    pub large: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLinks {
    #[serde(rename = "self")]
    pub self_link: Url,
    pub html: Url,
    pub photos: Url,
    #[serde(default, deserialize_with = "lenient")]
    pub likes: Option<Url>,
    #[serde(default, deserialize_with = "lenient")]
    pub portfolio: Option<Url>,
    #[serde(default, deserialize_with = "lenient")]
    pub following: Option<Url>,
    #[serde(default, deserialize_with = "lenient")]
    pub followers: Option<Url>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProfiles {
    #[serde(default, deserialize_with = "lenient")]
    pub instagram_username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub portfolio_url: Option<Url>,
    #[serde(default, deserialize_with = "lenient")]
    pub twitter_username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub paypal_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub title: String,
    pub primary: bool,
    pub slug: String,
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<Url>,
}

/// Body of `/users/{username}/portfolio`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<Url>,
}
