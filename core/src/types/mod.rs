//! Domain entities decoded from API responses.
//!
//! # Design
//! Plain owned records. Required fields are plain types and fail the decode
//! when missing or mistyped; every optional field is `Option` and decoded
//! through `decoder::lenient`. Entities that embed others (a photo's user, a
//! collection's cover photo) go through the same rules recursively.

mod collection;
mod location;
mod photo;
mod response;
mod statistics;
mod topic;
mod user;

pub use collection::{Collection, CollectionLinks, CollectionPhotoResult, PreviewPhoto};
pub use location::{Coordinate, Exif, Location};
pub use photo::{Photo, PhotoLinks, PhotoUrls, Tag};
pub use response::{AccessToken, DownloadLink, ErrorResponse, LikeResult, RandomPhotos, SearchResults};
pub use statistics::{
    DataPoint, MonthlyStats, PhotoStatistics, StatisticsEntry, TimeSeries, TotalStats, UserStatistics,
};
pub use topic::{Topic, TopicLinks, TopicStatus};
pub use user::{Badge, Portfolio, ProfileImage, SocialProfiles, User, UserLinks};
