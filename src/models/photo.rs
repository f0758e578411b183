use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Opaque identifier for a photo
pub type PhotoId = Uuid;

/// A photo, as owned by the persistence collaborator.
///
/// `tags` may contain duplicates at rest; the engine treats them as a set
/// when computing overlaps. The image payload itself never reaches the
/// engine and is not modeled here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: PhotoId,
    /// Author of the photo
    pub user_id: UserId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Users who liked this photo
    #[serde(default)]
    pub likes: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Photo {
    /// Whether the given user has liked this photo
    pub fn is_liked_by(&self, user_id: UserId) -> bool {
        self.likes.contains(&user_id)
    }
}
