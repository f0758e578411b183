use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a user
pub type UserId = Uuid;

/// A registered user, as owned by the persistence collaborator.
///
/// `following` and `followers` are kept symmetric by the write path: if A
/// follows B, then B's `followers` contains A. The engine reads these lists
/// as-is and never enforces or repairs the symmetry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Users this user follows
    #[serde(default)]
    pub following: Vec<UserId>,
    /// Users following this user
    #[serde(default)]
    pub followers: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}
