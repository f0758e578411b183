use serde::Serialize;

use super::UserId;

/// One ranked candidate, with the component counts that explain its score
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedUser {
    pub id: UserId,
    pub username: String,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub similarity_score: u32,
    pub common_liked_photos: u32,
    pub common_followed_users: u32,
    pub similar_tags: u32,
    /// Photos the candidate has authored, independent of the score
    pub photo_count: usize,
}

/// Aggregate stats about the requester's own activity
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_liked_photos: usize,
    pub total_followed_users: usize,
}

/// Full recommendation payload returned to the HTTP layer
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    /// At most 10 entries, similarity-score descending
    pub recommendations: Vec<RecommendedUser>,
    pub user_stats: UserStats,
}
