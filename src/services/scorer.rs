use std::collections::HashSet;
use std::hash::Hash;

use super::profiles::{CandidateProfile, RequesterProfile};

/// Weight of a photo both users liked: the strongest taste signal
pub const WEIGHT_COMMON_LIKES: u32 = 3;
/// Weight of a user both users follow: a secondary social-graph signal
pub const WEIGHT_COMMON_FOLLOWS: u32 = 2;
/// Weight of a tag the candidate authors and the requester likes: the
/// weakest, most indirect signal
pub const WEIGHT_SIMILAR_TAGS: u32 = 1;

/// Component counts and the weighted score derived from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityBreakdown {
    pub common_liked_photos: u32,
    pub common_followed_users: u32,
    pub similar_tags: u32,
    pub score: u32,
}

fn overlap<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> u32 {
    a.intersection(b).count() as u32
}

/// Scores one candidate against the requester.
///
/// Pure function of the two profiles. The tag component is intentionally
/// asymmetric: it compares what the candidate *authors* against what the
/// requester *likes*, rewarding candidates whose own content matches the
/// requester's taste.
pub fn score_candidate(
    requester: &RequesterProfile,
    candidate: &CandidateProfile,
) -> SimilarityBreakdown {
    let common_liked_photos = overlap(&requester.liked_photo_ids, &candidate.liked_photo_ids);
    let common_followed_users = overlap(&requester.following_ids, &candidate.following_ids);
    let similar_tags = overlap(&candidate.authored_tags, &requester.liked_tags);

    SimilarityBreakdown {
        common_liked_photos,
        common_followed_users,
        similar_tags,
        score: WEIGHT_COMMON_LIKES * common_liked_photos
            + WEIGHT_COMMON_FOLLOWS * common_followed_users
            + WEIGHT_SIMILAR_TAGS * similar_tags,
    }
}
