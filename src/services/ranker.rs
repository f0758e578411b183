use std::collections::HashMap;

use crate::models::{RecommendationResponse, RecommendedUser, User, UserId, UserStats};

use super::profiles::{CandidateProfile, RequesterProfile};
use super::scorer::SimilarityBreakdown;

/// Maximum number of candidates returned to the caller
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Orders scored candidates for presentation.
///
/// Zero-score candidates are dropped, the rest sort score-descending, and
/// ties break by ascending candidate id so the ordering is deterministic.
/// At most [`MAX_RECOMMENDATIONS`] entries survive.
pub fn rank_candidates(
    mut scored: Vec<(UserId, SimilarityBreakdown)>,
) -> Vec<(UserId, SimilarityBreakdown)> {
    scored.retain(|(_, breakdown)| breakdown.score > 0);
    scored.sort_by(|(id_a, a), (id_b, b)| b.score.cmp(&a.score).then_with(|| id_a.cmp(id_b)));
    scored.truncate(MAX_RECOMMENDATIONS);
    scored
}

/// Attaches display fields and requester aggregates to the ranked list.
///
/// `photo_count` is reported independently of the score: a candidate can
/// rank purely on likes/follows and still show how many photos they have.
pub fn build_response(
    requester: &RequesterProfile,
    ranked: Vec<(UserId, SimilarityBreakdown)>,
    candidates: &HashMap<UserId, CandidateProfile>,
    users_by_id: &HashMap<UserId, User>,
) -> RecommendationResponse {
    let recommendations: Vec<RecommendedUser> = ranked
        .into_iter()
        .filter_map(|(id, breakdown)| {
            let user = users_by_id.get(&id)?;
            let profile = candidates.get(&id)?;

            Some(RecommendedUser {
                id,
                username: user.username.clone(),
                bio: user.bio.clone(),
                profile_picture: user.profile_picture.clone(),
                similarity_score: breakdown.score,
                common_liked_photos: breakdown.common_liked_photos,
                common_followed_users: breakdown.common_followed_users,
                similar_tags: breakdown.similar_tags,
                photo_count: profile.photo_count,
            })
        })
        .collect();

    RecommendationResponse {
        recommendations,
        user_stats: UserStats {
            total_liked_photos: requester.liked_photo_ids.len(),
            total_followed_users: requester.following_ids.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use chrono::Utc;
    use uuid::Uuid;

    fn breakdown(score: u32) -> SimilarityBreakdown {
        SimilarityBreakdown {
            common_liked_photos: 0,
            common_followed_users: 0,
            similar_tags: score,
            score,
        }
    }

    #[test]
    fn test_zero_scores_are_dropped() {
        let keep = Uuid::new_v4();
        let drop = Uuid::new_v4();

        let ranked = rank_candidates(vec![(keep, breakdown(1)), (drop, breakdown(0))]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].0, keep);
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let low = Uuid::new_v4();
        let high = Uuid::new_v4();
        let mid = Uuid::new_v4();

        let ranked = rank_candidates(vec![
            (low, breakdown(1)),
            (high, breakdown(9)),
            (mid, breakdown(4)),
        ]);

        let scores: Vec<u32> = ranked.iter().map(|(_, b)| b.score).collect();
        assert_eq!(scores, vec![9, 4, 1]);
        assert_eq!(ranked[0].0, high);
    }

    #[test]
    fn test_ties_break_by_ascending_id() {
        let mut ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        ids.sort();

        // Feed in reverse to prove the tie-break reorders
        let ranked = rank_candidates(vec![
            (ids[2], breakdown(5)),
            (ids[1], breakdown(5)),
            (ids[0], breakdown(5)),
        ]);

        let order: Vec<Uuid> = ranked.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, ids.to_vec());
    }

    #[test]
    fn test_truncated_to_max_recommendations() {
        let scored: Vec<_> = (1..=15)
            .map(|score| (Uuid::new_v4(), breakdown(score)))
            .collect();

        let ranked = rank_candidates(scored);
        assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
        // Highest scores survive the cut
        assert_eq!(ranked[0].1.score, 15);
        assert_eq!(ranked.last().unwrap().1.score, 6);
    }

    #[test]
    fn test_build_response_attaches_display_fields_and_stats() {
        let candidate_id = Uuid::new_v4();

        let requester = RequesterProfile {
            liked_photo_ids: HashSet::from([Uuid::new_v4(), Uuid::new_v4()]),
            following_ids: HashSet::from([Uuid::new_v4()]),
            liked_tags: HashSet::new(),
        };

        let candidates = HashMap::from([(
            candidate_id,
            CandidateProfile {
                photo_count: 4,
                liked_photo_ids: HashSet::new(),
                following_ids: HashSet::new(),
                authored_tags: HashSet::new(),
            },
        )]);

        let users_by_id = HashMap::from([(
            candidate_id,
            User {
                id: candidate_id,
                username: "imogen".to_string(),
                bio: Some("Film only".to_string()),
                profile_picture: None,
                following: Vec::new(),
                followers: Vec::new(),
                created_at: Utc::now(),
            },
        )]);

        let response = build_response(
            &requester,
            vec![(candidate_id, breakdown(3))],
            &candidates,
            &users_by_id,
        );

        assert_eq!(response.recommendations.len(), 1);
        let rec = &response.recommendations[0];
        assert_eq!(rec.username, "imogen");
        assert_eq!(rec.bio.as_deref(), Some("Film only"));
        assert_eq!(rec.similarity_score, 3);
        assert_eq!(rec.photo_count, 4);

        assert_eq!(response.user_stats.total_liked_photos, 2);
        assert_eq!(response.user_stats.total_followed_users, 1);
    }

    #[test]
    fn test_empty_ranked_list_is_valid() {
        let requester = RequesterProfile {
            liked_photo_ids: HashSet::new(),
            following_ids: HashSet::new(),
            liked_tags: HashSet::new(),
        };

        let response = build_response(&requester, Vec::new(), &HashMap::new(), &HashMap::new());
        assert!(response.recommendations.is_empty());
        assert_eq!(response.user_stats.total_liked_photos, 0);
    }
}
