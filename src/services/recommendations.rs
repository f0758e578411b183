use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{RecommendationResponse, UserId};
use crate::store::SocialStore;

use super::profiles::extract_profiles;
use super::ranker::{build_response, rank_candidates};
use super::scorer::score_candidate;

/// Computes the ranked similar-user list for one requester.
///
/// Recomputed from scratch on every call: profiles are ephemeral and
/// nothing is cached between invocations, so a follow or like that lands
/// before the next call is simply reflected in the next result.
pub async fn recommend_users(
    store: Arc<dyn SocialStore>,
    requester_id: UserId,
) -> AppResult<RecommendationResponse> {
    let users = store.all_users().await?;
    let photos = store.all_photos().await?;

    let (requester, candidates) = extract_profiles(requester_id, &users, &photos)?;

    let scored: Vec<_> = candidates
        .iter()
        .map(|(id, profile)| (*id, score_candidate(&requester, profile)))
        .collect();
    let ranked = rank_candidates(scored);

    let users_by_id: HashMap<UserId, _> = users.into_iter().map(|u| (u.id, u)).collect();
    let response = build_response(&requester, ranked, &candidates, &users_by_id);

    tracing::info!(
        requester_id = %requester_id,
        candidate_count = candidates.len(),
        returned = response.recommendations.len(),
        "Computed user recommendations"
    );

    Ok(response)
}
