use std::collections::{HashMap, HashSet};

use crate::error::{AppError, AppResult};
use crate::models::{Photo, PhotoId, User, UserId};

/// Like/follow facts about the requesting user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequesterProfile {
    pub liked_photo_ids: HashSet<PhotoId>,
    pub following_ids: HashSet<UserId>,
    /// Union of tags across photos the requester liked
    pub liked_tags: HashSet<String>,
}

/// Like/follow/authorship facts about one candidate user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProfile {
    /// Number of photos the candidate has authored
    pub photo_count: usize,
    pub liked_photo_ids: HashSet<PhotoId>,
    pub following_ids: HashSet<UserId>,
    /// Union of tags across photos the candidate authored
    pub authored_tags: HashSet<String>,
}

/// Builds the requester profile and one candidate profile for every other
/// user in the population.
///
/// Every other user becomes a candidate; filtering on score happens
/// downstream. A user with no likes or no authored photos simply yields
/// empty sets. Photos whose author is not in the population are skipped
/// entirely, with a warning, rather than failing the computation.
pub fn extract_profiles(
    requester_id: UserId,
    users: &[User],
    photos: &[Photo],
) -> AppResult<(RequesterProfile, HashMap<UserId, CandidateProfile>)> {
    let requester = users
        .iter()
        .find(|u| u.id == requester_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", requester_id)))?;

    let known_users: HashSet<UserId> = users.iter().map(|u| u.id).collect();

    let mut requester_profile = RequesterProfile {
        liked_photo_ids: HashSet::new(),
        following_ids: requester.following.iter().copied().collect(),
        liked_tags: HashSet::new(),
    };

    let mut candidates: HashMap<UserId, CandidateProfile> = users
        .iter()
        .filter(|u| u.id != requester_id)
        .map(|u| {
            (
                u.id,
                CandidateProfile {
                    photo_count: 0,
                    liked_photo_ids: HashSet::new(),
                    following_ids: u.following.iter().copied().collect(),
                    authored_tags: HashSet::new(),
                },
            )
        })
        .collect();

    for photo in photos {
        if !known_users.contains(&photo.user_id) {
            tracing::warn!(
                photo_id = %photo.id,
                author_id = %photo.user_id,
                "Skipping photo with unknown author"
            );
            continue;
        }

        if let Some(author) = candidates.get_mut(&photo.user_id) {
            author.photo_count += 1;
            author.authored_tags.extend(photo.tags.iter().cloned());
        }

        for liker in &photo.likes {
            if *liker == requester_id {
                requester_profile.liked_photo_ids.insert(photo.id);
                requester_profile
                    .liked_tags
                    .extend(photo.tags.iter().cloned());
            } else if let Some(candidate) = candidates.get_mut(liker) {
                candidate.liked_photo_ids.insert(photo.id);
            }
        }
    }

    Ok((requester_profile, candidates))
}
