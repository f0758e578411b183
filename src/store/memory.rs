use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{Photo, PhotoId, User, UserId};

use super::SocialStore;

/// On-disk snapshot format: one JSON document holding both collections
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// In-memory `SocialStore` backed by a JSON snapshot.
///
/// Read-only once constructed. Intended for demos and tests; a production
/// deployment implements `SocialStore` over its own persistence layer.
pub struct MemoryStore {
    users: HashMap<UserId, User>,
    photos: HashMap<PhotoId, Photo>,
}

impl MemoryStore {
    pub fn new(users: Vec<User>, photos: Vec<Photo>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
            photos: photos.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Loads a snapshot from a JSON file
    pub fn from_snapshot_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;

        tracing::info!(
            users = snapshot.users.len(),
            photos = snapshot.photos.len(),
            path = %path.as_ref().display(),
            "Loaded snapshot"
        );

        Ok(Self::new(snapshot.users, snapshot.photos))
    }
}

#[async_trait]
impl SocialStore for MemoryStore {
    async fn user_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).cloned())
    }

    async fn all_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.values().cloned().collect())
    }

    async fn photos_liked_by(&self, user_id: UserId) -> AppResult<Vec<Photo>> {
        Ok(self
            .photos
            .values()
            .filter(|p| p.is_liked_by(user_id))
            .cloned()
            .collect())
    }

    async fn photos_authored_by(&self, user_id: UserId) -> AppResult<Vec<Photo>> {
        Ok(self
            .photos
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn all_photos(&self) -> AppResult<Vec<Photo>> {
        Ok(self.photos.values().cloned().collect())
    }
}
