use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Photo, User, UserId};

pub mod memory;

pub use memory::MemoryStore;

/// Read-only query contract the recommendation engine consumes from the
/// persistence collaborator.
///
/// The engine never writes through this trait; concurrency control for any
/// concurrent mutation belongs to the implementor. Implementations are
/// expected to hand back a consistent snapshot per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialStore: Send + Sync {
    /// Resolve a single user by id
    async fn user_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Every registered user, in unspecified order
    async fn all_users(&self) -> AppResult<Vec<User>>;

    /// Photos the given user has liked
    async fn photos_liked_by(&self, user_id: UserId) -> AppResult<Vec<Photo>>;

    /// Photos the given user has authored
    async fn photos_authored_by(&self, user_id: UserId) -> AppResult<Vec<Photo>>;

    /// Every photo, for building candidate profiles in bulk
    async fn all_photos(&self) -> AppResult<Vec<Photo>>;
}
