mod photo;
mod recommendation;
mod user;

pub use photo::{Photo, PhotoId};
pub use recommendation::{RecommendationResponse, RecommendedUser, UserStats};
pub use user::{User, UserId};
