use crate::domain::user::{ProfileRecord, UserId};
use serde::Serialize;

/// Public view of another user, with the `following` flag computed for the
/// requesting viewer. Anonymous viewers always see `following: false`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDto {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

impl ProfileDto {
    pub fn project(record: &ProfileRecord, viewer: Option<UserId>) -> Self {
        let following = viewer
            .map(|id| record.follower_ids.contains(&i64::from(id)))
            .unwrap_or(false);
        Self {
            username: record.username.clone(),
            bio: record.bio.clone(),
            image: record.image.clone(),
            following,
        }
    }
}
