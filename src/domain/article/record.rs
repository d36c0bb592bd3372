use crate::domain::article::entity::Article;
use crate::domain::user::ProfileRecord;

/// Article read model with its relations loaded: the author profile (with
/// follower ids), the tag names, and the ids of the favoriting users. The
/// per-viewer `favorited`/`following` flags are projected from these id
/// lists by the response mapper, never stored.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub article: Article,
    pub author: ProfileRecord,
    pub tag_names: Vec<String>,
    pub favoriter_ids: Vec<i64>,
}
