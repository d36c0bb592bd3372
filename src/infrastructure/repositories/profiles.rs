use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{ProfileRecord, UserId};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;

#[derive(Debug, FromRow)]
pub(super) struct ProfileRow {
    pub(super) id: i64,
    pub(super) username: String,
    pub(super) bio: Option<String>,
    pub(super) image: Option<String>,
    pub(super) follower_ids: Vec<i64>,
}

impl TryFrom<ProfileRow> for ProfileRecord {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(ProfileRecord {
            user_id: UserId::new(row.id)?,
            username: row.username,
            bio: row.bio,
            image: row.image,
            follower_ids: row.follower_ids,
        })
    }
}

/// Batch-load profile records keyed by user id, with follower ids
/// aggregated in the same query.
pub(super) async fn fetch_profiles_by_ids(
    pool: &PgPool,
    ids: &[i64],
) -> DomainResult<HashMap<i64, ProfileRecord>> {
    let rows = sqlx::query_as::<_, ProfileRow>(
        "SELECT u.id, u.username, u.bio, u.image,
                COALESCE(array_agg(f.follower_id)
                    FILTER (WHERE f.follower_id IS NOT NULL), '{}') AS follower_ids
         FROM users u
         LEFT JOIN follows f ON f.followee_id = u.id
         WHERE u.id = ANY($1)
         GROUP BY u.id",
    )
    .bind(ids)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let mut profiles = HashMap::with_capacity(rows.len());
    for row in rows {
        profiles.insert(row.id, ProfileRecord::try_from(row)?);
    }
    Ok(profiles)
}
