use super::profiles::ProfileDto;
use crate::domain::comment::CommentRecord;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub author: ProfileDto,
}

impl CommentDto {
    pub fn project(record: &CommentRecord, viewer: Option<UserId>) -> Self {
        Self {
            id: record.comment.id.into(),
            created_at: record.comment.created_at,
            updated_at: record.comment.updated_at,
            body: record.comment.body.to_string(),
            author: ProfileDto::project(&record.author, viewer),
        }
    }
}
