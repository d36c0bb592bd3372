use super::profiles::ProfileDto;
use crate::domain::article::record::ArticleRecord;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: ProfileDto,
}

impl ArticleDto {
    /// Project a stored article into the viewer-relative representation.
    /// `favorited` and the author's `following` flag depend only on the
    /// record and the viewer id, never on ambient state.
    pub fn project(record: &ArticleRecord, viewer: Option<UserId>) -> Self {
        let favorited = viewer
            .map(|id| record.favoriter_ids.contains(&i64::from(id)))
            .unwrap_or(false);
        Self {
            slug: record.article.slug.to_string(),
            title: record.article.title.to_string(),
            description: record.article.description.to_string(),
            body: record.article.body.to_string(),
            tag_list: record.tag_names.clone(),
            created_at: record.article.created_at,
            updated_at: record.article.updated_at,
            favorited,
            favorites_count: record.favoriter_ids.len() as i64,
            author: ProfileDto::project(&record.author, viewer),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListDto {
    pub articles: Vec<ArticleDto>,
    pub articles_count: i64,
}
