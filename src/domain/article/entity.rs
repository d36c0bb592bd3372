use crate::domain::article::value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle,
};
use crate::domain::tag::TagName;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tags: Vec<TagName>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial article update; a title change carries the regenerated slug with
/// it, and `updated_at` is always refreshed.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub description: Option<ArticleDescription>,
    pub body: Option<ArticleBody>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            description: None,
            body: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle, slug: ArticleSlug) -> Self {
        self.title = Some(title);
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }
}

/// Filter criteria for article listings: the logical AND of whichever
/// clauses are present. `followed_by` backs the personal feed.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited_by: Option<String>,
    pub followed_by: Option<UserId>,
}
