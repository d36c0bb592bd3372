use crate::domain::article::entity::{ArticleFilter, ArticleUpdate, NewArticle};
use crate::domain::article::record::ArticleRecord;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Insert the article and upsert-and-link its tags. Slug uniqueness is
    /// backed by a store-level constraint; a losing race surfaces as
    /// `DomainError::Conflict` for the caller to retry with a fresh slug.
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleRecord>;

    async fn update(&self, update: ArticleUpdate) -> DomainResult<ArticleRecord>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;

    /// Idempotent: favoriting an already-favorited article is a no-op.
    async fn add_favorite(&self, article: ArticleId, user: UserId) -> DomainResult<()>;

    /// Idempotent: unfavoriting a non-favorited article is a no-op.
    async fn remove_favorite(&self, article: ArticleId, user: UserId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRecord>>;

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool>;

    /// Page of records matching the filter, newest first.
    async fn list(
        &self,
        filter: &ArticleFilter,
        limit: i64,
        offset: i64,
    ) -> DomainResult<Vec<ArticleRecord>>;

    /// Total match count, computed independently of the page window.
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<i64>;
}
