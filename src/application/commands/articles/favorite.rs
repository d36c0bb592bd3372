use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

impl ArticleCommandService {
    /// Mark an article as a favorite of the actor. Favoriting twice is a
    /// no-op; the refreshed article is returned either way.
    pub async fn favorite(
        &self,
        actor: &AuthenticatedUser,
        slug: String,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(slug)?;
        let record = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.write_repo
            .add_favorite(record.article.id, actor.id)
            .await?;
        self.reload(&slug, actor).await
    }

    /// Remove the actor's favorite mark. Idempotent like `favorite`.
    pub async fn unfavorite(
        &self,
        actor: &AuthenticatedUser,
        slug: String,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(slug)?;
        let record = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.write_repo
            .remove_favorite(record.article.id, actor.id)
            .await?;
        self.reload(&slug, actor).await
    }

    async fn reload(
        &self,
        slug: &ArticleSlug,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<ArticleDto> {
        let record = self
            .read_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(ArticleDto::project(&record, Some(actor.id)))
    }
}
