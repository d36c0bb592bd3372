use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        slug: String,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(slug)?;
        let record = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        Ok(ArticleDto::project(&record, actor.map(|a| a.id)))
    }
}
