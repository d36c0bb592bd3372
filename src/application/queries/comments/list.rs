use super::CommentQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

impl CommentQueryService {
    pub async fn list_comments(
        &self,
        actor: Option<&AuthenticatedUser>,
        slug: String,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let slug = ArticleSlug::new(slug)?;
        let article = self
            .article_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let viewer = actor.map(|a| a.id);
        let records = self
            .comment_repo
            .list_for_article(article.article.id)
            .await?;

        Ok(records
            .iter()
            .map(|record| CommentDto::project(record, viewer))
            .collect())
    }
}
