use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleSlug, specifications::OwnedByActorSpec},
};

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        slug: String,
    ) -> ApplicationResult<()> {
        let slug = ArticleSlug::new(slug)?;
        let record = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let spec = OwnedByActorSpec::new(record.article.author_id, actor.id);
        if !spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may delete this article",
            ));
        }

        self.write_repo.delete(record.article.id).await?;
        Ok(())
    }
}
