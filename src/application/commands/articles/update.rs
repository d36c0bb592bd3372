use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleDescription, ArticleSlug, ArticleTitle, ArticleUpdate},
        specifications::OwnedByActorSpec,
    },
};

#[derive(Default)]
pub struct UpdateArticleCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl ArticleCommandService {
    /// Update an article's content. Only the author may update; a title
    /// change regenerates the slug, while resubmitting the same title keeps
    /// the existing one.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        slug: String,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(slug)?;
        let record = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let spec = OwnedByActorSpec::new(record.article.author_id, actor.id);
        if !spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may update this article",
            ));
        }

        let mut update = ArticleUpdate::new(record.article.id, self.clock.now());

        if let Some(title) = command.title {
            let title = ArticleTitle::new(title)?;
            let new_slug = self
                .slug_service
                .generate_unique_slug(&title, Some(&record.article.slug))
                .await?;
            update = update.with_title(title, new_slug);
        }
        if let Some(description) = command.description {
            update = update.with_description(ArticleDescription::new(description)?);
        }
        if let Some(body) = command.body {
            update = update.with_body(ArticleBody::new(body)?);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(ArticleDto::project(&updated, Some(actor.id)))
    }
}
