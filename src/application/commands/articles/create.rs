use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleDescription, ArticleTitle, NewArticle},
        errors::DomainError,
        tag::TagName,
    },
};

const MAX_SLUG_ATTEMPTS: usize = 5;

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl ArticleCommandService {
    /// Create an article owned by the actor. The slug is derived from the
    /// title; if a concurrent insert claims the same slug between the
    /// uniqueness probe and the write, the unique constraint rejects it and
    /// we retry with a fresh candidate.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let description = ArticleDescription::new(command.description)?;
        let body = ArticleBody::new(command.body)?;
        let tags = command
            .tag_list
            .into_iter()
            .map(TagName::new)
            .collect::<Result<Vec<_>, _>>()?;
        let now = self.clock.now();

        let mut last_conflict = None;
        for _ in 0..MAX_SLUG_ATTEMPTS {
            let slug = self.slug_service.generate_unique_slug(&title, None).await?;
            let new_article = NewArticle {
                slug,
                title: title.clone(),
                description: description.clone(),
                body: body.clone(),
                tags: tags.clone(),
                author_id: actor.id,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_article).await {
                Ok(created) => return Ok(ArticleDto::project(&created, Some(actor.id))),
                Err(DomainError::Conflict(msg)) => last_conflict = Some(msg),
                Err(other) => return Err(other.into()),
            }
        }

        Err(ApplicationError::conflict(last_conflict.unwrap_or_else(
            || "could not allocate a unique slug".to_string(),
        )))
    }
}
