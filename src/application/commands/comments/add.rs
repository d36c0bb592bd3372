use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleSlug,
        comment::{CommentBody, NewComment},
    },
};

pub struct AddCommentCommand {
    pub slug: String,
    pub body: String,
}

impl CommentCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let body = CommentBody::new(command.body)?;

        let article = self
            .article_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let created = self
            .comment_repo
            .insert(NewComment {
                body,
                author_id: actor.id,
                article_id: article.article.id,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(CommentDto::project(&created, Some(actor.id)))
    }
}
