use super::CommentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::CommentId, specifications::OwnedByActorSpec},
};

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        comment_id: i64,
    ) -> ApplicationResult<()> {
        let id = CommentId::new(comment_id)?;
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let spec = OwnedByActorSpec::new(comment.author_id, actor.id);
        if !spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may delete this comment",
            ));
        }

        self.comment_repo.delete(id).await?;
        Ok(())
    }
}
