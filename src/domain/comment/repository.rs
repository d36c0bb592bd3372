use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, CommentId, CommentRecord, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<CommentRecord>;

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;

    async fn list_for_article(&self, article: ArticleId) -> DomainResult<Vec<CommentRecord>>;

    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
