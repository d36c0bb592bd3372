use std::sync::Arc;

use crate::{
    application::ports::ClockPort,
    domain::{article::ArticleReadRepository, comment::CommentRepository},
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            clock,
        }
    }
}
