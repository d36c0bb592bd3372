use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            profiles::ProfileCommandService, users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            profiles::ProfileQueryService, tags::TagQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService,
        },
        comment::CommentRepository,
        tag::TagRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub profile_queries: Arc<ProfileQueryService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub tag_queries: Arc<TagQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        tag_repo: Arc<dyn TagRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(Arc::clone(&user_repo)));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let profile_queries = Arc::new(ProfileQueryService::new(Arc::clone(&user_repo)));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&article_read_repo),
        ));
        let tag_queries = Arc::new(TagQueryService::new(Arc::clone(&tag_repo)));

        Self {
            user_commands,
            profile_commands,
            article_commands,
            comment_commands,
            user_queries,
            profile_queries,
            article_queries,
            comment_queries,
            tag_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
