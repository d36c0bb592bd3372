use super::{ArticleQueryService, list::normalize_page};
use crate::{
    application::{
        dto::{ArticleDto, ArticleListDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleFilter,
};

#[derive(Default)]
pub struct FeedArticlesQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ArticleQueryService {
    /// Personal feed: articles authored by users the actor follows,
    /// newest first.
    pub async fn feed_articles(
        &self,
        actor: &AuthenticatedUser,
        query: FeedArticlesQuery,
    ) -> ApplicationResult<ArticleListDto> {
        let (limit, offset) = normalize_page(query.limit, query.offset);
        let filter = ArticleFilter {
            followed_by: Some(actor.id),
            ..ArticleFilter::default()
        };

        let records = self.read_repo.list(&filter, limit, offset).await?;
        let articles_count = self.read_repo.count(&filter).await?;

        let articles = records
            .iter()
            .map(|record| ArticleDto::project(record, Some(actor.id)))
            .collect();
        Ok(ArticleListDto {
            articles,
            articles_count,
        })
    }
}
