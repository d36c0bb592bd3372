use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleListDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleFilter,
};

#[derive(Default)]
pub struct ListArticlesQuery {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

pub(super) fn normalize_page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = match limit {
        Some(value) if value > 0 => value.min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    };
    let offset = offset.filter(|value| *value > 0).unwrap_or(0);
    (limit, offset)
}

impl ArticleQueryService {
    /// Global article listing, newest first, optionally filtered by tag,
    /// author username, or favoriting username. The total count covers the
    /// whole filtered set, not the returned page.
    pub async fn list_articles(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticleListDto> {
        let (limit, offset) = normalize_page(query.limit, query.offset);
        let filter = ArticleFilter {
            tag: query.tag,
            author: query.author,
            favorited_by: query.favorited,
            followed_by: None,
        };

        let viewer = actor.map(|a| a.id);
        let records = self.read_repo.list(&filter, limit, offset).await?;
        let articles_count = self.read_repo.count(&filter).await?;

        let articles = records
            .iter()
            .map(|record| ArticleDto::project(record, viewer))
            .collect();
        Ok(ArticleListDto {
            articles,
            articles_count,
        })
    }
}
