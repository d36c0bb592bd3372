use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::tag::TagRepository;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    /// Every tag ever created; `tags` rows outlive the articles that
    /// introduced them.
    async fn list(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT name FROM tags ORDER BY name")
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
