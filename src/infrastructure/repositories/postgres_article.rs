use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleDescription, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleRecord, ArticleSlug, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const ARTICLE_COLUMNS: &str =
    "id, slug, title, description, body, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description)?,
            body: ArticleBody::new(row.body)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagLinkRow {
    article_id: i64,
    name: String,
}

#[derive(Debug, FromRow)]
struct FavoriteRow {
    article_id: i64,
    user_id: i64,
}

/// Hydrate article rows into full records with three batched relation
/// queries (authors with follower ids, tag names, favoriter ids) instead of
/// per-row lookups.
async fn hydrate_records(pool: &PgPool, rows: Vec<ArticleRow>) -> DomainResult<Vec<ArticleRecord>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let article_ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let author_ids: Vec<i64> = rows.iter().map(|row| row.author_id).collect();

    let authors = super::profiles::fetch_profiles_by_ids(pool, &author_ids).await?;

    let tag_rows = sqlx::query_as::<_, TagLinkRow>(
        "SELECT at.article_id, t.name
         FROM article_tags at
         JOIN tags t ON t.id = at.tag_id
         WHERE at.article_id = ANY($1)
         ORDER BY t.name",
    )
    .bind(&article_ids)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let mut tags: HashMap<i64, Vec<String>> = HashMap::new();
    for row in tag_rows {
        tags.entry(row.article_id).or_default().push(row.name);
    }

    let favorite_rows = sqlx::query_as::<_, FavoriteRow>(
        "SELECT article_id, user_id FROM favorites WHERE article_id = ANY($1)",
    )
    .bind(&article_ids)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let mut favoriters: HashMap<i64, Vec<i64>> = HashMap::new();
    for row in favorite_rows {
        favoriters.entry(row.article_id).or_default().push(row.user_id);
    }

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let author = authors
            .get(&row.author_id)
            .cloned()
            .ok_or_else(|| DomainError::Persistence("article author row missing".into()))?;
        let tag_names = tags.remove(&row.id).unwrap_or_default();
        let favoriter_ids = favoriters.remove(&row.id).unwrap_or_default();
        records.push(ArticleRecord {
            article: Article::try_from(row)?,
            author,
            tag_names,
            favoriter_ids,
        });
    }

    Ok(records)
}

async fn fetch_record_by_id(pool: &PgPool, id: ArticleId) -> DomainResult<Option<ArticleRecord>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
    ))
    .bind(i64::from(id))
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx)?;

    let Some(row) = row else {
        return Ok(None);
    };

    Ok(hydrate_records(pool, vec![row]).await?.into_iter().next())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleRecord> {
        let NewArticle {
            slug,
            title,
            description,
            body,
            tags,
            author_id,
            created_at,
            updated_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (slug, title, description, body, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, slug, title, description, body, author_id, created_at, updated_at",
        )
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(body.as_str())
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for tag in tags {
            // Upsert-by-name so concurrent inserts of the same tag converge
            // on one row; DO UPDATE makes RETURNING yield the id either way.
            let tag_id = sqlx::query_scalar::<_, i64>(
                "INSERT INTO tags (name) VALUES ($1)
                 ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                 RETURNING id",
            )
            .bind(tag.as_str())
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

            sqlx::query(
                "INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2)
                 ON CONFLICT (article_id, tag_id) DO NOTHING",
            )
            .bind(row.id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        let id = ArticleId::new(row.id)?;
        fetch_record_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article not found".into()))
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<ArticleRecord> {
        let ArticleUpdate {
            id,
            title,
            slug,
            description,
            body,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(String::from(description));
        }
        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(String::from(body));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id");

        let updated_id = builder
            .build_query_scalar::<i64>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        fetch_record_by_id(&self.pool, ArticleId::new(updated_id)?)
            .await?
            .ok_or_else(|| DomainError::Persistence("updated article not found".into()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn add_favorite(&self, article: ArticleId, user: UserId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO favorites (user_id, article_id) VALUES ($1, $2)
             ON CONFLICT (user_id, article_id) DO NOTHING",
        )
        .bind(i64::from(user))
        .bind(i64::from(article))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn remove_favorite(&self, article: ArticleId, user: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND article_id = $2")
            .bind(i64::from(user))
            .bind(i64::from(article))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ArticleFilter) {
        let mut has_where = false;
        let mut push_clause = |builder: &mut QueryBuilder<'a, Postgres>| {
            if has_where {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
                has_where = true;
            }
        };

        if let Some(tag) = &filter.tag {
            push_clause(builder);
            builder.push(
                "EXISTS (SELECT 1 FROM article_tags at JOIN tags t ON t.id = at.tag_id
                 WHERE at.article_id = a.id AND t.name = ",
            );
            builder.push_bind(tag);
            builder.push(")");
        }

        if let Some(author) = &filter.author {
            push_clause(builder);
            builder.push("a.author_id IN (SELECT id FROM users WHERE username = ");
            builder.push_bind(author);
            builder.push(")");
        }

        if let Some(favorited_by) = &filter.favorited_by {
            push_clause(builder);
            builder.push(
                "EXISTS (SELECT 1 FROM favorites fav JOIN users fu ON fu.id = fav.user_id
                 WHERE fav.article_id = a.id AND fu.username = ",
            );
            builder.push_bind(favorited_by);
            builder.push(")");
        }

        if let Some(followed_by) = filter.followed_by {
            push_clause(builder);
            builder.push("a.author_id IN (SELECT followee_id FROM follows WHERE follower_id = ");
            builder.push_bind(i64::from(followed_by));
            builder.push(")");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRecord>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(hydrate_records(&self.pool, vec![row])
            .await?
            .into_iter()
            .next())
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        limit: i64,
        offset: i64,
    ) -> DomainResult<Vec<ArticleRecord>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a"
        ));
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        hydrate_records(&self.pool, rows).await
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<i64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM articles a");
        Self::apply_filter(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
