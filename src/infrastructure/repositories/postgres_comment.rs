use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentRecord, CommentRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_COLUMNS: &str = "id, body, author_id, article_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    author_id: i64,
    article_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            body: CommentBody::new(row.body)?,
            author_id: UserId::new(row.author_id)?,
            article_id: ArticleId::new(row.article_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl PostgresCommentRepository {
    async fn hydrate(&self, rows: Vec<CommentRow>) -> DomainResult<Vec<CommentRecord>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<i64> = rows.iter().map(|row| row.author_id).collect();
        let authors = super::profiles::fetch_profiles_by_ids(&self.pool, &author_ids).await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let author = authors
                .get(&row.author_id)
                .cloned()
                .ok_or_else(|| DomainError::Persistence("comment author row missing".into()))?;
            records.push(CommentRecord {
                comment: Comment::try_from(row)?,
                author,
            });
        }
        Ok(records)
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<CommentRecord> {
        let NewComment {
            body,
            author_id,
            article_id,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (body, author_id, article_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, body, author_id, article_id, created_at, updated_at",
        )
        .bind(body.as_str())
        .bind(i64::from(author_id))
        .bind(i64::from(article_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.hydrate(vec![row])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Persistence("inserted comment not found".into()))
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_for_article(&self, article: ArticleId) -> DomainResult<Vec<CommentRecord>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE article_id = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(i64::from(article))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.hydrate(rows).await
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
