use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, ProfileRecord, User, UserId, UserRepository, UserUpdate,
    Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str =
    "id, username, email, password_hash, bio, image, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    bio: Option<String>,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            bio: row.bio,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            email,
            password_hash,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, email, password_hash, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, username, email, password_hash, bio, image, created_at, updated_at",
        )
        .bind(username.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn exists_with_username_or_email(
        &self,
        username: &Username,
        email: &Email,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 OR email = $2)",
        )
        .bind(username.as_str())
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let UserUpdate {
            id,
            username,
            email,
            password_hash,
            bio,
            image,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE users SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(username) = username {
            builder.push(", username = ");
            builder.push_bind(String::from(username));
        }
        if let Some(email) = email {
            builder.push(", email = ");
            builder.push_bind(String::from(email));
        }
        if let Some(password_hash) = password_hash {
            builder.push(", password_hash = ");
            builder.push_bind(String::from(password_hash));
        }
        if let Some(bio) = bio {
            builder.push(", bio = ");
            builder.push_bind(bio);
        }
        if let Some(image) = image {
            builder.push(", image = ");
            builder.push_bind(image);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder
            .push(" RETURNING id, username, email, password_hash, bio, image, created_at, updated_at");

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn find_profile(&self, username: &Username) -> DomainResult<Option<ProfileRecord>> {
        let row = sqlx::query_as::<_, super::profiles::ProfileRow>(
            "SELECT u.id, u.username, u.bio, u.image,
                    COALESCE(array_agg(f.follower_id)
                        FILTER (WHERE f.follower_id IS NOT NULL), '{}') AS follower_ids
             FROM users u
             LEFT JOIN follows f ON f.followee_id = u.id
             WHERE u.username = $1
             GROUP BY u.id",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ProfileRecord::try_from).transpose()
    }

    async fn add_follower(&self, followee: UserId, follower: UserId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO follows (follower_id, followee_id)
             VALUES ($1, $2)
             ON CONFLICT (follower_id, followee_id) DO NOTHING",
        )
        .bind(i64::from(follower))
        .bind(i64::from(followee))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn remove_follower(&self, followee: UserId, follower: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
            .bind(i64::from(follower))
            .bind(i64::from(followee))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
