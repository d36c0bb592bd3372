use crate::domain::user::value_objects::{Email, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Email,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            created_at,
        }
    }
}

/// Partial update of the authenticated user's own record. Absent fields are
/// left untouched; `updated_at` is always refreshed.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub username: Option<Username>,
    pub email: Option<Email>,
    pub password_hash: Option<PasswordHash>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl UserUpdate {
    pub fn new(id: UserId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username: None,
            email: None,
            password_hash: None,
            bio: None,
            image: None,
            updated_at,
        }
    }

    pub fn with_username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_bio(mut self, bio: String) -> Self {
        self.bio = Some(bio);
        self
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    pub fn has_changes(&self) -> bool {
        self.username.is_some()
            || self.email.is_some()
            || self.password_hash.is_some()
            || self.bio.is_some()
            || self.image.is_some()
    }
}

/// Read model for a user profile: the public fields plus the ids of the
/// users following it, from which per-viewer `following` flags are computed.
#[derive(Debug, Clone)]
pub struct ProfileRecord {
    pub user_id: UserId,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub follower_ids: Vec<i64>,
}
