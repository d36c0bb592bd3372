use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, ProfileRecord, User, UserUpdate};
use crate::domain::user::value_objects::{Email, UserId, Username};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    /// Single existence probe across both unique columns, used by the
    /// registration pre-check.
    async fn exists_with_username_or_email(
        &self,
        username: &Username,
        email: &Email,
    ) -> DomainResult<bool>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn find_profile(&self, username: &Username) -> DomainResult<Option<ProfileRecord>>;

    /// Idempotent connect: inserting an existing follow edge is a no-op.
    async fn add_follower(&self, followee: UserId, follower: UserId) -> DomainResult<()>;

    /// Idempotent disconnect: removing an absent follow edge is a no-op.
    async fn remove_follower(&self, followee: UserId, follower: UserId) -> DomainResult<()>;
}
