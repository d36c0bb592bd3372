use async_trait::async_trait;
use conduit::domain::errors::{DomainError, DomainResult};
use conduit::domain::user::{
    Email, NewUser, ProfileRecord, User, UserId, UserRepository, UserUpdate, Username,
};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    users: Vec<User>,
    // (followee, follower)
    follows: HashSet<(i64, i64)>,
    next_id: i64,
}

#[derive(Default)]
pub struct MockUserRepository {
    state: Mutex<State>,
}

impl MockUserRepository {
    pub fn id_of(&self, username: &str) -> Option<UserId> {
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|user| user.username.as_str() == username)
            .map(|user| user.id)
    }

    /// Snapshot of a user's profile, used by the article and comment mocks
    /// to hydrate author data the way the SQL joins do.
    pub fn profile_of(&self, id: UserId) -> Option<ProfileRecord> {
        let state = self.state.lock().unwrap();
        state.users.iter().find(|user| user.id == id).map(|user| {
            let mut follower_ids: Vec<i64> = state
                .follows
                .iter()
                .filter(|(followee, _)| *followee == i64::from(id))
                .map(|(_, follower)| *follower)
                .collect();
            follower_ids.sort_unstable();
            ProfileRecord {
                user_id: user.id,
                username: user.username.to_string(),
                bio: user.bio.clone(),
                image: user.image.clone(),
                follower_ids,
            }
        })
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        let taken = state.users.iter().any(|user| {
            user.username.as_str() == new_user.username.as_str()
                || user.email.as_str() == new_user.email.as_str()
        });
        if taken {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        state.next_id += 1;
        let user = User {
            id: UserId(state.next_id),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            bio: None,
            image: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|user| user.email.as_str() == email.as_str())
            .cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|user| user.username.as_str() == username.as_str())
            .cloned())
    }

    async fn exists_with_username_or_email(
        &self,
        username: &Username,
        email: &Email,
    ) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().any(|user| {
            user.username.as_str() == username.as_str() || user.email.as_str() == email.as_str()
        }))
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        let user = state
            .users
            .iter_mut()
            .find(|user| user.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(bio) = update.bio {
            user.bio = Some(bio);
        }
        if let Some(image) = update.image {
            user.image = Some(image);
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn find_profile(&self, username: &Username) -> DomainResult<Option<ProfileRecord>> {
        let id = {
            let state = self.state.lock().unwrap();
            state
                .users
                .iter()
                .find(|user| user.username.as_str() == username.as_str())
                .map(|user| user.id)
        };
        Ok(id.and_then(|id| self.profile_of(id)))
    }

    async fn add_follower(&self, followee: UserId, follower: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .follows
            .insert((i64::from(followee), i64::from(follower)));
        Ok(())
    }

    async fn remove_follower(&self, followee: UserId, follower: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .follows
            .remove(&(i64::from(followee), i64::from(follower)));
        Ok(())
    }
}
