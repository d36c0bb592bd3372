//! In-memory ports and repositories used by the application-layer tests.

use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::PasswordHasher, security::TokenManager, time::Clock},
};
use crate::domain::article::{
    Article, ArticleBody, ArticleDescription, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleRecord, ArticleSlug, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::comment::{
    Comment, CommentId, CommentRecord, CommentRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, ProfileRecord, User, UserId, UserRepository, UserUpdate, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 14, 12, 0, 0).unwrap()
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
pub struct FakePasswordHasher;

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed::{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

#[derive(Default)]
pub struct FakeTokenManager;

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = test_instant();
        Ok(AuthTokenDto {
            token: format!("token-{}", i64::from(subject.user_id)),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let id = token
            .strip_prefix("token-")
            .and_then(|raw| raw.parse::<i64>().ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        Ok(authenticated(id))
    }
}

pub fn authenticated(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId(id),
        email: format!("user{id}@example.com"),
        issued_at: test_instant(),
        expires_at: test_instant() + Duration::hours(1),
    }
}

pub fn profile(id: i64, username: &str, follower_ids: Vec<i64>) -> ProfileRecord {
    ProfileRecord {
        user_id: UserId(id),
        username: username.to_string(),
        bio: None,
        image: None,
        follower_ids,
    }
}

#[derive(Default)]
struct UserState {
    users: Vec<User>,
    // (followee, follower)
    follows: HashSet<(i64, i64)>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<UserState>,
}

impl InMemoryUserRepository {
    pub fn with_user(self, username: &str, email: &str, password_hash: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_id += 1;
            let now = test_instant();
            let user = User {
                id: UserId(state.next_id),
                username: Username::new(username).unwrap(),
                email: Email::new(email).unwrap(),
                password_hash: crate::domain::user::PasswordHash::new(password_hash).unwrap(),
                bio: None,
                image: None,
                created_at: now,
                updated_at: now,
            };
            state.users.push(user);
        }
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
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
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|user| user.username.as_str() == username.as_str())
            .map(|user| {
                let followee = i64::from(user.id);
                let mut follower_ids: Vec<i64> = state
                    .follows
                    .iter()
                    .filter(|(fe, _)| *fe == followee)
                    .map(|(_, fr)| *fr)
                    .collect();
                follower_ids.sort_unstable();
                ProfileRecord {
                    user_id: user.id,
                    username: user.username.to_string(),
                    bio: user.bio.clone(),
                    image: user.image.clone(),
                    follower_ids,
                }
            }))
    }

    async fn add_follower(&self, followee: UserId, follower: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.follows.insert((i64::from(followee), i64::from(follower)));
        Ok(())
    }

    async fn remove_follower(&self, followee: UserId, follower: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.follows.remove(&(i64::from(followee), i64::from(follower)));
        Ok(())
    }
}

#[derive(Default)]
struct ArticleState {
    articles: Vec<Article>,
    tags: HashMap<i64, Vec<String>>,
    // (article, user)
    favorites: HashSet<(i64, i64)>,
    authors: HashMap<i64, ProfileRecord>,
    next_id: i64,
}

/// Backs both the read and write article repository traits so tests see a
/// single consistent store.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    state: Mutex<ArticleState>,
}

impl InMemoryArticleRepository {
    pub fn register_author(&self, author: ProfileRecord) {
        let mut state = self.state.lock().unwrap();
        state.authors.insert(i64::from(author.user_id), author);
    }

    fn record(state: &ArticleState, article: &Article) -> DomainResult<ArticleRecord> {
        let author = state
            .authors
            .get(&i64::from(article.author_id))
            .cloned()
            .ok_or_else(|| DomainError::Persistence("author not registered".into()))?;
        let article_id = i64::from(article.id);
        let mut favoriter_ids: Vec<i64> = state
            .favorites
            .iter()
            .filter(|(aid, _)| *aid == article_id)
            .map(|(_, uid)| *uid)
            .collect();
        favoriter_ids.sort_unstable();
        Ok(ArticleRecord {
            article: article.clone(),
            author,
            tag_names: state.tags.get(&article_id).cloned().unwrap_or_default(),
            favoriter_ids,
        })
    }

    fn matches(state: &ArticleState, article: &Article, filter: &ArticleFilter) -> bool {
        let article_id = i64::from(article.id);
        let author = state.authors.get(&i64::from(article.author_id));

        if let Some(tag) = &filter.tag {
            let tagged = state
                .tags
                .get(&article_id)
                .is_some_and(|names| names.iter().any(|name| name == tag));
            if !tagged {
                return false;
            }
        }
        if let Some(author_name) = &filter.author {
            if author.is_none_or(|profile| &profile.username != author_name) {
                return false;
            }
        }
        if let Some(favorited_by) = &filter.favorited_by {
            let user_id = state
                .authors
                .values()
                .find(|profile| &profile.username == favorited_by)
                .map(|profile| i64::from(profile.user_id));
            let favorited =
                user_id.is_some_and(|uid| state.favorites.contains(&(article_id, uid)));
            if !favorited {
                return false;
            }
        }
        if let Some(followed_by) = filter.followed_by {
            let follows = author
                .is_some_and(|profile| profile.follower_ids.contains(&i64::from(followed_by)));
            if !follows {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleRecord> {
        let mut state = self.state.lock().unwrap();
        if state
            .articles
            .iter()
            .any(|existing| existing.slug == article.slug)
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        state.next_id += 1;
        let id = state.next_id;
        let stored = Article {
            id: ArticleId(id),
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        state.tags.insert(
            id,
            article.tags.iter().map(ToString::to_string).collect(),
        );
        state.articles.push(stored.clone());
        Self::record(&state, &stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<ArticleRecord> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(description) = update.description {
            article.description = description;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        article.updated_at = update.updated_at;
        let article = article.clone();
        Self::record(&state, &article)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|article| article.id != id);
        if state.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        let article_id = i64::from(id);
        state.tags.remove(&article_id);
        state.favorites.retain(|(aid, _)| *aid != article_id);
        Ok(())
    }

    async fn add_favorite(&self, article: ArticleId, user: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.favorites.insert((i64::from(article), i64::from(user)));
        Ok(())
    }

    async fn remove_favorite(&self, article: ArticleId, user: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.favorites.remove(&(i64::from(article), i64::from(user)));
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRecord>> {
        let state = self.state.lock().unwrap();
        state
            .articles
            .iter()
            .find(|article| article.slug == *slug)
            .map(|article| Self::record(&state, article))
            .transpose()
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().any(|article| article.slug == *slug))
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        limit: i64,
        offset: i64,
    ) -> DomainResult<Vec<ArticleRecord>> {
        let state = self.state.lock().unwrap();
        let mut matching: Vec<&Article> = state
            .articles
            .iter()
            .filter(|article| Self::matches(&state, article, filter))
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });

        matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|article| Self::record(&state, article))
            .collect()
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<i64> {
        let state = self.state.lock().unwrap();
        let count = state
            .articles
            .iter()
            .filter(|article| Self::matches(&state, article, filter))
            .count();
        Ok(count as i64)
    }
}

/// Insert an article with fixed description and body, for tests that only
/// care about slug, title, author, and tags.
pub async fn seed_article(
    repo: &InMemoryArticleRepository,
    author_id: i64,
    title: &str,
    slug: &str,
    tags: &[&str],
) -> ArticleRecord {
    repo.insert(NewArticle {
        slug: ArticleSlug::new(slug).unwrap(),
        title: ArticleTitle::new(title).unwrap(),
        description: ArticleDescription::new("about").unwrap(),
        body: ArticleBody::new("content").unwrap(),
        tags: tags
            .iter()
            .map(|name| crate::domain::tag::TagName::new(*name).unwrap())
            .collect(),
        author_id: UserId(author_id),
        created_at: test_instant(),
        updated_at: test_instant(),
    })
    .await
    .unwrap()
}

#[derive(Default)]
struct CommentState {
    comments: Vec<Comment>,
    authors: HashMap<i64, ProfileRecord>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryCommentRepository {
    state: Mutex<CommentState>,
}

impl InMemoryCommentRepository {
    pub fn register_author(&self, author: ProfileRecord) {
        let mut state = self.state.lock().unwrap();
        state.authors.insert(i64::from(author.user_id), author);
    }

    fn record(state: &CommentState, comment: &Comment) -> DomainResult<CommentRecord> {
        let author = state
            .authors
            .get(&i64::from(comment.author_id))
            .cloned()
            .ok_or_else(|| DomainError::Persistence("author not registered".into()))?;
        Ok(CommentRecord {
            comment: comment.clone(),
            author,
        })
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<CommentRecord> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let stored = Comment {
            id: CommentId(state.next_id),
            body: comment.body,
            author_id: comment.author_id,
            article_id: comment.article_id,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state.comments.push(stored.clone());
        Self::record(&state, &stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state.comments.iter().find(|comment| comment.id == id).cloned())
    }

    async fn list_for_article(&self, article: ArticleId) -> DomainResult<Vec<CommentRecord>> {
        let state = self.state.lock().unwrap();
        let mut matching: Vec<&Comment> = state
            .comments
            .iter()
            .filter(|comment| comment.article_id == article)
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        matching
            .into_iter()
            .map(|comment| Self::record(&state, comment))
            .collect()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.comments.len();
        state.comments.retain(|comment| comment.id != id);
        if state.comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
