use super::user_repo::MockUserRepository;
use async_trait::async_trait;
use conduit::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleRecord, ArticleSlug,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use conduit::domain::comment::{
    Comment, CommentId, CommentRecord, CommentRepository, NewComment,
};
use conduit::domain::errors::{DomainError, DomainResult};
use conduit::domain::tag::TagRepository;
use conduit::domain::user::UserId;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct ArticleState {
    articles: Vec<Article>,
    tags: HashMap<i64, Vec<String>>,
    // every name ever upserted; survives article deletion like `tags` rows do
    known_tags: BTreeSet<String>,
    // (article, user)
    favorites: HashSet<(i64, i64)>,
    next_id: i64,
}

/// Backs both article repository traits. Author profiles are hydrated from
/// the user mock so follow state stays consistent across the API surface.
pub struct MockArticleRepository {
    users: Arc<MockUserRepository>,
    state: Mutex<ArticleState>,
}

impl MockArticleRepository {
    pub fn new(users: Arc<MockUserRepository>) -> Self {
        Self {
            users,
            state: Mutex::new(ArticleState::default()),
        }
    }

    pub fn all_tag_names(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.known_tags.iter().cloned().collect()
    }

    fn record(&self, state: &ArticleState, article: &Article) -> DomainResult<ArticleRecord> {
        let author = self
            .users
            .profile_of(article.author_id)
            .ok_or_else(|| DomainError::Persistence("article author row missing".into()))?;
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

    fn matches(&self, state: &ArticleState, article: &Article, filter: &ArticleFilter) -> bool {
        let article_id = i64::from(article.id);
        let author = self.users.profile_of(article.author_id);

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
            if author
                .as_ref()
                .is_none_or(|profile| &profile.username != author_name)
            {
                return false;
            }
        }
        if let Some(favorited_by) = &filter.favorited_by {
            let favorited = self
                .users
                .id_of(favorited_by)
                .is_some_and(|uid| state.favorites.contains(&(article_id, i64::from(uid))));
            if !favorited {
                return false;
            }
        }
        if let Some(followed_by) = filter.followed_by {
            let follows = author
                .as_ref()
                .is_some_and(|profile| profile.follower_ids.contains(&i64::from(followed_by)));
            if !follows {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl ArticleWriteRepository for MockArticleRepository {
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
        let names: Vec<String> = article.tags.iter().map(ToString::to_string).collect();
        state.known_tags.extend(names.iter().cloned());
        state.tags.insert(id, names);
        state.articles.push(stored.clone());
        self.record(&state, &stored)
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
        self.record(&state, &article)
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
impl ArticleReadRepository for MockArticleRepository {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleRecord>> {
        let state = self.state.lock().unwrap();
        state
            .articles
            .iter()
            .find(|article| article.slug == *slug)
            .map(|article| self.record(&state, article))
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
            .filter(|article| self.matches(&state, article, filter))
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
            .map(|article| self.record(&state, article))
            .collect()
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<i64> {
        let state = self.state.lock().unwrap();
        let count = state
            .articles
            .iter()
            .filter(|article| self.matches(&state, article, filter))
            .count();
        Ok(count as i64)
    }
}

#[derive(Default)]
struct CommentState {
    comments: Vec<Comment>,
    next_id: i64,
}

pub struct MockCommentRepository {
    users: Arc<MockUserRepository>,
    state: Mutex<CommentState>,
}

impl MockCommentRepository {
    pub fn new(users: Arc<MockUserRepository>) -> Self {
        Self {
            users,
            state: Mutex::new(CommentState::default()),
        }
    }

    fn record(&self, comment: &Comment) -> DomainResult<CommentRecord> {
        let author = self
            .users
            .profile_of(comment.author_id)
            .ok_or_else(|| DomainError::Persistence("comment author row missing".into()))?;
        Ok(CommentRecord {
            comment: comment.clone(),
            author,
        })
    }
}

#[async_trait]
impl CommentRepository for MockCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<CommentRecord> {
        let stored = {
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
            stored
        };
        self.record(&stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .find(|comment| comment.id == id)
            .cloned())
    }

    async fn list_for_article(&self, article: ArticleId) -> DomainResult<Vec<CommentRecord>> {
        let matching: Vec<Comment> = {
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
            matching.into_iter().cloned().collect()
        };
        matching
            .iter()
            .map(|comment| self.record(comment))
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

/// Lists whatever tags the article mock currently holds.
pub struct MockTagRepository {
    articles: Arc<MockArticleRepository>,
}

impl MockTagRepository {
    pub fn new(articles: Arc<MockArticleRepository>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl TagRepository for MockTagRepository {
    async fn list(&self) -> DomainResult<Vec<String>> {
        Ok(self.articles.all_tag_names())
    }
}
