use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleListDto},
    queries::articles::{FeedArticlesQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub article: CreateArticleRequestBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequestBody {
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub article: UpdateArticleRequestBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticleRequestBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListDto>> {
    let query = ListArticlesQuery {
        tag: params.tag,
        author: params.author,
        favorited: params.favorited,
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .article_queries
        .list_articles(actor.0.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}

pub async fn feed_articles(
    Extension(state): Extension<HttpState>,
    auth: Authenticated,
    Query(params): Query<FeedParams>,
) -> HttpResult<Json<ArticleListDto>> {
    let query = FeedArticlesQuery {
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .article_queries
        .feed_articles(&auth.user, query)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_slug(actor.0.as_ref(), slug)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    auth: Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = CreateArticleCommand {
        title: payload.article.title,
        description: payload.article.description,
        body: payload.article.body,
        tag_list: payload.article.tag_list,
    };

    state
        .services
        .article_commands
        .create_article(&auth.user, command)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    auth: Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = UpdateArticleCommand {
        title: payload.article.title,
        description: payload.article.description,
        body: payload.article.body,
    };

    state
        .services
        .article_commands
        .update_article(&auth.user, slug, command)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    auth: Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&auth.user, slug)
        .await
        .into_http()?;

    Ok(Json(serde_json::json!({})))
}

pub async fn favorite_article(
    Extension(state): Extension<HttpState>,
    auth: Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_commands
        .favorite(&auth.user, slug)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn unfavorite_article(
    Extension(state): Extension<HttpState>,
    auth: Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_commands
        .unfavorite(&auth.user, slug)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}
