use crate::application::{commands::comments::AddCommentCommand, dto::CommentDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub comment: AddCommentRequestBody,
}

#[derive(Debug, Deserialize)]
pub struct AddCommentRequestBody {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentDto>,
}

pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    auth: Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<AddCommentRequest>,
) -> HttpResult<Json<CommentResponse>> {
    let command = AddCommentCommand {
        slug,
        body: payload.comment.body,
    };

    state
        .services
        .comment_commands
        .add_comment(&auth.user, command)
        .await
        .into_http()
        .map(|comment| Json(CommentResponse { comment }))
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<CommentsResponse>> {
    state
        .services
        .comment_queries
        .list_comments(actor.0.as_ref(), slug)
        .await
        .into_http()
        .map(|comments| Json(CommentsResponse { comments }))
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    auth: Authenticated,
    Path((_slug, id)): Path<(String, i64)>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .comment_commands
        .delete_comment(&auth.user, id)
        .await
        .into_http()?;

    Ok(Json(serde_json::json!({})))
}
