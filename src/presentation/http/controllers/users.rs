use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand, UpdateUserCommand},
    dto::UserDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub user: RegisterRequestBody,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequestBody {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user: LoginRequestBody,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequestBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub user: UpdateUserRequestBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequestBody {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserDto,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<Json<UserResponse>> {
    let command = RegisterUserCommand {
        username: payload.user.username,
        email: payload.user.email,
        password: payload.user.password,
    };

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<UserResponse>> {
    let command = LoginUserCommand {
        email: payload.user.email,
        password: payload.user.password,
    };

    state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

pub async fn current_user(
    Extension(state): Extension<HttpState>,
    auth: Authenticated,
) -> HttpResult<Json<UserResponse>> {
    let mut user = state
        .services
        .user_queries
        .current_user(&auth.user)
        .await
        .into_http()?;
    user.token = Some(auth.token);

    Ok(Json(UserResponse { user }))
}

pub async fn update_user(
    Extension(state): Extension<HttpState>,
    auth: Authenticated,
    Json(payload): Json<UpdateUserRequest>,
) -> HttpResult<Json<UserResponse>> {
    let command = UpdateUserCommand {
        username: payload.user.username,
        email: payload.user.email,
        password: payload.user.password,
        bio: payload.user.bio,
        image: payload.user.image,
    };

    let mut user = state
        .services
        .user_commands
        .update(&auth.user, command)
        .await
        .into_http()?;
    user.token = Some(auth.token);

    Ok(Json(UserResponse { user }))
}
