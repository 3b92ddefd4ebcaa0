//! 认证相关的 HTTP 处理器

use crate::{
    error::AppError,
    middleware::AppState,
    models::{auth::LoginRequest, user::*},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// 注册
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let user = state.auth_service.signup(&req).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// 登录
///
/// 表单编码的 username + password；成功返回 bearer 令牌。
pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(req): Form<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.auth_service.login(&req.username, &req.password).await?;

    Ok(Json(token))
}

/// 获取用户公开信息
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.auth_service.get_user(id).await?;

    Ok(Json(UserResponse::from(user)))
}
