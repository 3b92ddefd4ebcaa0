//! 评论的 HTTP 处理器

use crate::{
    auth::middleware::CurrentUser,
    error::AppError,
    middleware::AppState,
    models::comment::*,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// 发表评论或回复
pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(movie_id): Path<Uuid>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let comment = state.comment_service.add(movie_id, current_user.id, &req).await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// 某部电影的顶层评论
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let comments = state.comment_service.list_top_level(movie_id).await?;

    let responses: Vec<CommentResponse> = comments.into_iter().map(CommentResponse::from).collect();

    Ok(Json(responses))
}

/// 某条评论的直接回复
pub async fn list_replies(
    State(state): State<Arc<AppState>>,
    Path(comment_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let replies = state.comment_service.replies(comment_id).await?;

    let responses: Vec<CommentResponse> = replies.into_iter().map(CommentResponse::from).collect();

    Ok(Json(responses))
}

/// 删除评论（仅作者，回复级联删除）
pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.comment_service.delete(id, current_user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
