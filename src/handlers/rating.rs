//! 评分的 HTTP 处理器

use crate::{
    auth::middleware::CurrentUser,
    error::AppError,
    middleware::AppState,
    models::rating::*,
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

/// 给电影评分
pub async fn rate_movie(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(movie_id): Path<Uuid>,
    Json(req): Json<RateMovieRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let rating = state.rating_service.rate(movie_id, current_user.id, &req).await?;

    Ok((StatusCode::CREATED, Json(RatingResponse::from(rating))))
}

/// 某部电影的全部评分
pub async fn list_ratings(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let ratings = state.rating_service.list_for_movie(movie_id).await?;

    let responses: Vec<RatingResponse> = ratings.into_iter().map(RatingResponse::from).collect();

    Ok(Json(responses))
}

/// 删除评分（仅作者）
pub async fn delete_rating(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.rating_service.delete(id, current_user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
