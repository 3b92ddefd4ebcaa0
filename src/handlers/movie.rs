//! 电影管理的 HTTP 处理器

use crate::{
    auth::middleware::CurrentUser,
    error::AppError,
    middleware::AppState,
    models::movie::*,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// 创建电影（owner = 请求者）
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Json(req): Json<CreateMovieRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let movie = state.movie_service.create(current_user.id, &req).await?;

    Ok((StatusCode::CREATED, Json(MovieResponse::from(movie))))
}

/// 电影列表
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MovieListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let limit = query.limit.unwrap_or(100).clamp(1, 500);
    let offset = query.offset.unwrap_or(0).max(0);

    let movies = state.movie_service.list(limit, offset).await?;

    let responses: Vec<MovieResponse> = movies.into_iter().map(MovieResponse::from).collect();

    Ok(Json(responses))
}

/// 电影详情
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let movie = state.movie_service.get(id).await?;

    Ok(Json(MovieResponse::from(movie)))
}

/// 更新电影（仅 owner）
pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMovieRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let movie = state.movie_service.update(id, current_user.id, &req).await?;

    Ok(Json(MovieResponse::from(movie)))
}

/// 删除电影（仅 owner）
pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.movie_service.delete(id, current_user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
