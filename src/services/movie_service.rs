//! 电影服务：列表、详情与 owner-only 的增删改

use crate::{
    auth::ownership::require_owner,
    error::AppError,
    models::movie::*,
    repository::MovieRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

pub struct MovieService {
    db: PgPool,
}

impl MovieService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 创建电影，owner 绑定为请求者
    pub async fn create(&self, owner_id: Uuid, req: &CreateMovieRequest) -> Result<Movie, AppError> {
        let movie = MovieRepository::new(self.db.clone()).create(req, owner_id).await?;

        tracing::info!(movie_id = %movie.id, user_id = %owner_id, "Movie created");

        Ok(movie)
    }

    /// 电影详情
    pub async fn get(&self, id: Uuid) -> Result<Movie, AppError> {
        MovieRepository::new(self.db.clone())
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie"))
    }

    /// 电影列表
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Movie>, AppError> {
        MovieRepository::new(self.db.clone()).list(limit, offset).await
    }

    /// 更新电影
    ///
    /// 先判存在（404），再判归属（403）：请求者无法通过 403/404 的差异
    /// 探测不属于自己的资源是否存在之外的信息。
    pub async fn update(
        &self,
        id: Uuid,
        requester_id: Uuid,
        req: &UpdateMovieRequest,
    ) -> Result<Movie, AppError> {
        let repo = MovieRepository::new(self.db.clone());

        let movie = repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie"))?;

        require_owner(movie.user_id, requester_id)?;

        let updated = repo
            .update(id, req)
            .await?
            .ok_or_else(|| AppError::not_found("Movie"))?;

        tracing::info!(movie_id = %id, user_id = %requester_id, "Movie updated");

        Ok(updated)
    }

    /// 删除电影（评分与评论级联删除）
    pub async fn delete(&self, id: Uuid, requester_id: Uuid) -> Result<(), AppError> {
        let repo = MovieRepository::new(self.db.clone());

        let movie = repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie"))?;

        require_owner(movie.user_id, requester_id)?;

        repo.delete(id).await?;

        tracing::info!(movie_id = %id, user_id = %requester_id, "Movie deleted");

        Ok(())
    }
}
