//! 评分服务：评分的创建、查询与 owner-only 删除

use crate::{
    auth::ownership::require_owner,
    error::AppError,
    models::rating::*,
    repository::{MovieRepository, RatingRepository},
};
use sqlx::PgPool;
use uuid::Uuid;

pub struct RatingService {
    db: PgPool,
}

impl RatingService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 给电影评分
    ///
    /// 电影不存在返回 404。同一用户重复评分不做限制，聚合是读侧的事。
    pub async fn rate(
        &self,
        movie_id: Uuid,
        user_id: Uuid,
        req: &RateMovieRequest,
    ) -> Result<Rating, AppError> {
        self.require_movie(movie_id).await?;

        let rating = RatingRepository::new(self.db.clone())
            .create(movie_id, user_id, req.rating)
            .await?;

        tracing::info!(rating_id = %rating.id, movie_id = %movie_id, user_id = %user_id, "Movie rated");

        Ok(rating)
    }

    /// 某部电影的全部评分
    pub async fn list_for_movie(&self, movie_id: Uuid) -> Result<Vec<Rating>, AppError> {
        self.require_movie(movie_id).await?;

        RatingRepository::new(self.db.clone()).list_for_movie(movie_id).await
    }

    /// 删除评分（仅评分作者可删）
    pub async fn delete(&self, id: Uuid, requester_id: Uuid) -> Result<(), AppError> {
        let repo = RatingRepository::new(self.db.clone());

        let rating = repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Rating"))?;

        require_owner(rating.user_id, requester_id)?;

        repo.delete(id).await?;

        tracing::info!(rating_id = %id, user_id = %requester_id, "Rating deleted");

        Ok(())
    }

    async fn require_movie(&self, movie_id: Uuid) -> Result<(), AppError> {
        MovieRepository::new(self.db.clone())
            .find_by_id(&movie_id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie"))?;

        Ok(())
    }
}
