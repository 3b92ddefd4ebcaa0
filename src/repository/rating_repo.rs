//! Rating repository (数据库访问层)

use crate::{error::AppError, models::rating::*};
use sqlx::PgPool;
use uuid::Uuid;

pub struct RatingRepository {
    db: PgPool,
}

impl RatingRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 根据 ID 查找评分
    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<Rating>, AppError> {
        let rating = sqlx::query_as::<_, Rating>(
            "SELECT * FROM ratings WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(rating)
    }

    /// 列出某部电影的全部评分
    pub async fn list_for_movie(&self, movie_id: Uuid) -> Result<Vec<Rating>, AppError> {
        let ratings = sqlx::query_as::<_, Rating>(
            "SELECT * FROM ratings WHERE movie_id = $1 ORDER BY created_at DESC"
        )
        .bind(movie_id)
        .fetch_all(&self.db)
        .await?;

        Ok(ratings)
    }

    /// 创建评分
    pub async fn create(&self, movie_id: Uuid, user_id: Uuid, rating: f64) -> Result<Rating, AppError> {
        let rating = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO ratings (rating, movie_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#
        )
        .bind(rating)
        .bind(movie_id)
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        Ok(rating)
    }

    /// 删除评分
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM ratings WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
