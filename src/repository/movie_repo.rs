//! Movie repository (数据库访问层)

use crate::{error::AppError, models::movie::*};
use sqlx::PgPool;
use uuid::Uuid;

pub struct MovieRepository {
    db: PgPool,
}

impl MovieRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 根据 ID 查找电影
    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<Movie>, AppError> {
        let movie = sqlx::query_as::<_, Movie>(
            "SELECT * FROM movies WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(movie)
    }

    /// 列出电影（按创建时间倒序）
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Movie>, AppError> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT * FROM movies ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(movies)
    }

    /// 创建电影（owner 在创建时绑定，之后不再变更）
    pub async fn create(&self, req: &CreateMovieRequest, owner_id: Uuid) -> Result<Movie, AppError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, release_date, genre, director, synopsis, runtime_minutes, language, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#
        )
        .bind(&req.title)
        .bind(req.release_date)
        .bind(&req.genre)
        .bind(&req.director)
        .bind(&req.synopsis)
        .bind(req.runtime_minutes)
        .bind(&req.language)
        .bind(owner_id)
        .fetch_one(&self.db)
        .await?;

        Ok(movie)
    }

    /// 更新电影（全量替换可变字段，user_id 不在更新列中）
    pub async fn update(&self, id: Uuid, req: &UpdateMovieRequest) -> Result<Option<Movie>, AppError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET
                title = $2,
                release_date = $3,
                genre = $4,
                director = $5,
                synopsis = $6,
                runtime_minutes = $7,
                language = $8,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(&req.title)
        .bind(req.release_date)
        .bind(&req.genre)
        .bind(&req.director)
        .bind(&req.synopsis)
        .bind(req.runtime_minutes)
        .bind(&req.language)
        .fetch_optional(&self.db)
        .await?;

        Ok(movie)
    }

    /// 删除电影（评分与评论随外键级联删除）
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
