//! Comment repository (数据库访问层)

use crate::{error::AppError, models::comment::*};
use sqlx::PgPool;
use uuid::Uuid;

pub struct CommentRepository {
    db: PgPool,
}

impl CommentRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 根据 ID 查找评论
    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<Comment>, AppError> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(comment)
    }

    /// 列出某部电影的顶层评论（parent_id 为空）
    pub async fn list_top_level(&self, movie_id: Uuid) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE movie_id = $1 AND parent_id IS NULL ORDER BY created_at"
        )
        .bind(movie_id)
        .fetch_all(&self.db)
        .await?;

        Ok(comments)
    }

    /// 列出某条评论的直接回复
    pub async fn list_replies(&self, parent_id: Uuid) -> Result<Vec<Comment>, AppError> {
        let replies = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE parent_id = $1 ORDER BY created_at"
        )
        .bind(parent_id)
        .fetch_all(&self.db)
        .await?;

        Ok(replies)
    }

    /// 创建评论（parent_id 为空表示顶层评论）
    pub async fn create(
        &self,
        movie_id: Uuid,
        user_id: Uuid,
        content: &str,
        parent_id: Option<Uuid>,
    ) -> Result<Comment, AppError> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (content, movie_id, user_id, parent_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        )
        .bind(content)
        .bind(movie_id)
        .bind(user_id)
        .bind(parent_id)
        .fetch_one(&self.db)
        .await?;

        Ok(comment)
    }

    /// 删除评论（回复随外键级联删除）
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
