//! 评论服务：带父子结构的评论树

use crate::{
    auth::ownership::require_owner,
    error::AppError,
    models::comment::*,
    repository::{CommentRepository, MovieRepository},
};
use sqlx::PgPool;
use uuid::Uuid;

pub struct CommentService {
    db: PgPool,
}

impl CommentService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 发表评论或回复
    ///
    /// parent_id 为空表示顶层评论。回复的父评论必须已存在（树中不可能
    /// 出现环），且必须属于同一部电影，跨电影回复返回 400。
    pub async fn add(
        &self,
        movie_id: Uuid,
        user_id: Uuid,
        req: &CreateCommentRequest,
    ) -> Result<Comment, AppError> {
        MovieRepository::new(self.db.clone())
            .find_by_id(&movie_id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie"))?;

        let repo = CommentRepository::new(self.db.clone());

        if let Some(parent_id) = req.parent_id {
            let parent = repo
                .find_by_id(&parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Parent comment"))?;

            if parent.movie_id != movie_id {
                return Err(AppError::bad_request(
                    "Parent comment belongs to a different movie",
                ));
            }
        }

        let comment = repo.create(movie_id, user_id, &req.content, req.parent_id).await?;

        tracing::info!(
            comment_id = %comment.id,
            movie_id = %movie_id,
            user_id = %user_id,
            is_reply = comment.parent_id.is_some(),
            "Comment added"
        );

        Ok(comment)
    }

    /// 某部电影的顶层评论
    pub async fn list_top_level(&self, movie_id: Uuid) -> Result<Vec<Comment>, AppError> {
        MovieRepository::new(self.db.clone())
            .find_by_id(&movie_id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie"))?;

        CommentRepository::new(self.db.clone()).list_top_level(movie_id).await
    }

    /// 某条评论的直接回复
    pub async fn replies(&self, comment_id: Uuid) -> Result<Vec<Comment>, AppError> {
        let repo = CommentRepository::new(self.db.clone());

        repo.find_by_id(&comment_id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment"))?;

        repo.list_replies(comment_id).await
    }

    /// 删除评论（仅评论作者可删，回复级联删除）
    pub async fn delete(&self, id: Uuid, requester_id: Uuid) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db.clone());

        let comment = repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment"))?;

        require_owner(comment.user_id, requester_id)?;

        repo.delete(id).await?;

        tracing::info!(comment_id = %id, user_id = %requester_id, "Comment deleted");

        Ok(())
    }
}
