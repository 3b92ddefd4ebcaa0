//! Comment domain models
//!
//! Comments form a tree per movie: a top-level comment has `parent_id = None`,
//! a reply points at an existing comment on the same movie.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Create comment request
#[derive(Debug, Deserialize, validator::Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    pub parent_id: Option<Uuid>,
}

/// Comment response
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            movie_id: comment.movie_id,
            user_id: comment.user_id,
            parent_id: comment.parent_id,
            created_at: comment.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_comment_content_bounds() {
        let ok = CreateCommentRequest {
            content: "Loved the pacing.".to_string(),
            parent_id: None,
        };
        assert!(ok.validate().is_ok());

        let empty = CreateCommentRequest {
            content: String::new(),
            parent_id: None,
        };
        assert!(empty.validate().is_err());

        let too_long = CreateCommentRequest {
            content: "x".repeat(2001),
            parent_id: None,
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_comment_parent_id_optional_on_the_wire() {
        let req: CreateCommentRequest =
            serde_json::from_value(serde_json::json!({ "content": "First!" })).unwrap();
        assert!(req.parent_id.is_none());
    }
}
