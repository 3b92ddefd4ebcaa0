//! Rating domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rating record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Rating {
    pub id: Uuid,
    pub rating: f64,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Rate movie request
#[derive(Debug, Deserialize, validator::Validate)]
pub struct RateMovieRequest {
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: f64,
}

/// Rating response
#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub id: Uuid,
    pub rating: f64,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id,
            rating: rating.rating,
            movie_id: rating.movie_id,
            user_id: rating.user_id,
            created_at: rating.created_at,
        }
    }
}
