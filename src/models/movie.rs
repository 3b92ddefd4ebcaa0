//! Movie domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Movie record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub release_date: DateTime<Utc>,
    pub genre: String,
    pub director: String,
    pub synopsis: Option<String>,
    pub runtime_minutes: Option<i32>,
    pub language: Option<String>,

    // Ownership: set at creation, never reassigned
    pub user_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create movie request
#[derive(Debug, Deserialize, validator::Validate)]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    pub release_date: DateTime<Utc>,
    #[validate(length(min = 1, max = 64))]
    pub genre: String,
    #[validate(length(min = 1, max = 128))]
    pub director: String,
    #[validate(length(max = 4000))]
    pub synopsis: Option<String>,
    #[validate(range(min = 1, max = 600))]
    pub runtime_minutes: Option<i32>,
    #[validate(length(max = 32))]
    pub language: Option<String>,
}

/// Update movie request (full replacement of mutable fields)
#[derive(Debug, Deserialize, validator::Validate)]
pub struct UpdateMovieRequest {
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    pub release_date: DateTime<Utc>,
    #[validate(length(min = 1, max = 64))]
    pub genre: String,
    #[validate(length(min = 1, max = 128))]
    pub director: String,
    #[validate(length(max = 4000))]
    pub synopsis: Option<String>,
    #[validate(range(min = 1, max = 600))]
    pub runtime_minutes: Option<i32>,
    #[validate(length(max = 32))]
    pub language: Option<String>,
}

/// List query parameters
#[derive(Debug, Deserialize)]
pub struct MovieListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Movie response
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: Uuid,
    pub title: String,
    pub release_date: DateTime<Utc>,
    pub genre: String,
    pub director: String,
    pub synopsis: Option<String>,
    pub runtime_minutes: Option<i32>,
    pub language: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date,
            genre: movie.genre,
            director: movie.director,
            synopsis: movie.synopsis,
            runtime_minutes: movie.runtime_minutes,
            language: movie.language,
            user_id: movie.user_id,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}
