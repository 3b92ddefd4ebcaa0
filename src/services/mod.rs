//! Business logic services layer

pub mod auth_service;
pub mod comment_service;
pub mod movie_service;
pub mod rating_service;

pub use auth_service::AuthService;
pub use comment_service::CommentService;
pub use movie_service::MovieService;
pub use rating_service::RatingService;
