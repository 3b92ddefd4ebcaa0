//! Database repository layer

pub mod comment_repo;
pub mod movie_repo;
pub mod rating_repo;
pub mod user_repo;

pub use comment_repo::CommentRepository;
pub use movie_repo::MovieRepository;
pub use rating_repo::RatingRepository;
pub use user_repo::UserRepository;
