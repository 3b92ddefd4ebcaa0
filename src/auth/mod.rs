//! Authentication and authorization module

pub mod jwt;
pub mod middleware;
pub mod ownership;
pub mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::{extract_token, require_auth, CurrentUser};
pub use ownership::require_owner;
pub use password::PasswordHasher;
