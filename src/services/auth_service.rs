//! 认证服务：注册、登录、令牌身份解析

use crate::{
    auth::jwt::JwtService,
    auth::password::PasswordHasher,
    error::{AppError, AuthError},
    models::{auth::TokenResponse, user::*},
    repository::UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self { db, jwt_service }
    }

    /// 用户注册
    ///
    /// 用户名重复返回 400；密码只存 Argon2 摘要。
    pub async fn signup(&self, req: &SignupRequest) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        if user_repo.find_by_username(&req.username).await?.is_some() {
            return Err(AppError::bad_request("Username already taken"));
        }

        let hasher = PasswordHasher::new();
        let password_hash = hasher.hash(&req.password)?;

        // 预检查之外仍可能并发撞名，唯一约束兜底
        let user = match user_repo.create(req, &password_hash).await {
            Ok(user) => user,
            Err(AppError::Database(e))
                if e.as_database_error().is_some_and(|d| d.is_unique_violation()) =>
            {
                return Err(AppError::bad_request("Username already taken"));
            }
            Err(e) => return Err(e),
        };

        tracing::info!(user_id = %user.id, username = %user.username, "User signed up");

        Ok(user)
    }

    /// 用户登录
    ///
    /// 用户不存在与密码错误对外折叠为同一个 401，防止探测用户名。
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        let user = match user_repo.find_by_username(username).await? {
            Some(user) => user,
            None => {
                tracing::debug!(username, "Login rejected: unknown username");
                return Err(AuthError::BadCredentials.into());
            }
        };

        let hasher = PasswordHasher::new();
        if !hasher.verify(password, &user.password_hash) {
            tracing::debug!(username, "Login rejected: wrong password");
            return Err(AuthError::BadCredentials.into());
        }

        let access_token = self.jwt_service.issue(&user.id)?;

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(TokenResponse::bearer(access_token))
    }

    /// 令牌 -> 用户记录
    ///
    /// 身份声明唯一被信任为事实的地方：先验签名与过期，
    /// 再确认 subject 仍然对应一个存在的用户。
    pub async fn resolve_identity(&self, token: &str) -> Result<User, AppError> {
        let user_id = self.jwt_service.verify(token)?;

        let user = UserRepository::new(self.db.clone())
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(user)
    }

    /// 查询用户公开信息
    pub async fn get_user(&self, id: Uuid) -> Result<User, AppError> {
        UserRepository::new(self.db.clone())
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))
    }
}
