//! 服务层单元测试
//!
//! 登录流程、身份解析与 owner-only 变更规则

use movie_catalog::{
    auth::jwt::JwtService,
    error::AppError,
    models::comment::CreateCommentRequest,
    services::{AuthService, CommentService, MovieService},
};
use std::sync::Arc;
use uuid::Uuid;

mod common;
use common::{create_test_movie, create_test_user, setup_test_db};

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_login_success_returns_bearer_token() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    create_test_user(&pool, "alice", "pw1-long-enough", "alice@example.com")
        .await
        .expect("Failed to create test user");

    let jwt_service = Arc::new(JwtService::from_config(&config).unwrap());
    let auth_service = AuthService::new(pool, jwt_service.clone());

    let token = auth_service.login("alice", "pw1-long-enough").await.unwrap();
    assert_eq!(token.token_type, "bearer");

    // 令牌验证出的身份是该用户
    assert!(jwt_service.verify(&token.access_token).is_ok());
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_login_failures_are_indistinguishable() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    create_test_user(&pool, "alice", "pw1-long-enough", "alice@example.com")
        .await
        .expect("Failed to create test user");

    let jwt_service = Arc::new(JwtService::from_config(&config).unwrap());
    let auth_service = AuthService::new(pool, jwt_service);

    // 错误密码与未知用户名产生同一个对外错误
    let wrong_password = auth_service.login("alice", "wrong").await.unwrap_err();
    let unknown_user = auth_service.login("nobody", "whatever").await.unwrap_err();

    assert!(matches!(wrong_password, AppError::Unauthorized));
    assert!(matches!(unknown_user, AppError::Unauthorized));
    assert_eq!(wrong_password.user_message(), unknown_user.user_message());
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_resolve_identity_round_trip() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    let user_id = create_test_user(&pool, "alice", "pw1-long-enough", "alice@example.com")
        .await
        .unwrap();

    let jwt_service = Arc::new(JwtService::from_config(&config).unwrap());
    let auth_service = AuthService::new(pool, jwt_service.clone());

    let token = jwt_service.issue(&user_id).unwrap();
    let user = auth_service.resolve_identity(&token).await.unwrap();

    assert_eq!(user.id, user_id);
    assert_eq!(user.username, "alice");
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_resolve_identity_of_deleted_user_fails() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    let user_id = create_test_user(&pool, "ghost", "pw1-long-enough", "ghost@example.com")
        .await
        .unwrap();

    let jwt_service = Arc::new(JwtService::from_config(&config).unwrap());
    let token = jwt_service.issue(&user_id).unwrap();

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();

    let auth_service = AuthService::new(pool, jwt_service);
    let err = auth_service.resolve_identity(&token).await.unwrap_err();

    // 用户已删除的令牌仍然是 401，而不是 404
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_movie_update_checks_existence_before_ownership() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    let alice = create_test_user(&pool, "alice", "pw1-long-enough", "alice@example.com")
        .await
        .unwrap();
    let bob = create_test_user(&pool, "bob", "pw2-long-enough", "bob@example.com")
        .await
        .unwrap();
    let movie_id = create_test_movie(&pool, alice, "Stalker").await.unwrap();

    let movie_service = MovieService::new(pool);

    // 不存在的电影对任何请求者都是 404
    let err = movie_service.delete(Uuid::new_v4(), bob).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // 存在但不属于请求者的电影是 403
    let err = movie_service.delete(movie_id, bob).await.unwrap_err();
    assert!(matches!(err, AppError::Forbidden));

    // owner 自己删除成功
    movie_service.delete(movie_id, alice).await.unwrap();
}

#[tokio::test]
#[ignore = "需要数据库连接"]
async fn test_comment_reply_must_share_movie_with_parent() {
    let config = common::create_test_config();
    let pool = setup_test_db(&config).await;

    let alice = create_test_user(&pool, "alice", "pw1-long-enough", "alice@example.com")
        .await
        .unwrap();
    let movie_a = create_test_movie(&pool, alice, "Movie A").await.unwrap();
    let movie_b = create_test_movie(&pool, alice, "Movie B").await.unwrap();

    let comment_service = CommentService::new(pool);

    let root = comment_service
        .add(
            movie_a,
            alice,
            &CreateCommentRequest {
                content: "Root on A".to_string(),
                parent_id: None,
            },
        )
        .await
        .unwrap();

    // 同一电影下回复成功
    let reply = comment_service
        .add(
            movie_a,
            alice,
            &CreateCommentRequest {
                content: "Reply on A".to_string(),
                parent_id: Some(root.id),
            },
        )
        .await
        .unwrap();
    assert_eq!(reply.parent_id, Some(root.id));

    // 跨电影回复被拒绝
    let err = comment_service
        .add(
            movie_b,
            alice,
            &CreateCommentRequest {
                content: "Reply on B pointing at A".to_string(),
                parent_id: Some(root.id),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    // 指向不存在父评论的回复是 404
    let err = comment_service
        .add(
            movie_a,
            alice,
            &CreateCommentRequest {
                content: "Orphan reply".to_string(),
                parent_id: Some(Uuid::new_v4()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
