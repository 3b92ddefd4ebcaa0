//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
};

use crate::{handlers, middleware::AppState};

/// 请求体上限（1 MiB，纯 JSON/表单接口用不到更大的包）
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（横幅、健康检查、注册登录、只读查询）
    let public_routes = Router::new()
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
        .route("/user/{id}", get(handlers::auth::get_user))
        .route("/movies", get(handlers::movie::list_movies))
        .route("/movies/{id}", get(handlers::movie::get_movie))
        .route("/movie/{movie_id}/ratings", get(handlers::rating::list_ratings))
        .route("/movie/{movie_id}/comments", get(handlers::comment::list_comments))
        .route("/comment/{comment_id}/replies", get(handlers::comment::list_replies));

    // 需要认证的路由（bearer 令牌 -> CurrentUser）
    let authenticated_routes = Router::new()
        // 电影
        .route("/movies", post(handlers::movie::create_movie))
        .route(
            "/movies/{id}",
            put(handlers::movie::update_movie)
                .delete(handlers::movie::delete_movie)
        )

        // 评分
        .route("/movie/{movie_id}/rate", post(handlers::rating::rate_movie))
        .route("/ratings/{id}", delete(handlers::rating::delete_rating))

        // 评论
        .route("/movie/{movie_id}/comment", post(handlers::comment::add_comment))
        .route("/comments/{id}", delete(handlers::comment::delete_comment))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::auth::middleware::require_auth,
        ));

    // 指标端点
    let metrics_routes = Router::new().route("/metrics", get(handlers::metrics::metrics_export));

    // 组合所有路由
    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .merge(metrics_routes)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(axum::middleware::from_fn(crate::middleware::request_tracking_middleware))
        .with_state(state)
}
