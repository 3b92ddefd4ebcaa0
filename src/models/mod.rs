//! 数据模型模块
//! 用户、电影、评分与评论的领域模型及请求/响应 DTO

pub mod auth;
pub mod comment;
pub mod movie;
pub mod rating;
pub mod user;
