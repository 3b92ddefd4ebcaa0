//! HTTP 处理器模块

pub mod health;
pub mod metrics;
pub mod auth;
pub mod movie;
pub mod rating;
pub mod comment;
