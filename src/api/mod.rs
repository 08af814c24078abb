//! API 模块
//!
//! 提供知识图谱、分享、测验与学习会话的 REST API。

#[cfg(test)]
mod api_tests;
pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

use crate::api::app_state::AppState;
use crate::api::middleware::{metrics_middleware, security_headers_middleware};
use crate::config::ServerConfig;
use axum::Router;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// 组装全部业务路由
pub fn create_router(app_state: AppState, server: &ServerConfig) -> Router {
    let metrics = app_state.metrics.clone();

    let router = Router::new()
        .merge(routes::concept_routes::create_concept_router())
        .merge(routes::share_routes::create_share_router())
        .merge(routes::quiz_routes::create_quiz_router())
        .merge(routes::learning_routes::create_learning_router())
        // Add security headers middleware to all routes
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(axum::middleware::from_fn_with_state(
            metrics,
            metrics_middleware,
        ))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout)))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    if server.cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
