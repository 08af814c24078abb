//! Concept Routes
//!
//! 概念、先修关系与学习路径路由。

use crate::api::handlers::concept_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;

/// 创建概念路由器
pub fn create_concept_router() -> Router<AppState> {
    Router::new()
        .route("/knowledge", post(upsert_concept).get(list_concepts))
        .route("/knowledge/:name", get(get_concept).delete(delete_concept))
        .route(
            "/relationships",
            post(create_relationship)
                .get(list_relationships)
                .delete(delete_relationship),
        )
        .route("/learning-path", get(learning_path))
}
