//! Learning Routes
//!
//! 学习会话与课程大纲路由。

use crate::api::handlers::{learning_handler::*, manifest_handler::mcp_manifest};
use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::api::app_state::AppState;

/// 创建学习路由器
pub fn create_learning_router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session).get(list_sessions))
        .route("/sessions/:id", patch(update_session))
        .route("/curricula", post(upload_curriculum).get(list_curricula))
        .route("/.well-known/mcp/manifest.json", get(mcp_manifest))
}
