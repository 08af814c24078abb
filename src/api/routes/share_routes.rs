//! Share Routes
//!
//! 分享、授权与推荐路由。

use crate::api::handlers::share_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;

/// 创建分享路由器
pub fn create_share_router() -> Router<AppState> {
    Router::new()
        .route("/shares", post(publish_share).get(list_shares))
        .route("/shares/matchups", get(share_matchups))
        .route("/shares/compare", get(compare_handles))
        .route("/shares/:id/authorize", post(authorize_share))
}
