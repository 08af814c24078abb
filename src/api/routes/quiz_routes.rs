//! Quiz Routes

use crate::api::handlers::quiz_handler::*;
use axum::{Router, routing::post};

use crate::api::app_state::AppState;

/// 创建测验路由器
pub fn create_quiz_router() -> Router<AppState> {
    Router::new()
        .route("/quiz/generate", post(generate_quiz))
        .route("/quizzes/generate", post(generate_quiz))
        .route("/quizzes/attempt", post(attempt_quiz))
}
