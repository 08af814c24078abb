//! 发现清单
//!
//! 供 AI 客户端发现可调用的动作。

use axum::{Json, response::IntoResponse};
use serde_json::json;

pub async fn mcp_manifest() -> impl IntoResponse {
    Json(json!({
        "name": "wonder-knowledge",
        "description": "Knowledge map assistant with sessions, quizzes, and collaborative shares.",
        "version": env!("CARGO_PKG_VERSION"),
        "actions": [
            {
                "name": "create_concept",
                "description": "Add a concept to the shared knowledge graph.",
                "args": {"name": "str", "description": "str", "tags": "List[str]"},
                "method": "POST",
                "path": "/knowledge",
            },
            {
                "name": "publish_share",
                "description": "Publish a new collaborative knowledge share.",
                "args": {
                    "author": "str",
                    "title": "str",
                    "summary": "str",
                    "tags": "List[str]",
                    "visibility": "public|connections|private",
                },
                "method": "POST",
                "path": "/shares",
            },
            {
                "name": "suggest_matches",
                "description": "Retrieve affinity-ranked collaborator ideas for a handle.",
                "args": {"viewer": "str", "limit": "int"},
                "method": "GET",
                "path": "/shares/matchups",
            },
        ],
    }))
}
