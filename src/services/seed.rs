//! 示例数据
//!
//! 启动时写入几个入门概念、先修关系、一个会话、一份大纲和一条公开分享。

use tracing::{info, warn};

use crate::api::app_state::AppState;
use crate::models::concept::ConceptDraft;
use crate::models::share::ShareDraft;
use crate::models::tags::{normalize_names, normalize_tags};
use crate::services::learning::{CurriculumDraft, SessionDraft};

const CONCEPTS: &[(&str, &str, &[&str])] = &[
    (
        "Programming Fundamentals",
        "Core ideas such as variables, loops, and functions.",
        &["programming", "basics"],
    ),
    (
        "Python",
        "General purpose programming language focusing on readability.",
        &["python", "programming"],
    ),
    (
        "FastAPI",
        "Modern Python web framework for building APIs.",
        &["python", "web"],
    ),
    (
        "REST APIs",
        "Architectural style for building web services.",
        &["web", "api"],
    ),
];

/// (依赖方, 先修)
const PREREQUISITES: &[(&str, &str)] = &[
    ("Python", "Programming Fundamentals"),
    ("FastAPI", "Python"),
    ("REST APIs", "Programming Fundamentals"),
    ("FastAPI", "REST APIs"),
];

/// 写入示例数据；单条失败只记录警告
pub fn seed_demo_data(state: &AppState) {
    for (name, description, tags) in CONCEPTS {
        let draft = ConceptDraft::new(name)
            .with_description(description)
            .with_tags(normalize_tags(tags.iter()));
        if let Err(e) = state.concepts.upsert(draft) {
            warn!("Skipping seed concept '{}': {}", name, e);
        }
    }

    for (source, target) in PREREQUISITES {
        if let Err(e) = state.concepts.link(source, target) {
            warn!("Skipping seed relationship {} -> {}: {}", source, target, e);
        }
    }

    {
        let graph = state.concepts.read();
        let session = state.learning.create_session(
            &graph,
            SessionDraft {
                name: "Full-stack Python sprint".into(),
                description: "Blend Python fundamentals with modern API practices.".into(),
                focus_tags: normalize_tags(["python", "web", "api"]),
                linked_concepts: vec![
                    "Programming Fundamentals".into(),
                    "Python".into(),
                    "FastAPI".into(),
                ],
            },
        );
        if let Err(e) = session {
            warn!("Skipping seed session: {}", e);
        }

        let curriculum = state.learning.create_curriculum(
            &graph,
            CurriculumDraft {
                title: "Intro to FastAPI Workshop".into(),
                description: "Curated workshop outline covering routing, dependency injection, and deployment tips.".into(),
                tags: normalize_tags(["fastapi", "web", "backend"]),
                source_url: Some("https://fastapi.tiangolo.com/".into()),
                linked_concepts: vec!["FastAPI".into(), "REST APIs".into()],
            },
        );
        if let Err(e) = curriculum {
            warn!("Skipping seed curriculum: {}", e);
        }
    }

    let share = state.shares.publish(ShareDraft {
        author: "wonder-team".into(),
        title: "API-first brainstorming".into(),
        summary: "Mapping how we co-create learning journeys and surface helpful context for collaborators.".into(),
        tags: normalize_tags(["collaboration", "brainstorm", "learning"]),
        linked_concepts: normalize_names(["REST APIs", "FastAPI"]),
        visibility: "public".into(),
        authorized_handles: Default::default(),
    });
    if let Err(e) = share {
        warn!("Skipping seed share: {}", e);
    }

    info!(
        concepts = state.concepts.read().len(),
        "Seeded demo knowledge map"
    );
}
