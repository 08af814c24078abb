//! 学习会话与课程大纲服务
//!
//! 简单的内存 CRUD；关联概念必须在图中存在。

use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::learning::{Curriculum, LearningSession, SessionStatus};
use crate::models::tags::TagSet;
use crate::services::concept_store::ConceptGraph;

/// 创建会话的输入
#[derive(Debug, Clone, Default)]
pub struct SessionDraft {
    pub name: String,
    pub description: String,
    pub focus_tags: TagSet,
    pub linked_concepts: Vec<String>,
}

/// 会话更新；`current_focus` 为空字符串时清除
#[derive(Debug, Clone, Default)]
pub struct SessionUpdate {
    pub status: Option<SessionStatus>,
    pub current_focus: Option<String>,
}

/// 上传课程大纲的输入
#[derive(Debug, Clone, Default)]
pub struct CurriculumDraft {
    pub title: String,
    pub description: String,
    pub tags: TagSet,
    pub source_url: Option<String>,
    pub linked_concepts: Vec<String>,
}

/// 会话与课程大纲的内存存储
#[derive(Debug, Default)]
pub struct LearningPlanner {
    sessions: RwLock<HashMap<String, LearningSession>>,
    curricula: RwLock<HashMap<String, Curriculum>>,
}

impl LearningPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_session(&self, graph: &ConceptGraph, draft: SessionDraft) -> Result<LearningSession> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Session name cannot be empty".to_string()));
        }
        let linked_concepts = resolve_concepts(graph, draft.linked_concepts, "session")?;

        let session = LearningSession {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: draft.description.trim().to_string(),
            focus_tags: draft.focus_tags,
            linked_concepts,
            status: SessionStatus::Active,
            current_focus: None,
            created_at: Utc::now(),
        };
        self.sessions
            .write()
            .insert(session.id.clone(), session.clone());
        info!(session_id = %session.id, name = %session.name, "Created learning session");
        Ok(session)
    }

    /// 最新创建的在前
    pub fn list_sessions(&self) -> Vec<LearningSession> {
        let mut sessions: Vec<LearningSession> = self.sessions.read().values().cloned().collect();
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sessions
    }

    pub fn update_session(&self, session_id: &str, update: SessionUpdate) -> Result<LearningSession> {
        let mut sessions = self.sessions.write();
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| AppError::NotFound(format!("Unknown session: {}", session_id)))?;

        if let Some(status) = update.status {
            session.status = status;
        }
        if let Some(focus) = update.current_focus {
            let focus = focus.trim();
            session.current_focus = (!focus.is_empty()).then(|| focus.to_string());
        }
        info!(session_id = %session_id, status = ?session.status, "Updated learning session");
        Ok(session.clone())
    }

    pub fn create_curriculum(&self, graph: &ConceptGraph, draft: CurriculumDraft) -> Result<Curriculum> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Curriculum title cannot be empty".to_string()));
        }
        let source_url = match draft.source_url.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                Some(url.to_string())
            }
            Some(url) => {
                return Err(AppError::Validation(format!(
                    "source_url must be an http(s) URL (got '{}')",
                    url
                )));
            }
        };
        let linked_concepts = resolve_concepts(graph, draft.linked_concepts, "curriculum")?;

        let curriculum = Curriculum {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: draft.description.trim().to_string(),
            tags: draft.tags,
            source_url,
            linked_concepts,
            uploaded_at: Utc::now(),
        };
        self.curricula
            .write()
            .insert(curriculum.id.clone(), curriculum.clone());
        info!(curriculum_id = %curriculum.id, title = %curriculum.title, "Uploaded curriculum");
        Ok(curriculum)
    }

    /// 最新上传的在前
    pub fn list_curricula(&self) -> Vec<Curriculum> {
        let mut curricula: Vec<Curriculum> = self.curricula.read().values().cloned().collect();
        curricula.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        curricula
    }
}

/// 校验概念存在，保留请求顺序并去重
fn resolve_concepts(graph: &ConceptGraph, names: Vec<String>, owner: &str) -> Result<Vec<String>> {
    let mut missing: Vec<String> = names
        .iter()
        .filter(|name| !graph.contains(name))
        .cloned()
        .collect();
    if !missing.is_empty() {
        missing.sort();
        missing.dedup();
        return Err(AppError::Validation(format!(
            "Unknown concepts in {}: {}",
            owner,
            missing.join(", ")
        )));
    }

    let mut seen = TagSet::new();
    Ok(names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::concept::ConceptDraft;
    use crate::models::tags::normalize_tags;

    fn graph() -> ConceptGraph {
        let mut graph = ConceptGraph::new();
        for name in ["A", "B"] {
            graph.upsert(ConceptDraft::new(name)).unwrap();
        }
        graph
    }

    #[test]
    fn test_create_and_update_session() {
        let planner = LearningPlanner::new();
        let session = planner
            .create_session(
                &graph(),
                SessionDraft {
                    name: "Deep dive".into(),
                    description: "Focus on intermediate skills".into(),
                    focus_tags: normalize_tags(["intermediate", "practice"]),
                    linked_concepts: vec!["B".into(), "A".into(), "B".into()],
                },
            )
            .unwrap();
        assert_eq!(session.linked_concepts, vec!["B", "A"]);
        assert_eq!(session.status, SessionStatus::Active);

        let updated = planner
            .update_session(
                &session.id,
                SessionUpdate {
                    status: Some(SessionStatus::Paused),
                    current_focus: Some("Review A".into()),
                },
            )
            .unwrap();
        assert_eq!(updated.status, SessionStatus::Paused);
        assert_eq!(updated.current_focus.as_deref(), Some("Review A"));
        assert_eq!(planner.list_sessions().len(), 1);
    }

    #[test]
    fn test_session_rejects_unknown_concepts() {
        let planner = LearningPlanner::new();
        let err = planner
            .create_session(
                &graph(),
                SessionDraft {
                    name: "Sprint".into(),
                    linked_concepts: vec!["Z".into()],
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Z")));
    }

    #[test]
    fn test_update_unknown_session() {
        let planner = LearningPlanner::new();
        assert!(matches!(
            planner.update_session("missing", SessionUpdate::default()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_curriculum_url_validation() {
        let planner = LearningPlanner::new();
        let ok = planner
            .create_curriculum(
                &graph(),
                CurriculumDraft {
                    title: "Beta syllabus".into(),
                    source_url: Some("https://example.com".into()),
                    linked_concepts: vec!["B".into()],
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(ok.linked_concepts, vec!["B"]);

        let bad = planner.create_curriculum(
            &graph(),
            CurriculumDraft {
                title: "Broken".into(),
                source_url: Some("ftp://example.com".into()),
                ..Default::default()
            },
        );
        assert!(matches!(bad, Err(AppError::Validation(_))));
    }
}
