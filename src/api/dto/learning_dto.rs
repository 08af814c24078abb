//! 会话与课程大纲 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::learning::{Curriculum, LearningSession, SessionStatus};
use crate::models::tags::{ListInput, deserialize_list};
use crate::services::learning::{CurriculumDraft, SessionDraft};

/// 创建会话请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSessionRequest {
    /// 会话名称
    #[validate(length(min = 1, message = "Session name cannot be empty"))]
    pub name: String,

    /// 会话描述
    #[serde(default)]
    pub description: Option<String>,

    /// 关注标签
    #[serde(default, deserialize_with = "deserialize_list")]
    pub focus_tags: ListInput,

    /// 关联概念
    #[serde(default, deserialize_with = "deserialize_list")]
    pub linked_concepts: ListInput,
}

impl From<CreateSessionRequest> for SessionDraft {
    fn from(request: CreateSessionRequest) -> Self {
        SessionDraft {
            name: request.name,
            description: request.description.unwrap_or_default(),
            focus_tags: request.focus_tags.into_tags(),
            linked_concepts: request.linked_concepts.into_ordered_names(),
        }
    }
}

/// 更新会话请求
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct UpdateSessionRequest {
    /// active | paused | archived
    pub status: Option<String>,
    /// 下一步关注点；空字符串清除
    pub current_focus: Option<String>,
}

/// 会话响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub focus_tags: Vec<String>,
    pub linked_concepts: Vec<String>,
    pub status: SessionStatus,
    pub current_focus: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<LearningSession> for SessionResponse {
    fn from(session: LearningSession) -> Self {
        Self {
            id: session.id,
            name: session.name,
            description: session.description,
            focus_tags: session.focus_tags.into_iter().collect(),
            linked_concepts: session.linked_concepts,
            status: session.status,
            current_focus: session.current_focus,
            created_at: session.created_at,
        }
    }
}

/// 上传课程大纲请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadCurriculumRequest {
    /// 标题
    #[validate(length(min = 1, message = "Curriculum title cannot be empty"))]
    pub title: String,

    /// 描述
    #[serde(default)]
    pub description: Option<String>,

    /// 标签
    #[serde(default, deserialize_with = "deserialize_list")]
    pub tags: ListInput,

    /// 来源链接
    #[serde(default)]
    pub source_url: Option<String>,

    /// 关联概念
    #[serde(default, deserialize_with = "deserialize_list")]
    pub linked_concepts: ListInput,
}

impl From<UploadCurriculumRequest> for CurriculumDraft {
    fn from(request: UploadCurriculumRequest) -> Self {
        CurriculumDraft {
            title: request.title,
            description: request.description.unwrap_or_default(),
            tags: request.tags.into_tags(),
            source_url: request.source_url,
            linked_concepts: request.linked_concepts.into_ordered_names(),
        }
    }
}

/// 课程大纲响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub source_url: Option<String>,
    pub linked_concepts: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl From<Curriculum> for CurriculumResponse {
    fn from(curriculum: Curriculum) -> Self {
        Self {
            id: curriculum.id,
            title: curriculum.title,
            description: curriculum.description,
            tags: curriculum.tags.into_iter().collect(),
            source_url: curriculum.source_url,
            linked_concepts: curriculum.linked_concepts,
            uploaded_at: curriculum.uploaded_at,
        }
    }
}
