//! 学习会话与课程大纲

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AppError;
use crate::models::tags::TagSet;

/// 会话状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// 活跃状态
    #[default]
    Active,
    /// 已暂停
    Paused,
    /// 已归档
    Archived,
}

impl FromStr for SessionStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(SessionStatus::Active),
            "paused" => Ok(SessionStatus::Paused),
            "archived" => Ok(SessionStatus::Archived),
            other => Err(AppError::Validation(format!(
                "status must be active, paused, or archived (got '{}')",
                other
            ))),
        }
    }
}

/// 围绕一组概念的学习会话
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningSession {
    pub id: String,
    pub name: String,
    pub description: String,
    pub focus_tags: TagSet,
    /// 按请求顺序去重后的概念名
    pub linked_concepts: Vec<String>,
    pub status: SessionStatus,
    pub current_focus: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 上传的课程大纲
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Curriculum {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: TagSet,
    pub source_url: Option<String>,
    pub linked_concepts: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}
