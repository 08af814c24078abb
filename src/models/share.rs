//! 想法分享（Share）及其可见性规则

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::tags::{TagSet, normalize_handle};

/// 分享可见性
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// 所有人可见
    Public,
    /// 作者与授权 handle 可见
    Connections,
    /// 仅作者可见
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Connections => "connections",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "connections" => Ok(Visibility::Connections),
            "private" => Ok(Visibility::Private),
            other => Err(AppError::Validation(format!(
                "visibility must be public, connections, or private (got '{}')",
                other
            ))),
        }
    }
}

/// 已发布的分享
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Share {
    /// 分享 ID
    pub id: String,
    /// 作者 handle（保留输入时的写法）
    pub author: String,
    /// 标题
    pub title: String,
    /// 摘要
    pub summary: String,
    /// 标签
    pub tags: TagSet,
    /// 关联的概念名称，不要求已存在于图中
    pub linked_concepts: TagSet,
    /// 可见性
    pub visibility: Visibility,
    /// 显式授权的 handle（规范化后）
    pub authorized_handles: TagSet,
    /// 发布时间
    pub created_at: DateTime<Utc>,
}

impl Share {
    /// 由已校验的草稿生成分享
    pub fn new(draft: ShareDraft, visibility: Visibility) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: draft.author.trim().to_string(),
            title: draft.title.trim().to_string(),
            summary: draft.summary.trim().to_string(),
            tags: draft.tags,
            linked_concepts: draft.linked_concepts,
            visibility,
            authorized_handles: draft
                .authorized_handles
                .iter()
                .filter_map(|handle| normalize_handle(handle))
                .collect(),
            created_at: Utc::now(),
        }
    }

    /// `handle` 是否为作者（不区分大小写）
    pub fn is_authored_by(&self, handle: &str) -> bool {
        match (normalize_handle(&self.author), normalize_handle(handle)) {
            (Some(author), Some(handle)) => author == handle,
            _ => false,
        }
    }

    /// `handle` 是否被显式授权
    pub fn is_granted_to(&self, handle: &str) -> bool {
        normalize_handle(handle).is_some_and(|handle| self.authorized_handles.contains(&handle))
    }

    /// 按可见性规则判断 `viewer` 能否看到该分享
    ///
    /// 显式授权对 private 与 connections 都生效。
    pub fn is_visible_to(&self, viewer: &str) -> bool {
        match self.visibility {
            Visibility::Public => true,
            Visibility::Private | Visibility::Connections => {
                self.is_authored_by(viewer) || self.is_granted_to(viewer)
            }
        }
    }

    /// 标签与关联概念的并集，用于亲和度计算
    pub fn footprint(&self) -> TagSet {
        self.tags.union(&self.linked_concepts).cloned().collect()
    }
}

/// 发布请求（可见性尚未解析）
#[derive(Debug, Clone, Default)]
pub struct ShareDraft {
    pub author: String,
    pub title: String,
    pub summary: String,
    pub tags: TagSet,
    pub linked_concepts: TagSet,
    pub visibility: String,
    pub authorized_handles: TagSet,
}
