//! 分享 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::share::{Share, ShareDraft};
use crate::models::tags::{ListInput, deserialize_list};
use crate::services::affinity::{HandleComparison, ShareMatch};

fn default_visibility() -> String {
    "public".to_string()
}

/// 发布分享请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PublishShareRequest {
    /// 作者 handle
    #[validate(length(min = 1, message = "Author handle is required"))]
    pub author: String,

    /// 标题
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// 摘要
    #[serde(default)]
    pub summary: String,

    /// 标签
    #[serde(default, deserialize_with = "deserialize_list")]
    pub tags: ListInput,

    /// 关联概念
    #[serde(default, deserialize_with = "deserialize_list")]
    pub linked_concepts: ListInput,

    /// public | connections | private
    #[serde(default = "default_visibility")]
    pub visibility: String,

    /// 预先授权的 handle
    #[serde(default, deserialize_with = "deserialize_list")]
    pub authorized_handles: ListInput,
}

impl From<PublishShareRequest> for ShareDraft {
    fn from(request: PublishShareRequest) -> Self {
        ShareDraft {
            author: request.author,
            title: request.title,
            summary: request.summary,
            tags: request.tags.into_tags(),
            linked_concepts: request.linked_concepts.into_names(),
            visibility: request.visibility,
            authorized_handles: request.authorized_handles.into_handles(),
        }
    }
}

/// 授权请求
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizeShareRequest {
    #[serde(default, deserialize_with = "deserialize_list")]
    pub handles: ListInput,
}

/// 分享响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareResponse {
    pub id: String,
    pub author: String,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub linked_concepts: Vec<String>,
    pub visibility: String,
    pub authorized_handles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Share> for ShareResponse {
    fn from(share: Share) -> Self {
        Self {
            id: share.id,
            author: share.author,
            title: share.title,
            summary: share.summary,
            tags: share.tags.into_iter().collect(),
            linked_concepts: share.linked_concepts.into_iter().collect(),
            visibility: share.visibility.to_string(),
            authorized_handles: share.authorized_handles.into_iter().collect(),
            created_at: share.created_at,
        }
    }
}

/// 列表查询参数
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListSharesParams {
    pub viewer: Option<String>,
}

/// matchups 查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct MatchupParams {
    pub viewer: String,
    pub limit: Option<usize>,
}

/// 推荐条目响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareMatchResponse {
    pub share: ShareResponse,
    /// Jaccard 分数，保留三位小数
    pub affinity: f64,
    pub shared_tags: Vec<String>,
    pub complementary_tags: Vec<String>,
}

impl From<ShareMatch> for ShareMatchResponse {
    fn from(matched: ShareMatch) -> Self {
        Self {
            share: matched.share.into(),
            affinity: (matched.score * 1000.0).round() / 1000.0,
            shared_tags: matched.shared.into_iter().collect(),
            complementary_tags: matched.complementary.into_iter().collect(),
        }
    }
}

/// compare 查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct CompareParams {
    pub handle_a: String,
    pub handle_b: String,
}

/// 对比响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandleComparisonResponse {
    pub handle_a: String,
    pub handle_b: String,
    pub shared_tags: Vec<String>,
    pub only_a: Vec<String>,
    pub only_b: Vec<String>,
    pub divergent_tags: Vec<String>,
}

impl From<HandleComparison> for HandleComparisonResponse {
    fn from(comparison: HandleComparison) -> Self {
        let divergent = comparison.divergent();
        Self {
            handle_a: comparison.handle_a,
            handle_b: comparison.handle_b,
            shared_tags: comparison.shared.into_iter().collect(),
            only_a: comparison.only_a.into_iter().collect(),
            only_b: comparison.only_b.into_iter().collect(),
            divergent_tags: divergent.into_iter().collect(),
        }
    }
}
