//! 概念与关系 DTO
//!
//! 用于 Knowledge/Relationship/Learning-path API 的请求和响应序列化

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;
use crate::models::concept::{Concept, ConceptDraft, Relationship};
use crate::models::tags::ListInput;

/// 创建或更新概念请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertConceptRequest {
    /// 概念名称
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    /// 描述；缺省时保留原值
    #[serde(default)]
    pub description: Option<String>,

    /// 标签（数组或逗号分隔）；缺省时保留原值
    #[serde(default)]
    pub tags: Option<ListInput>,
}

impl From<UpsertConceptRequest> for ConceptDraft {
    fn from(request: UpsertConceptRequest) -> Self {
        ConceptDraft {
            name: request.name,
            description: request.description,
            tags: request.tags.map(ListInput::into_tags),
        }
    }
}

/// 概念响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptResponse {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub prerequisites: Vec<String>,
}

impl From<Concept> for ConceptResponse {
    fn from(concept: Concept) -> Self {
        Self {
            name: concept.name,
            description: concept.description,
            tags: concept.tags.into_iter().collect(),
            prerequisites: concept.prerequisites.into_iter().collect(),
        }
    }
}

/// 概念详情响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptDetailResponse {
    #[serde(flatten)]
    pub concept: ConceptResponse,

    /// 直接依赖本概念的概念
    pub dependents: Vec<String>,

    /// 传递先修（广度优先顺序）
    pub prerequisite_chain: Vec<String>,
}

/// 关系请求：`source` 依赖 `target`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RelationshipRequest {
    #[validate(custom(function = "not_blank"))]
    pub source: String,

    #[validate(custom(function = "not_blank"))]
    pub target: String,
}

impl RelationshipRequest {
    /// 与存储一致的规范名称
    pub fn names(&self) -> (&str, &str) {
        (self.source.trim(), self.target.trim())
    }
}

/// 关系响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationshipResponse {
    pub source: String,
    pub target: String,
}

impl From<Relationship> for RelationshipResponse {
    fn from(relationship: Relationship) -> Self {
        Self {
            source: relationship.source,
            target: relationship.target,
        }
    }
}

/// 学习路径查询参数
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LearningPathParams {
    #[validate(custom(function = "not_blank"))]
    pub start: String,

    #[validate(custom(function = "not_blank"))]
    pub goal: String,
}

impl LearningPathParams {
    pub fn endpoints(&self) -> (&str, &str) {
        (self.start.trim(), self.goal.trim())
    }
}

/// 学习路径响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPathResponse {
    pub path: Vec<ConceptResponse>,
    /// 边数
    pub steps: usize,
}
