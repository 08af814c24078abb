//! 概念与先修关系

use serde::{Deserialize, Serialize};

use crate::models::tags::TagSet;

/// 知识图谱中的概念节点
///
/// `name` 是主键，大小写敏感。`prerequisites` 中的每个名称都必须指向
/// 图中存在的概念，由 [`ConceptStore`](crate::services::concept_store::ConceptStore)
/// 负责维护该不变量。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Concept {
    /// 概念名称
    pub name: String,
    /// 描述
    pub description: String,
    /// 标签
    pub tags: TagSet,
    /// 本概念依赖的概念
    pub prerequisites: TagSet,
}

impl Concept {
    /// 创建没有先修关系的新概念
    pub fn new(name: &str, description: &str, tags: TagSet) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            tags,
            prerequisites: TagSet::new(),
        }
    }

    /// 是否直接依赖 `other`
    pub fn requires(&self, other: &str) -> bool {
        self.prerequisites.contains(other)
    }
}

/// upsert 输入；`None` 字段保留已存储的值
#[derive(Debug, Clone, Default)]
pub struct ConceptDraft {
    pub name: String,
    pub description: Option<String>,
    pub tags: Option<TagSet>,
}

impl ConceptDraft {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// upsert 结果
#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    pub concept: Concept,
    pub created: bool,
}

/// 有向边：`source` 依赖 `target`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Relationship {
    pub source: String,
    pub target: String,
}

impl Relationship {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}
