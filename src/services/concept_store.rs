//! 概念存储
//!
//! 概念节点与先修边的唯一数据源。所有写操作在同一把写锁内完成，
//! 读操作拿到的是一致的快照。

use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::concept::{Concept, ConceptDraft, Relationship, UpsertOutcome};
use crate::models::tags::TagSet;
use crate::services::path_finder;

/// 概念图数据
///
/// 以插入顺序保存概念；先修关系物化在每个概念的 `prerequisites` 中。
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    concepts: HashMap<String, Concept>,
    order: Vec<String>,
}

impl ConceptGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.concepts.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Concept> {
        self.concepts.get(name)
    }

    fn require(&self, name: &str) -> Result<&Concept> {
        self.concepts
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Unknown concept: {}", name)))
    }

    /// 按插入顺序遍历所有概念
    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.order.iter().filter_map(|name| self.concepts.get(name))
    }

    /// 创建或更新概念，不触碰已有先修关系
    pub fn upsert(&mut self, draft: ConceptDraft) -> Result<UpsertOutcome> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Concept name cannot be empty".to_string(),
            ));
        }

        if let Some(existing) = self.concepts.get_mut(name) {
            if let Some(description) = draft.description {
                existing.description = description.trim().to_string();
            }
            if let Some(tags) = draft.tags {
                existing.tags = tags;
            }
            return Ok(UpsertOutcome {
                concept: existing.clone(),
                created: false,
            });
        }

        let concept = Concept::new(
            name,
            draft.description.as_deref().map(str::trim).unwrap_or_default(),
            draft.tags.unwrap_or_default(),
        );
        self.order.push(concept.name.clone());
        self.concepts.insert(concept.name.clone(), concept.clone());
        Ok(UpsertOutcome {
            concept,
            created: true,
        })
    }

    /// 删除概念并从其它概念的先修集合中摘除（级联）
    ///
    /// 返回被级联修改的概念名。
    pub fn delete(&mut self, name: &str) -> Result<Vec<String>> {
        if self.concepts.remove(name).is_none() {
            return Err(AppError::NotFound(format!("Unknown concept: {}", name)));
        }
        self.order.retain(|existing| existing != name);

        let mut unlinked = Vec::new();
        for concept in self.concepts.values_mut() {
            if concept.prerequisites.remove(name) {
                unlinked.push(concept.name.clone());
            }
        }
        unlinked.sort();
        Ok(unlinked)
    }

    /// 添加先修边 `source -> target`；已存在时幂等
    ///
    /// 返回是否新增了边。
    pub fn link(&mut self, source: &str, target: &str) -> Result<bool> {
        if source == target {
            return Err(AppError::Validation(format!(
                "Concept '{}' cannot be its own prerequisite",
                source
            )));
        }
        self.require(target)?;
        let concept = self
            .concepts
            .get_mut(source)
            .ok_or_else(|| AppError::NotFound(format!("Unknown concept: {}", source)))?;
        Ok(concept.prerequisites.insert(target.to_string()))
    }

    /// 移除先修边；边不存在时不报错
    pub fn unlink(&mut self, source: &str, target: &str) -> Result<bool> {
        let concept = self
            .concepts
            .get_mut(source)
            .ok_or_else(|| AppError::NotFound(format!("Unknown concept: {}", source)))?;
        Ok(concept.prerequisites.remove(target))
    }

    /// 展开全部 `(source, target)` 边
    pub fn relationships(&self) -> Vec<Relationship> {
        self.iter()
            .flat_map(|concept| {
                concept
                    .prerequisites
                    .iter()
                    .map(|target| Relationship::new(&concept.name, target))
            })
            .collect()
    }

    /// 直接依赖 `name` 的概念（按名称排序）
    pub fn dependents(&self, name: &str) -> Result<Vec<String>> {
        self.require(name)?;
        let mut dependents: Vec<String> = self
            .concepts
            .values()
            .filter(|concept| concept.requires(name))
            .map(|concept| concept.name.clone())
            .collect();
        dependents.sort();
        Ok(dependents)
    }

    /// 传递先修：沿 prerequisites 广度优先展开，不含自身
    pub fn prerequisite_chain(&self, name: &str) -> Result<Vec<String>> {
        let root = self.require(name)?;
        let mut visited = TagSet::new();
        visited.insert(root.name.clone());
        let mut queue: VecDeque<&str> = root.prerequisites.iter().map(String::as_str).collect();
        let mut chain = Vec::new();

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.to_string()) {
                continue;
            }
            chain.push(current.to_string());
            if let Some(concept) = self.concepts.get(current) {
                queue.extend(concept.prerequisites.iter().map(String::as_str));
            }
        }

        Ok(chain)
    }

    /// 传递后继：所有直接或间接依赖 `name` 的概念，广度优先
    pub fn dependent_chain(&self, name: &str) -> Result<Vec<String>> {
        self.require(name)?;
        let mut visited = TagSet::new();
        visited.insert(name.to_string());
        let mut queue: VecDeque<String> = self.dependents(name)?.into();
        let mut chain = Vec::new();

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            queue.extend(self.dependents(&current)?);
            chain.push(current);
        }

        Ok(chain)
    }
}

/// 线程安全的概念存储
#[derive(Debug, Default)]
pub struct ConceptStore {
    graph: RwLock<ConceptGraph>,
}

impl ConceptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读快照；持有期间阻塞写操作，不要跨 `.await` 持有
    pub fn read(&self) -> RwLockReadGuard<'_, ConceptGraph> {
        self.graph.read()
    }

    pub fn upsert(&self, draft: ConceptDraft) -> Result<UpsertOutcome> {
        let outcome = self.graph.write().upsert(draft)?;
        info!(
            concept = %outcome.concept.name,
            created = outcome.created,
            "Upserted concept"
        );
        Ok(outcome)
    }

    pub fn get(&self, name: &str) -> Result<Concept> {
        debug!("Getting concept: {}", name);
        self.read().require(name).cloned()
    }

    pub fn list(&self) -> Vec<Concept> {
        self.read().iter().cloned().collect()
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let unlinked = self.graph.write().delete(name)?;
        info!(
            concept = %name,
            cascaded = unlinked.len(),
            "Deleted concept and unlinked dependents"
        );
        Ok(())
    }

    pub fn link(&self, source: &str, target: &str) -> Result<Relationship> {
        let added = self.graph.write().link(source, target)?;
        info!(%source, %target, added, "Linked prerequisite");
        Ok(Relationship::new(source, target))
    }

    pub fn unlink(&self, source: &str, target: &str) -> Result<bool> {
        let removed = self.graph.write().unlink(source, target)?;
        info!(%source, %target, removed, "Unlinked prerequisite");
        Ok(removed)
    }

    pub fn list_relationships(&self) -> Vec<Relationship> {
        self.read().relationships()
    }

    /// 在当前快照上计算最短学习路径
    pub fn find_path(&self, start: &str, goal: &str) -> Result<Vec<String>> {
        let graph = self.read();
        path_finder::find_path(&graph, start, goal)
    }
}
