//! 学习路径
//!
//! 在概念图快照上做广度优先搜索。先修边按无向边遍历，邻居按名称字典序
//! 展开，因此等长路径中先被发现的那条胜出，结果可复现。

use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::error::{AppError, Result};
use crate::services::concept_store::ConceptGraph;

/// 计算 `start` 到 `goal` 的最短概念序列（含两端）
///
/// - 任一端不存在：`NotFound`
/// - 两端存在但不连通：`NoPath`
pub fn find_path(graph: &ConceptGraph, start: &str, goal: &str) -> Result<Vec<String>> {
    for name in [start, goal] {
        if !graph.contains(name) {
            return Err(AppError::NotFound(format!("Unknown concept: {}", name)));
        }
    }

    if start == goal {
        return Ok(vec![start.to_string()]);
    }

    let adjacency = undirected_adjacency(graph);
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    parents.insert(start, start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        let Some(neighbors) = adjacency.get(current) else {
            continue;
        };
        for &neighbor in neighbors {
            if !parents.contains_key(neighbor) {
                parents.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    if !parents.contains_key(goal) {
        return Err(AppError::NoPath(format!(
            "No learning path between '{}' and '{}'",
            start, goal
        )));
    }

    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while current != start {
        current = parents[current];
        path.push(current.to_string());
    }
    path.reverse();
    Ok(path)
}

/// 每个概念的无向邻居（先修 + 被依赖），有序集合保证字典序遍历
fn undirected_adjacency(graph: &ConceptGraph) -> HashMap<&str, BTreeSet<&str>> {
    let mut adjacency: HashMap<&str, BTreeSet<&str>> = HashMap::with_capacity(graph.len());
    for concept in graph.iter() {
        adjacency.entry(concept.name.as_str()).or_default();
        for target in &concept.prerequisites {
            adjacency
                .entry(concept.name.as_str())
                .or_default()
                .insert(target.as_str());
            adjacency
                .entry(target.as_str())
                .or_default()
                .insert(concept.name.as_str());
        }
    }
    adjacency
}
