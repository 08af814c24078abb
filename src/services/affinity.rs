//! 亲和度引擎
//!
//! 纯函数：在分享快照上计算观察者的兴趣足迹（自己发布的分享的标签与
//! 关联概念的并集），并用 Jaccard 系数为其它可见分享打分。

use serde::Serialize;
use std::cmp::Ordering;

use crate::error::{AppError, Result};
use crate::models::share::Share;
use crate::models::tags::{TagSet, normalize_handle};

/// 单条推荐
#[derive(Debug, Clone, Serialize)]
pub struct ShareMatch {
    pub share: Share,
    /// [0, 1]
    pub score: f64,
    /// 与观察者足迹重合的条目
    pub shared: TagSet,
    /// 分享独有、观察者尚未涉及的条目
    pub complementary: TagSet,
}

/// 两个 handle 的兴趣对比
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HandleComparison {
    pub handle_a: String,
    pub handle_b: String,
    pub shared: TagSet,
    pub only_a: TagSet,
    pub only_b: TagSet,
}

impl HandleComparison {
    /// 对称差
    pub fn divergent(&self) -> TagSet {
        self.only_a.union(&self.only_b).cloned().collect()
    }
}

/// `handle` 发布的所有分享的标签与关联概念并集
pub fn footprint(shares: &[Share], handle: &str) -> TagSet {
    shares
        .iter()
        .filter(|share| share.is_authored_by(handle))
        .flat_map(|share| share.tags.iter().chain(share.linked_concepts.iter()))
        .cloned()
        .collect()
}

/// Jaccard 相似度；两集合都为空时为 0
pub fn jaccard(a: &TagSet, b: &TagSet) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// 为 `viewer` 排序推荐：分数降序，同分时较新的分享在前
///
/// 结果不含 `viewer` 自己发布的分享。
pub fn matchups(shares: &[Share], viewer: &str) -> Result<Vec<ShareMatch>> {
    if normalize_handle(viewer).is_none() {
        return Err(AppError::Validation(
            "Viewer handle required for affinity lookup".to_string(),
        ));
    }

    let mine = footprint(shares, viewer);
    let mut matches: Vec<ShareMatch> = shares
        .iter()
        .rev()
        .filter(|share| share.is_visible_to(viewer) && !share.is_authored_by(viewer))
        .map(|share| {
            let theirs = share.footprint();
            ShareMatch {
                score: jaccard(&mine, &theirs),
                shared: mine.intersection(&theirs).cloned().collect(),
                complementary: theirs.difference(&mine).cloned().collect(),
                share: share.clone(),
            }
        })
        .collect();

    // 稳定排序；逆发布顺序保证同一时间戳下后发布者在前
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.share.created_at.cmp(&a.share.created_at))
    });
    Ok(matches)
}

/// 对比两个 handle 的足迹
pub fn compare(shares: &[Share], handle_a: &str, handle_b: &str) -> HandleComparison {
    let a = footprint(shares, handle_a);
    let b = footprint(shares, handle_b);
    HandleComparison {
        handle_a: handle_a.trim().to_string(),
        handle_b: handle_b.trim().to_string(),
        shared: a.intersection(&b).cloned().collect(),
        only_a: a.difference(&b).cloned().collect(),
        only_b: b.difference(&a).cloned().collect(),
    }
}
