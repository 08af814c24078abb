//! 分享注册表
//!
//! 保存已发布的分享、可见性规则和授权 handle。分享只会被追加，不会删除。

use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::share::{Share, ShareDraft, Visibility};
use crate::models::tags::{TagSet, normalize_handle};
use crate::services::affinity::{self, HandleComparison, ShareMatch};

/// 按发布顺序保存的分享集合
#[derive(Debug, Default)]
pub struct ShareBook {
    shares: Vec<Share>,
    index: HashMap<String, usize>,
}

impl ShareBook {
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Share> {
        let pos = *self.index.get(id)?;
        self.shares.get_mut(pos)
    }

    fn push(&mut self, share: Share) -> &Share {
        let pos = self.shares.len();
        self.index.insert(share.id.clone(), pos);
        self.shares.push(share);
        &self.shares[pos]
    }
}

/// 线程安全的分享注册表
#[derive(Debug, Default)]
pub struct ShareRegistry {
    book: RwLock<ShareBook>,
}

impl ShareRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读快照
    pub fn read(&self) -> RwLockReadGuard<'_, ShareBook> {
        self.book.read()
    }

    /// 发布分享
    pub fn publish(&self, draft: ShareDraft) -> Result<Share> {
        let visibility: Visibility = draft.visibility.parse()?;
        if normalize_handle(&draft.author).is_none() {
            return Err(AppError::Validation("Author handle is required".to_string()));
        }
        if draft.title.trim().is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }

        let share = Share::new(draft, visibility);
        let mut book = self.book.write();
        let share = book.push(share).clone();
        info!(
            share_id = %share.id,
            author = %share.author,
            visibility = %share.visibility,
            "Published share"
        );
        Ok(share)
    }

    /// 追加授权 handle
    pub fn authorize<I, S>(&self, share_id: &str, handles: I) -> Result<Share>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let handles: TagSet = handles
            .into_iter()
            .filter_map(|handle| normalize_handle(handle.as_ref()))
            .collect();

        let mut book = self.book.write();
        let share = book
            .get_mut(share_id)
            .ok_or_else(|| AppError::NotFound(format!("Unknown share: {}", share_id)))?;
        let before = share.authorized_handles.len();
        share.authorized_handles.extend(handles);
        info!(
            share_id = %share_id,
            granted = share.authorized_handles.len() - before,
            "Authorized share viewers"
        );
        Ok(share.clone())
    }

    /// `viewer` 可见的分享（发布顺序）
    pub fn visible_to(&self, viewer: &str) -> Vec<Share> {
        debug!("Listing shares visible to '{}'", viewer);
        self.read()
            .shares()
            .iter()
            .filter(|share| share.is_visible_to(viewer))
            .cloned()
            .collect()
    }

    pub fn matchups(&self, viewer: &str) -> Result<Vec<ShareMatch>> {
        affinity::matchups(self.read().shares(), viewer)
    }

    pub fn compare(&self, handle_a: &str, handle_b: &str) -> HandleComparison {
        affinity::compare(self.read().shares(), handle_a, handle_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tags::normalize_tags;

    fn draft(author: &str, visibility: &str) -> ShareDraft {
        ShareDraft {
            author: author.into(),
            title: "Async brainstorming".into(),
            summary: "Exploring async features".into(),
            tags: normalize_tags(["python", "async"]),
            visibility: visibility.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_publish_generates_unique_ids() {
        let registry = ShareRegistry::new();
        let a = registry.publish(draft("alice", "public")).unwrap();
        let b = registry.publish(draft("alice", "public")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_publish_rejects_bad_visibility_and_missing_author() {
        let registry = ShareRegistry::new();
        assert!(matches!(
            registry.publish(draft("alice", "everyone")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            registry.publish(draft("  ", "public")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_private_share_authorize_flow() {
        let registry = ShareRegistry::new();
        let share = registry.publish(draft("alice", "private")).unwrap();

        assert!(registry.visible_to("bob").is_empty());
        assert_eq!(registry.visible_to("alice").len(), 1);

        let updated = registry.authorize(&share.id, ["Bob"]).unwrap();
        assert!(updated.authorized_handles.contains("bob"));
        assert_eq!(registry.visible_to("bob")[0].id, share.id);
        assert!(registry.visible_to("carol").is_empty());
    }

    #[test]
    fn test_connections_share_authorize_flow() {
        let registry = ShareRegistry::new();
        let share = registry.publish(draft("alice", "connections")).unwrap();

        assert!(registry.visible_to("bob").is_empty());
        registry.authorize(&share.id, ["bob"]).unwrap();
        assert_eq!(registry.visible_to("bob")[0].id, share.id);
        assert!(registry.visible_to("carol").is_empty());
    }

    #[test]
    fn test_authorize_unknown_share() {
        let registry = ShareRegistry::new();
        assert!(matches!(
            registry.authorize("missing", ["bob"]),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_visible_to_keeps_publish_order() {
        let registry = ShareRegistry::new();
        let first = registry.publish(draft("alice", "public")).unwrap();
        let second = registry.publish(draft("dave", "public")).unwrap();
        let ids: Vec<String> = registry.visible_to("").into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }
}
