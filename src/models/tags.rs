//! 标签与名称集合的规范化
//!
//! 请求中的标签/概念列表既可以是 JSON 数组，也可以是逗号分隔的字符串，
//! 在进入核心之前统一规范为有序集合。

use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;

/// 有序、去重的字符串集合
pub type TagSet = BTreeSet<String>;

/// 原始列表输入：数组或逗号分隔字符串
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListInput {
    List(Vec<String>),
    Csv(String),
}

impl Default for ListInput {
    fn default() -> Self {
        ListInput::List(Vec::new())
    }
}

impl ListInput {
    /// 拆分为未规范化的条目
    pub fn items(&self) -> Vec<&str> {
        match self {
            ListInput::List(items) => items.iter().map(String::as_str).collect(),
            ListInput::Csv(raw) => raw.split(',').collect(),
        }
    }

    /// 规范化为标签集合（小写）
    pub fn into_tags(self) -> TagSet {
        normalize_tags(self.items())
    }

    /// 规范化为概念名称集合（保留大小写）
    pub fn into_names(self) -> TagSet {
        normalize_names(self.items())
    }

    /// 规范化为概念名称列表，保留首次出现的顺序
    pub fn into_ordered_names(self) -> Vec<String> {
        let mut seen = TagSet::new();
        self.items()
            .into_iter()
            .map(str::trim)
            .filter(|name| !name.is_empty() && seen.insert(name.to_string()))
            .map(str::to_string)
            .collect()
    }

    /// 规范化为用户 handle 集合
    pub fn into_handles(self) -> TagSet {
        self.items().into_iter().filter_map(normalize_handle).collect()
    }
}

/// 标签：去空白、转小写、丢弃空项
pub fn normalize_tags<I, S>(tags: I) -> TagSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// 概念名称：去空白、丢弃空项，大小写敏感
pub fn normalize_names<I, S>(names: I) -> TagSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// handle 比较时使用的规范形式；空白 handle 返回 None
pub fn normalize_handle(handle: &str) -> Option<String> {
    let handle = handle.trim();
    if handle.is_empty() {
        None
    } else {
        Some(handle.to_lowercase())
    }
}

/// serde 辅助：接受数组、逗号分隔字符串或 null
pub fn deserialize_list<'de, D>(deserializer: D) -> Result<ListInput, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ListInput>::deserialize(deserializer)?.unwrap_or_default())
}
