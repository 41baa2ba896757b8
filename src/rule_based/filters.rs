//! 常用过滤函数
//!
//! 基于标签和网络类型挑选实例，都是保持原有顺序的子集过滤。

use crate::discovery::{Instance, ResolveContext};
use crate::rule_based::filter::FilterFunc;

/// 标签匹配方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMatch {
    /// 值完全相等
    Exact(String),
    /// 值以指定前缀开头
    Prefix(String),
    /// 只要求标签存在
    Present,
}

/// 按单个标签挑选实例
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilterFunc {
    key: String,
    matcher: TagMatch,
}

impl TagFilterFunc {
    pub fn new(key: impl Into<String>, matcher: TagMatch) -> Self {
        Self {
            key: key.into(),
            matcher,
        }
    }

    pub fn matches(&self, instance: &Instance) -> bool {
        match (instance.tag(&self.key), &self.matcher) {
            (None, _) => false,
            (Some(_), TagMatch::Present) => true,
            (Some(v), TagMatch::Exact(expected)) => v == expected,
            (Some(v), TagMatch::Prefix(prefix)) => v.starts_with(prefix.as_str()),
        }
    }
}

impl FilterFunc for TagFilterFunc {
    fn apply(&self, _ctx: &ResolveContext, instances: Vec<Instance>) -> Vec<Instance> {
        instances.into_iter().filter(|inst| self.matches(inst)).collect()
    }
}

/// 按网络类型挑选实例
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkFilter {
    networks: Vec<String>,
}

impl NetworkFilter {
    pub fn new<I, S>(networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            networks: networks.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, instance: &Instance) -> bool {
        self.networks
            .iter()
            .any(|n| n == instance.address().network())
    }
}

impl FilterFunc for NetworkFilter {
    fn apply(&self, _ctx: &ResolveContext, instances: Vec<Instance>) -> Vec<Instance> {
        instances.into_iter().filter(|inst| self.matches(inst)).collect()
    }
}

/// 标签值等于 `value` 的实例
pub fn tag_equals(key: impl Into<String>, value: impl Into<String>) -> TagFilterFunc {
    TagFilterFunc::new(key, TagMatch::Exact(value.into()))
}

/// 标签值以 `prefix` 开头的实例
pub fn tag_prefix(key: impl Into<String>, prefix: impl Into<String>) -> TagFilterFunc {
    TagFilterFunc::new(key, TagMatch::Prefix(prefix.into()))
}

/// 带有标签 `key` 的实例
pub fn has_tag(key: impl Into<String>) -> TagFilterFunc {
    TagFilterFunc::new(key, TagMatch::Present)
}

/// 网络类型为 `network` 的实例
pub fn network(network: impl Into<String>) -> NetworkFilter {
    NetworkFilter::new([network.into()])
}
