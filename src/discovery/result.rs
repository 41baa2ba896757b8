//! 解析结果与变更计算

use std::collections::HashMap;

use crate::discovery::instance::Instance;

/// 一次解析的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryResult {
    /// 结果是否可被缓存
    pub cacheable: bool,

    /// 缓存键
    pub cache_key: String,

    /// 实例列表
    pub instances: Vec<Instance>,
}

impl DiscoveryResult {
    /// 创建可缓存的结果
    pub fn cacheable(cache_key: impl Into<String>, instances: Vec<Instance>) -> Self {
        Self {
            cacheable: true,
            cache_key: cache_key.into(),
            instances,
        }
    }
}

/// 两次解析结果之间的变更
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Change {
    /// 最新的结果
    pub result: DiscoveryResult,
    pub added: Vec<Instance>,
    pub updated: Vec<Instance>,
    pub removed: Vec<Instance>,
}

impl Change {
    /// 是否包含任何变更
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// 默认的变更计算
///
/// 以实例地址为键比较两次结果，同一地址下的多个实例按多重集合比较：
/// 内容完全相同的实例互相抵消；剩下的 `next` 实例若同地址下还有未匹配的 `prev` 实例则记为更新，
/// 否则记为新增；最终仍未匹配的 `prev` 实例记为删除。没有任何变更时返回 `None`。
pub fn default_diff(cache_key: &str, prev: &DiscoveryResult, next: &DiscoveryResult) -> Option<Change> {
    // 地址 -> 尚未匹配的 prev 实例下标（保持原有顺序）
    let mut remaining: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, inst) in prev.instances.iter().enumerate() {
        remaining.entry(inst.address().to_string()).or_default().push(idx);
    }

    let mut unmatched: Vec<(String, &Instance)> = Vec::new();
    for inst in &next.instances {
        let key = inst.address().to_string();
        let matched = remaining.get_mut(&key).is_some_and(|group| {
            match group.iter().position(|&idx| prev.instances[idx] == *inst) {
                Some(pos) => {
                    group.remove(pos);
                    true
                }
                None => false,
            }
        });
        if !matched {
            unmatched.push((key, inst));
        }
    }

    let mut change = Change {
        result: DiscoveryResult {
            cacheable: next.cacheable,
            cache_key: cache_key.to_string(),
            instances: next.instances.clone(),
        },
        ..Default::default()
    };

    for (key, inst) in unmatched {
        let replaced = remaining
            .get_mut(&key)
            .filter(|group| !group.is_empty())
            .map(|group| group.remove(0));
        match replaced {
            Some(_) => change.updated.push(inst.clone()),
            None => change.added.push(inst.clone()),
        }
    }

    let mut removed: Vec<usize> = remaining.into_values().flatten().collect();
    removed.sort_unstable();
    change.removed = removed
        .into_iter()
        .map(|idx| prev.instances[idx].clone())
        .collect();

    if change.is_empty() { None } else { Some(change) }
}
