//! 过滤规则与过滤链

use std::fmt;
use std::sync::Arc;

use crate::discovery::{Instance, ResolveContext};

/// 过滤函数
///
/// 输入上一阶段留下的实例，返回过滤后的实例。函数应当是纯函数且不会失败；
/// 同一个函数会被多个并发解析调用共享，因此要求 `Send + Sync`。
pub trait FilterFunc: Send + Sync {
    fn apply(&self, ctx: &ResolveContext, instances: Vec<Instance>) -> Vec<Instance>;
}

impl<F> FilterFunc for F
where
    F: Fn(&ResolveContext, Vec<Instance>) -> Vec<Instance> + Send + Sync,
{
    fn apply(&self, ctx: &ResolveContext, instances: Vec<Instance>) -> Vec<Instance> {
        self(ctx, instances)
    }
}

/// 过滤规则
///
/// 具名的、有序的过滤函数列表。名称会成为解析器名称的一部分并参与缓存键计算，
/// 在同一缓存作用域内必须唯一。
#[derive(Clone, Default)]
pub struct FilterRule {
    name: String,
    funcs: Vec<Arc<dyn FilterFunc>>,
}

impl FilterRule {
    /// 创建没有任何过滤函数的规则
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            funcs: Vec::new(),
        }
    }

    /// 在末尾追加一个过滤函数
    pub fn with_filter<F>(mut self, func: F) -> Self
    where
        F: FilterFunc + 'static,
    {
        self.funcs.push(Arc::new(func));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// 按声明顺序依次执行过滤函数
    ///
    /// 输入为空或规则中没有函数时原样返回，不调用任何函数
    pub fn apply(&self, ctx: &ResolveContext, instances: Vec<Instance>) -> Vec<Instance> {
        if instances.is_empty() || self.funcs.is_empty() {
            return instances;
        }

        self.funcs
            .iter()
            .enumerate()
            .fold(instances, |remaining, (stage, func)| {
                let output = func.apply(ctx, remaining);
                tracing::trace!(rule = %self.name, stage, remaining = output.len(), "Filter stage applied");
                output
            })
    }
}

impl fmt::Debug for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRule")
            .field("name", &self.name)
            .field("funcs", &self.funcs.len())
            .finish()
    }
}

/// 实例过滤链
///
/// 按声明顺序依次执行规则中的过滤函数，每个函数只能看到前面阶段留下的实例。
#[derive(Debug, Clone, Default)]
pub struct InstanceFilter {
    rule: Option<FilterRule>,
}

impl InstanceFilter {
    pub fn new(rule: FilterRule) -> Self {
        Self { rule: Some(rule) }
    }

    /// 未配置规则的过滤链，原样返回输入
    pub fn empty() -> Self {
        Self::default()
    }

    /// 执行过滤
    pub fn apply(&self, ctx: &ResolveContext, instances: Vec<Instance>) -> Vec<Instance> {
        match &self.rule {
            Some(rule) => rule.apply(ctx, instances),
            None => instances,
        }
    }

    /// 规则名称，未配置规则时为空字符串
    pub fn name(&self) -> &str {
        self.rule.as_ref().map(FilterRule::name).unwrap_or("")
    }
}
