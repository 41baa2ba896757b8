//! 由闭包拼装的解析器

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use crate::discovery::context::ResolveContext;
use crate::discovery::endpoint::EndpointInfo;
use crate::discovery::resolver::Resolver;
use crate::discovery::result::{Change, DiscoveryResult};
use crate::error::Result;

type TargetFn = Arc<dyn Fn(&ResolveContext, &EndpointInfo) -> String + Send + Sync>;
type ResolveFuture = Pin<Box<dyn Future<Output = Result<DiscoveryResult>> + Send>>;
type ResolveFn = Arc<dyn Fn(ResolveContext, String) -> ResolveFuture + Send + Sync>;
type DiffFn = Arc<dyn Fn(&str, &DiscoveryResult, &DiscoveryResult) -> Option<Change> + Send + Sync>;
type NameFn = Arc<dyn Fn() -> String + Send + Sync>;

/// 由闭包拼装的解析器
///
/// 适用于测试替身或对已有客户端做轻量适配。未设置的操作使用默认行为：
/// - target: 返回服务名
/// - resolve: 返回空结果
/// - diff: 视为没有变更
/// - name: 空字符串
#[derive(Clone, Default)]
pub struct SynthesizedResolver {
    target_fn: Option<TargetFn>,
    resolve_fn: Option<ResolveFn>,
    diff_fn: Option<DiffFn>,
    name_fn: Option<NameFn>,
}

impl SynthesizedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置 target 实现
    pub fn with_target<F>(mut self, f: F) -> Self
    where
        F: Fn(&ResolveContext, &EndpointInfo) -> String + Send + Sync + 'static,
    {
        self.target_fn = Some(Arc::new(f));
        self
    }

    /// 设置 resolve 实现
    ///
    /// 闭包拿到上下文和描述符的所有权，返回的 future 不借用解析器
    pub fn with_resolve<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(ResolveContext, String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<DiscoveryResult>> + Send + 'static,
    {
        self.resolve_fn = Some(Arc::new(move |ctx: ResolveContext, desc: String| {
            Box::pin(f(ctx, desc)) as ResolveFuture
        }));
        self
    }

    /// 设置 diff 实现
    pub fn with_diff<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &DiscoveryResult, &DiscoveryResult) -> Option<Change> + Send + Sync + 'static,
    {
        self.diff_fn = Some(Arc::new(f));
        self
    }

    /// 设置 name 实现
    pub fn with_name<F>(mut self, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.name_fn = Some(Arc::new(f));
        self
    }
}

impl std::fmt::Debug for SynthesizedResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthesizedResolver")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Resolver for SynthesizedResolver {
    fn target(&self, ctx: &ResolveContext, endpoint: &EndpointInfo) -> String {
        match &self.target_fn {
            Some(f) => f(ctx, endpoint),
            None => endpoint.service_name().to_string(),
        }
    }

    async fn resolve(&self, ctx: &ResolveContext, desc: &str) -> Result<DiscoveryResult> {
        match &self.resolve_fn {
            Some(f) => f(ctx.clone(), desc.to_string()).await,
            None => Ok(DiscoveryResult::default()),
        }
    }

    fn diff(&self, cache_key: &str, prev: &DiscoveryResult, next: &DiscoveryResult) -> Option<Change> {
        self.diff_fn.as_ref().and_then(|f| f(cache_key, prev, next))
    }

    fn name(&self) -> String {
        self.name_fn.as_ref().map(|f| f()).unwrap_or_default()
    }
}
