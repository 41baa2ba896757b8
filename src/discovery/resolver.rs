//! 服务解析器抽象

use std::sync::Arc;

use async_trait::async_trait;

use crate::discovery::context::ResolveContext;
use crate::discovery::endpoint::EndpointInfo;
use crate::discovery::result::{Change, DiscoveryResult};
use crate::error::Result;

/// 服务解析器 trait
///
/// 把逻辑服务名翻译为一组服务实例。调用方通常以 `name()` 作为缓存键的一部分，
/// 用 `target` 推导出的描述符调用 `resolve`，并用 `diff` 比较前后两次结果。
/// 注意：由于需要动态分发（dyn），使用 async-trait
#[async_trait]
pub trait Resolver: Send + Sync {
    /// 根据端点信息推导解析描述符
    fn target(&self, ctx: &ResolveContext, endpoint: &EndpointInfo) -> String;

    /// 解析描述符，返回实例列表
    async fn resolve(&self, ctx: &ResolveContext, desc: &str) -> Result<DiscoveryResult>;

    /// 计算两次结果之间的变更，没有变更时返回 `None`
    fn diff(&self, cache_key: &str, prev: &DiscoveryResult, next: &DiscoveryResult) -> Option<Change>;

    /// 解析器名称，用于区分缓存
    fn name(&self) -> String;
}

#[async_trait]
impl<T> Resolver for Arc<T>
where
    T: Resolver + ?Sized,
{
    fn target(&self, ctx: &ResolveContext, endpoint: &EndpointInfo) -> String {
        (**self).target(ctx, endpoint)
    }

    async fn resolve(&self, ctx: &ResolveContext, desc: &str) -> Result<DiscoveryResult> {
        (**self).resolve(ctx, desc).await
    }

    fn diff(&self, cache_key: &str, prev: &DiscoveryResult, next: &DiscoveryResult) -> Option<Change> {
        (**self).diff(cache_key, prev, next)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
