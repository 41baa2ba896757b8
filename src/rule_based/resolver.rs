//! 基于规则的解析器
//!
//! 包装任意 [`Resolver`]，在 resolve 结果返回调用方之前按过滤规则裁剪实例列表。
//! 对外暴露的契约与被包装的解析器完全一致，可以在任何需要解析器的地方直接替换。

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::discovery::{Change, DiscoveryResult, EndpointInfo, ResolveContext, Resolver};
use crate::error::{DiscoveryError, Result};
use crate::rule_based::filter::FilterRule;

/// 组合名称中解析器名与规则名之间的分隔符
pub const NAME_SEPARATOR: &str = "|";

/// 基于规则的解析器
///
/// 持有被包装解析器的共享引用（不负责其生命周期）和一条过滤规则。
/// 构造后不再有可变状态，可以在多个任务间并发使用。
#[derive(Clone)]
pub struct RuleBasedResolver {
    resolver: Arc<dyn Resolver>,
    rule: FilterRule,
}

impl RuleBasedResolver {
    /// 用解析器和过滤规则构造
    pub fn new(resolver: Arc<dyn Resolver>, rule: FilterRule) -> Self {
        info!(
            resolver = %resolver.name(),
            rule = %rule.name(),
            filters = rule.len(),
            "Rule-based resolver created"
        );
        Self { resolver, rule }
    }

    /// 创建构造器，两个部件缺一不可
    pub fn builder() -> RuleBasedResolverBuilder {
        RuleBasedResolverBuilder::default()
    }

    /// 被包装的解析器
    pub fn delegate(&self) -> &Arc<dyn Resolver> {
        &self.resolver
    }

    /// 过滤规则
    pub fn rule(&self) -> &FilterRule {
        &self.rule
    }
}

impl fmt::Debug for RuleBasedResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBasedResolver")
            .field("resolver", &self.resolver.name())
            .field("rule", &self.rule)
            .finish()
    }
}

#[async_trait]
impl Resolver for RuleBasedResolver {
    fn target(&self, ctx: &ResolveContext, endpoint: &EndpointInfo) -> String {
        self.resolver.target(ctx, endpoint)
    }

    async fn resolve(&self, ctx: &ResolveContext, desc: &str) -> Result<DiscoveryResult> {
        let mut result = match self.resolver.resolve(ctx, desc).await {
            Ok(result) => result,
            Err(e) => {
                debug!(resolver = %self.resolver.name(), desc, error = %e, "Delegate resolve failed");
                return Err(e);
            }
        };

        let before = result.instances.len();
        result.instances = self.rule.apply(ctx, std::mem::take(&mut result.instances));
        debug!(
            resolver = %self.resolver.name(),
            rule = %self.rule.name(),
            desc,
            before,
            after = result.instances.len(),
            "Instances filtered"
        );
        Ok(result)
    }

    fn diff(&self, cache_key: &str, prev: &DiscoveryResult, next: &DiscoveryResult) -> Option<Change> {
        self.resolver.diff(cache_key, prev, next)
    }

    // 规则名为空时保留末尾分隔符，保证与未包装的解析器名称不同
    fn name(&self) -> String {
        format!("{}{}{}", self.resolver.name(), NAME_SEPARATOR, self.rule.name())
    }
}

/// [`RuleBasedResolver`] 构造器
///
/// 用于配置驱动的装配场景，缺少解析器或规则时 `build` 返回配置错误
#[derive(Default)]
pub struct RuleBasedResolverBuilder {
    resolver: Option<Arc<dyn Resolver>>,
    rule: Option<FilterRule>,
}

impl RuleBasedResolverBuilder {
    pub fn resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn rule(mut self, rule: FilterRule) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn build(self) -> Result<RuleBasedResolver> {
        match (self.resolver, self.rule) {
            (Some(resolver), Some(rule)) => Ok(RuleBasedResolver::new(resolver, rule)),
            _ => Err(DiscoveryError::config(
                "Resolver and FilterRule should be provided",
            )),
        }
    }
}
