//! 静态服务解析器
//!
//! 实例列表来自配置或手动维护，不依赖任何外部注册中心

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::discovery::context::ResolveContext;
use crate::discovery::endpoint::EndpointInfo;
use crate::discovery::instance::Instance;
use crate::discovery::resolver::Resolver;
use crate::discovery::result::{Change, DiscoveryResult, default_diff};
use crate::error::{DiscoveryError, Result};

/// 静态解析器名称
pub const STATIC_RESOLVER_NAME: &str = "static";

/// 静态服务解析器
#[derive(Clone, Default)]
pub struct StaticResolver {
    // 服务名 -> 实例列表
    services: Arc<RwLock<HashMap<String, Vec<Instance>>>>,
}

impl StaticResolver {
    /// 创建空的静态解析器
    pub fn new() -> Self {
        Self::default()
    }

    /// 从服务表创建
    pub fn from_services(services: HashMap<String, Vec<Instance>>) -> Self {
        Self {
            services: Arc::new(RwLock::new(services)),
        }
    }

    /// 设置（或替换）某个服务的实例列表
    pub async fn set_instances(&self, service: impl Into<String>, instances: Vec<Instance>) {
        let service = service.into();
        tracing::debug!(service = %service, count = instances.len(), "Static instances updated");
        self.services.write().await.insert(service, instances);
    }

    /// 移除某个服务
    pub async fn remove_service(&self, service: &str) -> Option<Vec<Instance>> {
        self.services.write().await.remove(service)
    }

    /// 当前已知的服务名
    pub async fn service_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.services.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl Resolver for StaticResolver {
    fn target(&self, _ctx: &ResolveContext, endpoint: &EndpointInfo) -> String {
        endpoint.service_name().to_string()
    }

    async fn resolve(&self, ctx: &ResolveContext, desc: &str) -> Result<DiscoveryResult> {
        if ctx.is_cancelled() {
            return Err(DiscoveryError::Cancelled);
        }
        let services = self.services.read().await;
        match services.get(desc) {
            Some(instances) => Ok(DiscoveryResult::cacheable(desc, instances.clone())),
            None => Err(DiscoveryError::ServiceNotFound(desc.to_string())),
        }
    }

    fn diff(&self, cache_key: &str, prev: &DiscoveryResult, next: &DiscoveryResult) -> Option<Change> {
        default_diff(cache_key, prev, next)
    }

    fn name(&self) -> String {
        STATIC_RESOLVER_NAME.to_string()
    }
}
