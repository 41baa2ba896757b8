//! 配置
//!
//! 以 TOML 声明过滤规则和静态服务实例：
//!
//! ```toml
//! [[rules]]
//! name = "canary"
//! networks = ["tcp"]
//! tag_filters = [{ key = "lane", value = "canary" }]
//!
//! [[services]]
//! name = "echo"
//! instances = [
//!     { address = "10.0.0.1:8888", tags = { lane = "canary" } },
//!     { address = "10.0.0.2:8888" },
//! ]
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::discovery::{DEFAULT_WEIGHT, Instance, Resolver, StaticResolver};
use crate::error::{DiscoveryError, InfraResult, Result};
use crate::rule_based::{FilterRule, NetworkFilter, RuleBasedResolver, TagFilterFunc, TagMatch};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuleBasedConfig {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
    #[serde(default)]
    pub services: Vec<ServiceConfig>,
}

/// 过滤规则配置
///
/// 编译后先按网络类型过滤（如果配置了），再按声明顺序逐个应用标签过滤器
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleConfig {
    pub name: String,
    #[serde(default)]
    pub networks: Vec<String>,
    #[serde(default)]
    pub tag_filters: Vec<TagFilter>,
}

/// 标签过滤器
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagFilter {
    /// 标签键
    pub key: String,

    /// 标签值（可选，如果为 None 则只检查键是否存在）
    pub value: Option<String>,

    /// 匹配模式（exact, prefix）
    #[serde(default)]
    pub pattern: MatchPattern,
}

/// 标签匹配模式
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchPattern {
    #[default]
    Exact,
    Prefix,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub name: String,
    #[serde(default)]
    pub instances: Vec<InstanceConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstanceConfig {
    #[serde(default = "default_network")]
    pub network: String,
    pub address: String,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

fn default_network() -> String {
    "tcp".to_string()
}

fn default_weight() -> u32 {
    DEFAULT_WEIGHT
}

impl TagFilter {
    pub fn to_filter_func(&self) -> TagFilterFunc {
        let matcher = match (&self.value, self.pattern) {
            (None, _) => TagMatch::Present,
            (Some(v), MatchPattern::Exact) => TagMatch::Exact(v.clone()),
            (Some(v), MatchPattern::Prefix) => TagMatch::Prefix(v.clone()),
        };
        TagFilterFunc::new(self.key.clone(), matcher)
    }
}

impl RuleConfig {
    /// 编译为过滤规则
    pub fn to_filter_rule(&self) -> Result<FilterRule> {
        if self.name.is_empty() {
            return Err(DiscoveryError::config("filter rule name must not be empty"));
        }
        let mut rule = FilterRule::new(self.name.clone());
        if !self.networks.is_empty() {
            rule = rule.with_filter(NetworkFilter::new(self.networks.iter().cloned()));
        }
        for tag_filter in &self.tag_filters {
            rule = rule.with_filter(tag_filter.to_filter_func());
        }
        Ok(rule)
    }
}

impl InstanceConfig {
    pub fn to_instance(&self) -> Instance {
        Instance::new(
            self.network.clone(),
            self.address.clone(),
            self.weight,
            self.tags.clone(),
        )
    }
}

impl RuleBasedConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> InfraResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> InfraResult<Self> {
        let config: RuleBasedConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// 编译全部规则，规则名重复时返回配置错误
    pub fn build_rules(&self) -> Result<HashMap<String, FilterRule>> {
        let mut seen = HashSet::new();
        let mut rules = HashMap::with_capacity(self.rules.len());
        for rule_config in &self.rules {
            if !seen.insert(rule_config.name.as_str()) {
                return Err(DiscoveryError::config(format!(
                    "duplicate filter rule name: {}",
                    rule_config.name
                )));
            }
            rules.insert(rule_config.name.clone(), rule_config.to_filter_rule()?);
        }
        Ok(rules)
    }

    /// 按名称编译单条规则
    pub fn rule(&self, name: &str) -> Result<FilterRule> {
        self.build_rules()?
            .remove(name)
            .ok_or_else(|| DiscoveryError::config(format!("filter rule not found: {}", name)))
    }

    /// 由 `services` 构建静态解析器
    pub fn build_static_resolver(&self) -> StaticResolver {
        StaticResolver::from_services(
            self.services
                .iter()
                .map(|svc| {
                    let instances = svc.instances.iter().map(InstanceConfig::to_instance).collect();
                    (svc.name.clone(), instances)
                })
                .collect(),
        )
    }

    /// 用指定规则包装解析器
    pub fn build_resolver(
        &self,
        resolver: Arc<dyn Resolver>,
        rule_name: &str,
    ) -> Result<RuleBasedResolver> {
        RuleBasedResolver::builder()
            .resolver(resolver)
            .rule(self.rule(rule_name)?)
            .build()
    }
}
