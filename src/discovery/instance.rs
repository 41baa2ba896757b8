//! 服务实例定义

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 默认权重
pub const DEFAULT_WEIGHT: u32 = 100;

/// 实例网络地址
///
/// 由网络类型（"tcp"、"unix" 等）和地址字符串组成，不要求地址可被解析为 SocketAddr
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Address {
    network: String,
    address: String,
}

impl Address {
    /// 创建新的地址
    pub fn new(network: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            address: address.into(),
        }
    }

    /// 创建 TCP 地址
    pub fn tcp(address: impl Into<String>) -> Self {
        Self::new("tcp", address)
    }

    /// 网络类型
    pub fn network(&self) -> &str {
        &self.network
    }

    /// 地址字符串
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.network, self.address)
    }
}

/// 服务实例
///
/// 实例由被包装的解析器产生，标签在注册时确定，之后不可修改。
/// 过滤函数只能通过访问器只读地使用实例。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instance {
    /// 服务地址
    address: Address,

    /// 权重（用于负载均衡）
    weight: u32,

    /// 自定义标签（用于过滤和路由）
    tags: HashMap<String, String>,
}

impl Instance {
    /// 创建新的服务实例
    pub fn new(
        network: impl Into<String>,
        address: impl Into<String>,
        weight: u32,
        tags: HashMap<String, String>,
    ) -> Self {
        Self {
            address: Address::new(network, address),
            weight,
            tags,
        }
    }

    /// 以默认权重、无标签创建实例
    pub fn from_address(address: Address) -> Self {
        Self {
            address,
            weight: DEFAULT_WEIGHT,
            tags: HashMap::new(),
        }
    }

    /// 添加标签（仅在构造阶段使用）
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// 设置权重
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// 服务地址
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// 权重
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// 读取单个标签
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}
