//! 服务发现统一错误类型

use super::code::ErrorCode;
use thiserror::Error;

/// 服务发现统一错误类型
///
/// 装饰层不会包装或改写被包装解析器返回的错误，调用方可以直接对变体做模式匹配。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// 目标服务不存在
    #[error("服务不存在: {0}")]
    ServiceNotFound(String),

    /// 后端（etcd、consul 等）返回的错误
    #[error("后端错误 [{backend}]: {reason}")]
    Backend { backend: String, reason: String },

    /// 后端暂时不可用
    #[error("后端不可用 [{backend}]: {reason}")]
    Unavailable { backend: String, reason: String },

    /// 配置或构造错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 调用方取消了解析
    #[error("解析已取消")]
    Cancelled,

    /// 系统错误
    #[error("系统错误: {0}")]
    System(String),
}

impl DiscoveryError {
    /// 创建后端错误
    pub fn backend(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        DiscoveryError::Backend {
            backend: backend.into(),
            reason: reason.into(),
        }
    }

    /// 创建后端不可用错误
    pub fn unavailable(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        DiscoveryError::Unavailable {
            backend: backend.into(),
            reason: reason.into(),
        }
    }

    /// 创建配置错误
    pub fn config(msg: impl Into<String>) -> Self {
        DiscoveryError::Config(msg.into())
    }

    /// 创建系统错误
    pub fn system(msg: impl Into<String>) -> Self {
        DiscoveryError::System(msg.into())
    }

    /// 获取错误代码
    pub fn code(&self) -> ErrorCode {
        match self {
            DiscoveryError::ServiceNotFound(_) => ErrorCode::ServiceNotFound,
            DiscoveryError::Backend { .. } => ErrorCode::BackendError,
            DiscoveryError::Unavailable { .. } => ErrorCode::BackendUnavailable,
            DiscoveryError::Config(_) => ErrorCode::ConfigurationError,
            DiscoveryError::Cancelled => ErrorCode::ResolveCancelled,
            DiscoveryError::System(_) => ErrorCode::InternalError,
        }
    }

    /// 是否可重试
    pub fn is_retryable(&self) -> bool {
        self.code().is_retryable()
    }
}

/// 服务发现结果类型
pub type Result<T> = std::result::Result<T, DiscoveryError>;
