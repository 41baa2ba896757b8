//! 服务发现错误处理模块
//!
//! 提供统一的错误类型、错误代码分类和 gRPC 状态转换

pub mod code;
pub mod discovery_error;
#[cfg(feature = "grpc")]
pub mod grpc;

pub use code::{ErrorCategory, ErrorCode};
pub use discovery_error::{DiscoveryError, Result};
#[cfg(feature = "grpc")]
pub use grpc::map_error_code_to_grpc;

/// 基础设施层（配置加载等）默认使用的结果类型
pub type InfraResult<T> = anyhow::Result<T>;
