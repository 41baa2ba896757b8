//! 错误代码和错误类别定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 服务发现错误代码
///
/// 错误代码按类别分组，每个类别占用1000个代码范围：
/// - 1000-1999: 解析相关错误
/// - 2000-2999: 后端相关错误
/// - 6000-6999: 系统相关错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum ErrorCode {
    // ============================================================
    // 解析相关错误 (1000-1999)
    // ============================================================
    ServiceNotFound = 1000,
    ResolveCancelled = 1001,

    // ============================================================
    // 后端相关错误 (2000-2999)
    // ============================================================
    BackendError = 2000,
    BackendUnavailable = 2001,

    // ============================================================
    // 系统相关错误 (6000-6999)
    // ============================================================
    InternalError = 6000,
    ConfigurationError = 6003,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ErrorCode {
    /// 获取错误代码的数字值
    #[inline]
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// 从数字值创建错误代码
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            1000 => Some(ErrorCode::ServiceNotFound),
            1001 => Some(ErrorCode::ResolveCancelled),
            2000 => Some(ErrorCode::BackendError),
            2001 => Some(ErrorCode::BackendUnavailable),
            6000 => Some(ErrorCode::InternalError),
            6003 => Some(ErrorCode::ConfigurationError),
            _ => None,
        }
    }

    /// 获取错误代码的英文标识符
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ServiceNotFound => "SERVICE_NOT_FOUND",
            ErrorCode::ResolveCancelled => "RESOLVE_CANCELLED",
            ErrorCode::BackendError => "BACKEND_ERROR",
            ErrorCode::BackendUnavailable => "BACKEND_UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ConfigurationError => "CONFIGURATION_ERROR",
        }
    }

    /// 获取错误代码的类别
    pub fn category(&self) -> ErrorCategory {
        match self.as_u32() {
            1000..=1999 => ErrorCategory::Resolve,
            2000..=2999 => ErrorCategory::Backend,
            _ => ErrorCategory::System,
        }
    }

    /// 判断是否为可重试的错误
    ///
    /// 本层不做重试，这里只给被包装解析器的调用方提供判断依据
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCode::BackendUnavailable)
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    Resolve,
    Backend,
    System,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Resolve => write!(f, "RESOLVE"),
            ErrorCategory::Backend => write!(f, "BACKEND"),
            ErrorCategory::System => write!(f, "SYSTEM"),
        }
    }
}
