//! 解析上下文

use std::collections::HashMap;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// 解析上下文
///
/// 由调用方提供，解析器装饰层原样转发给被包装的解析器和每个过滤函数。
/// 克隆开销很小，克隆后共享同一个取消令牌和元数据。
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    cancel: CancellationToken,
    values: Arc<HashMap<String, String>>,
}

impl ResolveContext {
    /// 创建空上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定的取消令牌
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// 附加一个元数据（如 trace id）
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.values).insert(key.into(), value.into());
        self
    }

    /// 读取元数据
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 取消令牌
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// 调用方是否已取消
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
