//! 调用端点信息

/// 调用端点信息
///
/// 描述调用方想要访问的目标，解析器的 `target` 据此推导解析描述符
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointInfo {
    service_name: String,
    method: String,
}

impl EndpointInfo {
    /// 创建新的端点信息
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// 设置调用方法
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn method(&self) -> &str {
        &self.method
    }
}
