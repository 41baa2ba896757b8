//! gRPC 错误处理
//!
//! 提供 DiscoveryError 到 tonic::Status 的转换

use super::{DiscoveryError, ErrorCode};
use tonic::{Code, Status};

/// 将错误代码映射为 gRPC 状态码
pub fn map_error_code_to_grpc(code: ErrorCode) -> Code {
    match code {
        ErrorCode::ServiceNotFound => Code::NotFound,
        ErrorCode::ResolveCancelled => Code::Cancelled,
        ErrorCode::BackendError => Code::Internal,
        ErrorCode::BackendUnavailable => Code::Unavailable,
        ErrorCode::InternalError => Code::Internal,
        ErrorCode::ConfigurationError => Code::FailedPrecondition,
    }
}

impl From<DiscoveryError> for Status {
    fn from(err: DiscoveryError) -> Self {
        let code = err.code();
        let mut status = Status::new(map_error_code_to_grpc(code), err.to_string());
        if let Ok(value) = code.as_str().parse() {
            status.metadata_mut().insert("x-error-code", value);
        }
        status
    }
}
