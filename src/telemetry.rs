//! 日志追踪初始化

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// 默认日志级别，未设置 `RUST_LOG` 时使用
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 安装全局 tracing subscriber
///
/// `json` 为 true 时输出 JSON 格式，便于日志采集。重复调用返回错误而不是 panic。
pub fn init_tracing(json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))?;

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }
    Ok(())
}
