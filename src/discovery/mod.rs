//! 服务发现基础抽象
//!
//! 定义解析器契约（target / resolve / diff / name）以及实例、结果等数据模型，
//! 并提供闭包拼装和静态配置两种解析器实现。

pub mod context;
pub mod endpoint;
pub mod instance;
pub mod resolver;
pub mod result;
pub mod static_resolver;
pub mod synthesized;

pub use context::ResolveContext;
pub use endpoint::EndpointInfo;
pub use instance::{Address, DEFAULT_WEIGHT, Instance};
pub use resolver::Resolver;
pub use result::{Change, DiscoveryResult, default_diff};
pub use static_resolver::{STATIC_RESOLVER_NAME, StaticResolver};
pub use synthesized::SynthesizedResolver;
