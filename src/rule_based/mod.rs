//! 基于规则的实例过滤
//!
//! 以装饰器的方式给任意解析器加上具名、有序的过滤链。

pub mod filter;
pub mod filters;
pub mod resolver;

pub use filter::{FilterFunc, FilterRule, InstanceFilter};
pub use filters::{NetworkFilter, TagFilterFunc, TagMatch, has_tag, network, tag_equals, tag_prefix};
pub use resolver::{NAME_SEPARATOR, RuleBasedResolver, RuleBasedResolverBuilder};
