//! Flare Rule-Based Resolver
//!
//! Wraps any service-discovery resolver with a named, ordered chain of instance filters.
//! The wrapper exposes the same resolver contract as the resolver it wraps, and derives
//! its name from the delegate's name and the rule's name so that resolver-keyed caches
//! keep differently filtered views apart.

pub mod config;
pub mod discovery;
pub mod error;
pub mod rule_based;
pub mod telemetry;

// Re-exports
pub use config::{InstanceConfig, MatchPattern, RuleBasedConfig, RuleConfig, ServiceConfig, TagFilter};
pub use discovery::{
    Address, Change, DiscoveryResult, EndpointInfo, Instance, ResolveContext, Resolver,
    StaticResolver, SynthesizedResolver, default_diff,
};
pub use error::{DiscoveryError, ErrorCategory, ErrorCode, Result};
pub use rule_based::{
    FilterFunc, FilterRule, InstanceFilter, NAME_SEPARATOR, RuleBasedResolver,
    RuleBasedResolverBuilder,
};
pub use telemetry::init_tracing;
