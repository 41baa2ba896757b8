//! 配置加载与规则编译测试

use flare_resolver_rule_based::config::{MatchPattern, RuleBasedConfig};
use flare_resolver_rule_based::discovery::{EndpointInfo, ResolveContext, Resolver};
use flare_resolver_rule_based::error::{DiscoveryError, ErrorCode};
use std::sync::Arc;

const CONFIG: &str = r#"
[[rules]]
name = "canary"
networks = ["tcp"]
tag_filters = [
    { key = "lane", value = "canary", pattern = "prefix" },
    { key = "zone" },
]

[[rules]]
name = "stable"
tag_filters = [{ key = "lane", value = "stable" }]

[[services]]
name = "echo"
instances = [
    { address = "10.0.0.1:8888", tags = { lane = "canary-1", zone = "a" } },
    { address = "10.0.0.2:8888", tags = { lane = "canary-2" } },
    { address = "10.0.0.3:8888", weight = 50, tags = { lane = "stable", zone = "b" } },
    { network = "unix", address = "/tmp/echo.sock", tags = { lane = "canary-3", zone = "a" } },
]
"#;

#[test]
fn test_parse_config() {
    let config = RuleBasedConfig::from_toml_str(CONFIG).expect("valid config");
    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.rules[0].tag_filters[0].pattern, MatchPattern::Prefix);
    assert_eq!(config.rules[1].tag_filters[0].pattern, MatchPattern::Exact);
    assert!(config.rules[0].tag_filters[1].value.is_none());

    let echo = &config.services[0];
    assert_eq!(echo.instances[0].network, "tcp");
    assert_eq!(echo.instances[0].weight, 100);
    assert_eq!(echo.instances[2].weight, 50);
    assert_eq!(echo.instances[3].network, "unix");
}

#[test]
fn test_build_rules() {
    let config = RuleBasedConfig::from_toml_str(CONFIG).unwrap();
    let rules = config.build_rules().unwrap();
    // 网络过滤器 + 两个标签过滤器
    assert_eq!(rules["canary"].len(), 3);
    assert_eq!(rules["stable"].len(), 1);
}

#[test]
fn test_duplicate_rule_names_rejected() {
    let config = RuleBasedConfig::from_toml_str(
        r#"
[[rules]]
name = "dup"

[[rules]]
name = "dup"
"#,
    )
    .unwrap();
    let err = config.build_rules().unwrap_err();
    assert!(matches!(err, DiscoveryError::Config(_)));
    assert_eq!(err.code(), ErrorCode::ConfigurationError);
}

#[test]
fn test_unknown_rule_rejected() {
    let config = RuleBasedConfig::from_toml_str(CONFIG).unwrap();
    let err = config.rule("missing").unwrap_err();
    assert!(matches!(err, DiscoveryError::Config(_)));
}

#[test]
fn test_invalid_toml_rejected() {
    assert!(RuleBasedConfig::from_toml_str("[[rules]]\nname = 1").is_err());
}

#[test]
fn test_load_missing_file() {
    let err = RuleBasedConfig::load_from_file("/nonexistent/rules.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/rules.toml"));
}

#[tokio::test]
async fn test_build_resolver_from_config() {
    let config = RuleBasedConfig::from_toml_str(CONFIG).unwrap();
    let delegate = Arc::new(config.build_static_resolver());
    let ctx = ResolveContext::new();

    let canary = config.build_resolver(delegate.clone(), "canary").unwrap();
    assert_eq!(canary.name(), "static|canary");
    let desc = canary.target(&ctx, &EndpointInfo::new("echo"));
    let res = canary.resolve(&ctx, &desc).await.unwrap();
    assert_eq!(res.instances.len(), 1);
    assert_eq!(res.instances[0].address().address(), "10.0.0.1:8888");

    let stable = config.build_resolver(delegate, "stable").unwrap();
    let res = stable.resolve(&ctx, "echo").await.unwrap();
    assert_eq!(res.instances.len(), 1);
    assert_eq!(res.instances[0].weight(), 50);
}
