//! 日志初始化测试

use flare_resolver_rule_based::telemetry::init_tracing;

#[test]
fn test_init_tracing_only_once() {
    assert!(init_tracing(true).is_ok());
    // 全局 subscriber 只能安装一次
    assert!(init_tracing(false).is_err());
}
