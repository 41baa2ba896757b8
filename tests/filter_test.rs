//! 过滤链测试

use flare_resolver_rule_based::discovery::{Instance, ResolveContext};
use flare_resolver_rule_based::rule_based::{
    FilterRule, InstanceFilter, has_tag, network, tag_equals, tag_prefix,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// 三个测试实例：tcp+tag、tcp 无标签、unix+tag
fn mock_instances() -> Vec<Instance> {
    vec![
        Instance::new("tcp", "1", 10, tags(&[("tag", "1")])),
        Instance::new("tcp", "1", 10, HashMap::new()),
        Instance::new("unix", "1", 10, tags(&[("tag", "1")])),
    ]
}

fn tcp_only(_ctx: &ResolveContext, instances: Vec<Instance>) -> Vec<Instance> {
    instances
        .into_iter()
        .filter(|inst| inst.address().network() == "tcp")
        .collect()
}

fn tag_is_one(_ctx: &ResolveContext, instances: Vec<Instance>) -> Vec<Instance> {
    instances
        .into_iter()
        .filter(|inst| inst.tag("tag") == Some("1"))
        .collect()
}

#[test]
fn test_filter_without_rule_is_identity() {
    let filter = InstanceFilter::empty();
    let res = filter.apply(&ResolveContext::new(), mock_instances());
    assert_eq!(res, mock_instances());
    assert_eq!(filter.name(), "");
}

#[test]
fn test_filter_with_empty_rule_is_identity() {
    let filter = InstanceFilter::new(FilterRule::new("empty"));
    let res = filter.apply(&ResolveContext::new(), mock_instances());
    assert_eq!(res, mock_instances());
    assert_eq!(filter.name(), "empty");
}

#[test]
fn test_filter_single_function() {
    let ctx = ResolveContext::new();

    let filter = InstanceFilter::new(FilterRule::new("mock_filter_rule1").with_filter(tcp_only));
    assert_eq!(filter.apply(&ctx, mock_instances()).len(), 2);

    let filter = InstanceFilter::new(FilterRule::new("mock_filter_rule2").with_filter(tag_is_one));
    let res = filter.apply(&ctx, mock_instances());
    let all = mock_instances();
    assert_eq!(res, vec![all[0].clone(), all[2].clone()]);
}

#[test]
fn test_filter_chain_yields_single_instance() {
    let ctx = ResolveContext::new();
    let filter = InstanceFilter::new(
        FilterRule::new("mock_filter_rule3")
            .with_filter(tag_is_one)
            .with_filter(tcp_only),
    );
    let res = filter.apply(&ctx, mock_instances());
    assert_eq!(res, vec![mock_instances()[0].clone()]);
}

#[test]
fn test_filter_chain_is_sequential_composition() {
    let ctx = ResolveContext::new();
    // 第一个函数只保留第一个实例，第二个函数复制剩下的实例；
    // 顺序执行得到 2 个实例，并行取并/交集都得不到这个结果
    let keep_first = |_: &ResolveContext, instances: Vec<Instance>| -> Vec<Instance> {
        instances.into_iter().take(1).collect()
    };
    let duplicate = |_: &ResolveContext, instances: Vec<Instance>| -> Vec<Instance> {
        instances.iter().chain(instances.iter()).cloned().collect()
    };

    let forward = InstanceFilter::new(
        FilterRule::new("forward")
            .with_filter(keep_first)
            .with_filter(duplicate),
    );
    let expected = duplicate(&ctx, keep_first(&ctx, mock_instances()));
    assert_eq!(forward.apply(&ctx, mock_instances()), expected);
    assert_eq!(expected.len(), 2);

    let backward = InstanceFilter::new(
        FilterRule::new("backward")
            .with_filter(duplicate)
            .with_filter(keep_first),
    );
    assert_eq!(backward.apply(&ctx, mock_instances()).len(), 1);
}

#[test]
fn test_filter_empty_input_skips_functions() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let counting = move |_: &ResolveContext, instances: Vec<Instance>| -> Vec<Instance> {
        counter.fetch_add(1, Ordering::SeqCst);
        instances
    };

    let filter = InstanceFilter::new(FilterRule::new("counting").with_filter(counting));
    let res = filter.apply(&ResolveContext::new(), Vec::new());
    assert!(res.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_filter_receives_caller_context() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = seen.clone();
    let check_trace = move |ctx: &ResolveContext, instances: Vec<Instance>| -> Vec<Instance> {
        if ctx.value("trace-id") == Some("abc") {
            counter.fetch_add(1, Ordering::SeqCst);
        }
        instances
    };

    let filter = InstanceFilter::new(
        FilterRule::new("ctx")
            .with_filter(check_trace.clone())
            .with_filter(check_trace),
    );
    let ctx = ResolveContext::new().with_value("trace-id", "abc");
    filter.apply(&ctx, mock_instances());
    assert_eq!(seen.load(Ordering::SeqCst), 2);
}

#[test]
fn test_stock_filters() {
    let ctx = ResolveContext::new();
    let instances = vec![
        Instance::new("tcp", "10.0.0.1:80", 100, tags(&[("lane", "canary-1")])),
        Instance::new("tcp", "10.0.0.2:80", 100, tags(&[("lane", "stable")])),
        Instance::new("unix", "/tmp/echo.sock", 100, HashMap::new()),
    ];

    let filter = InstanceFilter::new(FilterRule::new("eq").with_filter(tag_equals("lane", "stable")));
    assert_eq!(filter.apply(&ctx, instances.clone()), vec![instances[1].clone()]);

    let filter = InstanceFilter::new(FilterRule::new("prefix").with_filter(tag_prefix("lane", "canary")));
    assert_eq!(filter.apply(&ctx, instances.clone()), vec![instances[0].clone()]);

    let filter = InstanceFilter::new(FilterRule::new("present").with_filter(has_tag("lane")));
    assert_eq!(filter.apply(&ctx, instances.clone()).len(), 2);

    let filter = InstanceFilter::new(FilterRule::new("unix").with_filter(network("unix")));
    assert_eq!(filter.apply(&ctx, instances.clone()), vec![instances[2].clone()]);
}

#[test]
fn test_rule_applies_without_chain() {
    let rule = FilterRule::new("tcp").with_filter(network("tcp"));
    let ctx = ResolveContext::new();
    let direct = rule.apply(&ctx, mock_instances());
    assert_eq!(direct.len(), 2);
    assert_eq!(direct, InstanceFilter::new(rule).apply(&ctx, mock_instances()));
}
