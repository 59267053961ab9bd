//! Integration tests for configuration types
//!
//! Tests growth policies and the builder-style config structs.

use tether::foundation::{ArrayConfig, CollectionsConfig, GrowthPolicy};

#[test]
fn exact_growth_is_default() {
    assert_eq!(GrowthPolicy::default(), GrowthPolicy::Exact);
    assert_eq!(ArrayConfig::default().growth, GrowthPolicy::Exact);
    assert_eq!(ArrayConfig::default(), ArrayConfig::exact());
}

#[test]
fn exact_growth_requests_what_is_needed() {
    assert_eq!(GrowthPolicy::Exact.target_capacity(0, 1), 1);
    assert_eq!(GrowthPolicy::Exact.target_capacity(8, 9), 9);
}

#[test]
fn doubling_growth_amortizes() {
    let policy = GrowthPolicy::Doubling;
    assert_eq!(policy.target_capacity(0, 1), 4);
    assert_eq!(policy.target_capacity(4, 5), 8);
    assert_eq!(policy.target_capacity(8, 100), 100);
}

#[test]
fn array_config_builders() {
    let config = ArrayConfig::exact()
        .with_growth(GrowthPolicy::Doubling)
        .with_initial_capacity(32);
    assert_eq!(config, ArrayConfig::amortized().with_initial_capacity(32));
    assert_eq!(config.initial_capacity, 32);
}

#[test]
fn collections_config_builders() {
    let config = CollectionsConfig::default()
        .with_node_capacity(128)
        .with_list_capacity(4);
    assert_eq!(config.node_capacity, 128);
    assert_eq!(config.list_capacity, 4);
}
