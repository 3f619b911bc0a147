//! Unit tests for work primitives

use crate::work::{CallbackUnit, Chain, Deferred, JoinCounter, Resolver};

#[test]
fn test_join_counter_fires_on_final_record() {
    let mut counter = JoinCounter::new(5);

    // Four units signal without reaching the target.
    for step in 1..5 {
        assert!(!counter.record());
        assert_eq!(counter.completed(), step);
        assert!(!counter.is_satisfied());
    }

    // The fifth unit is the one that completes the fan-out.
    assert!(counter.record());
    assert!(counter.is_satisfied());
}

#[test]
fn test_join_counter_never_fires_twice() {
    let mut counter = JoinCounter::new(2);
    assert!(!counter.record());
    assert!(counter.record());

    // Over-counting past the target must not report completion again.
    assert!(!counter.record());
    assert!(counter.is_satisfied());
}

#[test]
fn test_join_counter_zero_target_is_vacuously_satisfied() {
    let counter = JoinCounter::new(0);
    assert!(counter.is_satisfied());
    assert_eq!(counter.completed(), 0);
}

#[test]
fn test_deferred_resolve_fires_signal() {
    let (deferred, mut signal) = Deferred::new();
    assert_eq!(signal.try_recv().unwrap(), None);

    deferred.resolve();
    assert_eq!(signal.try_recv().unwrap(), Some(()));
}

#[test]
fn test_deferred_dropped_unresolved_cancels_signal() {
    let (deferred, mut signal) = Deferred::new();
    drop(deferred);
    assert!(signal.try_recv().is_err());
}

#[test]
fn test_resolver_fires_exactly_once_at_target() {
    let (deferred, mut signal) = Deferred::new();
    let mut resolver = Resolver::new(3, deferred);

    resolver.resolve();
    resolver.resolve();
    assert_eq!(signal.try_recv().unwrap(), None);

    resolver.resolve();
    assert_eq!(signal.try_recv().unwrap(), Some(()));

    // Extra resolutions are absorbed without a second firing.
    resolver.resolve();
    assert_eq!(signal.try_recv().unwrap(), None);
}

#[test]
fn test_chain_build_has_count_traversable_nodes() {
    let unit: CallbackUnit = |resolve| resolve();

    assert_eq!(Chain::build(5, unit).len(), 5);
    assert_eq!(Chain::build(1, unit).len(), 1);
}

#[test]
fn test_empty_chain_is_a_lone_sentinel() {
    let unit: CallbackUnit = |resolve| resolve();
    let chain = Chain::build(0, unit);

    assert!(chain.is_empty());
    assert_eq!(chain.len(), 0);
    assert!(chain.head().next().is_none());
}

#[test]
fn test_chain_traversal_invokes_each_listener_once() {
    let unit: CallbackUnit = |resolve| resolve();
    let chain = Chain::build(4, unit);

    let mut hits = 0;
    let mut node = chain.head();
    while let Some(next) = node.next() {
        (node.listener())(&mut || hits += 1);
        node = next;
    }

    assert_eq!(hits, 4);
}

#[test]
fn test_deep_chain_drops_without_overflowing() {
    let unit: CallbackUnit = |resolve| resolve();
    let chain = Chain::build(50_000, unit);
    assert_eq!(chain.len(), 50_000);
    drop(chain);
}
