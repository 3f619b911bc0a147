//! The five scheduling patterns under comparison.
//!
//! Each factory takes a unit count and a [`SetupMode`] and returns a timed
//! case body. Invoked with a [`Deferred`], the body drives its N units of
//! work to completion through one specific strategy and resolves the handle
//! exactly once. Units never fail; the only observable effects are the
//! completion bookkeeping and the final signal.

use std::collections::BTreeMap;
use std::rc::Rc;

use futures::future::{self, LocalBoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};

use crate::work::{CallbackUnit, Chain, Deferred, JoinCounter, Resolver, ResolverUnit};

/// Whether a case rebuilds its work sequence inside every timed invocation
/// (setup cost measured) or builds it once and reuses it across invocations
/// (setup cost excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupMode {
    Rebuild,
    Reuse,
}

/// Future driving one timed invocation of a case.
pub type CaseFuture = LocalBoxFuture<'static, ()>;

/// A timed case body. Must resolve the handle exactly once, after all N
/// units of work have been accounted for.
pub type CaseFn = Box<dyn FnMut(Deferred) -> CaseFuture>;

/// Factory building a timed case body for a given unit count.
pub type PatternFactory = fn(usize, SetupMode) -> CaseFn;

/// Pattern name to factory, keyed by display name.
///
/// A `BTreeMap` keeps iteration key-ordered, so suites built from the same
/// mapping always register the same case names in the same order.
pub type PatternMap = BTreeMap<&'static str, PatternFactory>;

const CALLBACK_UNIT: CallbackUnit = |resolve| resolve();
const RESOLVER_UNIT: ResolverUnit = |resolver| resolver.resolve();

/// The standard five-pattern mapping.
pub fn patterns() -> PatternMap {
    let mut map = PatternMap::new();
    map.insert(
        "chain walk, callback resolve",
        chain_callback as PatternFactory,
    );
    map.insert("chain walk, resolver object", chain_resolver);
    map.insert("for-scan over array", array_scan);
    map.insert("futures-unordered set", task_set);
    map.insert("join_all over ready futures", ready_join);
    map
}

fn prebuild<T>(mode: SetupMode, build: impl FnOnce() -> T) -> Option<T> {
    match mode {
        SetupMode::Reuse => Some(build()),
        SetupMode::Rebuild => None,
    }
}

fn callback_units(count: usize) -> Vec<CallbackUnit> {
    vec![CALLBACK_UNIT; count]
}

/// Linked-chain traversal, inline resolution: walk a chain of N listeners,
/// each invoking a shared resolver closure over the completion counter.
pub fn chain_callback(count: usize, mode: SetupMode) -> CaseFn {
    let prebuilt = prebuild(mode, || Rc::new(Chain::build(count, CALLBACK_UNIT)));
    Box::new(move |deferred| {
        let chain = match &prebuilt {
            Some(chain) => Rc::clone(chain),
            None => Rc::new(Chain::build(count, CALLBACK_UNIT)),
        };
        Box::pin(async move {
            // An empty fan-out completes vacuously; the lone sentinel is
            // never traversed.
            if count == 0 {
                deferred.resolve();
                return;
            }
            let mut counter = JoinCounter::new(count);
            let mut deferred = Some(deferred);
            let mut node = chain.head();
            while let Some(next) = node.next() {
                (node.listener())(&mut || {
                    if counter.record() {
                        if let Some(deferred) = deferred.take() {
                            deferred.resolve();
                        }
                    }
                });
                node = next;
            }
        })
    })
}

/// Linked-chain traversal, deferred resolution: identical topology, but each
/// listener is handed a [`Resolver`] object and calls a method on it.
/// Included to measure call-shape overhead against [`chain_callback`].
pub fn chain_resolver(count: usize, mode: SetupMode) -> CaseFn {
    let prebuilt = prebuild(mode, || Rc::new(Chain::build(count, RESOLVER_UNIT)));
    Box::new(move |deferred| {
        let chain = match &prebuilt {
            Some(chain) => Rc::clone(chain),
            None => Rc::new(Chain::build(count, RESOLVER_UNIT)),
        };
        Box::pin(async move {
            if count == 0 {
                deferred.resolve();
                return;
            }
            let mut resolver = Resolver::new(count, deferred);
            let mut node = chain.head();
            while let Some(next) = node.next() {
                (node.listener())(&mut resolver);
                node = next;
            }
        })
    })
}

/// Array iteration: a counting loop that advances while the completion
/// counter is below N, invoking each unit in sequence.
pub fn array_scan(count: usize, mode: SetupMode) -> CaseFn {
    let prebuilt = prebuild(mode, || Rc::new(callback_units(count)));
    Box::new(move |deferred| {
        let units = match &prebuilt {
            Some(units) => Rc::clone(units),
            None => Rc::new(callback_units(count)),
        };
        Box::pin(async move {
            if count == 0 {
                deferred.resolve();
                return;
            }
            let mut counter = JoinCounter::new(count);
            let mut deferred = Some(deferred);
            let mut index = 0;
            // Each unit signals synchronously, so the scan stops after
            // exactly `count` steps and the index never runs past the end.
            while !counter.is_satisfied() {
                units[index](&mut || {
                    if counter.record() {
                        if let Some(deferred) = deferred.take() {
                            deferred.resolve();
                        }
                    }
                });
                index += 1;
            }
        })
    })
}

/// Parallel-task-runner delegation: the same N independent units handed to
/// a [`FuturesUnordered`] set and drained to empty. The set owns the
/// completion bookkeeping, so this pattern carries no explicit counter; the
/// handle resolves once when the drain finishes.
pub fn task_set(count: usize, mode: SetupMode) -> CaseFn {
    let prebuilt = prebuild(mode, || Rc::new(callback_units(count)));
    Box::new(move |deferred| {
        let units = match &prebuilt {
            Some(units) => Rc::clone(units),
            None => Rc::new(callback_units(count)),
        };
        Box::pin(async move {
            let mut pending: FuturesUnordered<_> = units
                .iter()
                .map(|&unit| async move {
                    let mut signaled = false;
                    unit(&mut || signaled = true);
                    debug_assert!(signaled);
                })
                .collect();
            while pending.next().await.is_some() {}
            deferred.resolve();
        })
    })
}

/// Native promise aggregation: N already-resolved futures aggregated with
/// [`future::join_all`], with a continuation that signals completion.
///
/// Futures are single-use, so the aggregate is rebuilt on every invocation
/// in both setup modes.
pub fn ready_join(count: usize, _mode: SetupMode) -> CaseFn {
    Box::new(move |deferred| {
        Box::pin(async move {
            let ready: Vec<_> = (0..count).map(|_| future::ready(())).collect();
            future::join_all(ready).await;
            deferred.resolve();
        })
    })
}
