//! Boundary behavior at N = 0.
//!
//! The fixed sweep never exercises an empty fan-out, but every pattern must
//! still complete vacuously: the handle fires exactly once, the chains
//! never traverse past their sentinel, and the scan loop body never runs.

use joinmark::{patterns, CallbackUnit, Chain, Deferred, SetupMode};

#[tokio::test]
async fn every_pattern_completes_vacuously_at_zero() {
    for mode in [SetupMode::Rebuild, SetupMode::Reuse] {
        for (name, factory) in patterns() {
            let mut case = factory(0, mode);

            for round in 0..2 {
                let (deferred, mut signal) = Deferred::new();
                case(deferred).await;
                assert_eq!(
                    signal.try_recv().unwrap(),
                    Some(()),
                    "pattern '{name}' ({mode:?}), round {round}"
                );
            }
        }
    }
}

#[test]
fn empty_chain_is_a_lone_sentinel() {
    let unit: CallbackUnit = |resolve| resolve();
    let chain = Chain::build(0, unit);

    assert!(chain.is_empty());
    assert!(chain.head().next().is_none());
}
