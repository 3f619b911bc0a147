//! Unit tests for the sweep runner

use std::time::Duration;

use futures::executor::block_on;

use crate::engine::Engine;
use crate::patterns::{patterns, SetupMode};
use crate::suite::build_suite_set;
use crate::sweep::Sweep;

fn fast_sweep() -> Sweep {
    Sweep::new(
        Engine::new()
            .with_warmup(Duration::ZERO)
            .with_sample_time(Duration::ZERO)
            .with_samples(1),
    )
}

#[test]
fn test_sweep_emits_every_label_in_order() {
    let mut set = build_suite_set(&patterns(), SetupMode::Rebuild);
    let mut out = Vec::new();
    block_on(fast_sweep().run(&mut set, &mut out)).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mut from = 0;
    for label in set.labels() {
        let line = format!("{label}\n");
        let at = text[from..]
            .find(&line)
            .unwrap_or_else(|| panic!("label '{label}' missing or out of order"));
        from += at + line.len();
    }
}

#[test]
fn test_sweep_reports_one_leader_per_suite() {
    let mut set = build_suite_set(&patterns(), SetupMode::Rebuild);
    let mut out = Vec::new();
    block_on(fast_sweep().run(&mut set, &mut out)).unwrap();
    let text = String::from_utf8(out).unwrap();

    let leaders = text
        .lines()
        .filter(|line| line.ends_with("fastest"))
        .count();
    assert_eq!(leaders, set.len());
}
