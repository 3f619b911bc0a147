//! Suites of timed cases and the fixed-size sweep set.

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::patterns::{patterns, CaseFn, CaseFuture, PatternMap, SetupMode};
use crate::work::Deferred;

/// One named, timed implementation of a scheduling pattern for a fixed N.
pub struct Case {
    name: String,
    body: CaseFn,
}

impl Case {
    pub fn new(name: impl Into<String>, body: CaseFn) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start one timed invocation. The returned future drives the case's N
    /// units of work; the handle resolves when the interval ends.
    pub fn run(&mut self, deferred: Deferred) -> CaseFuture {
        (self.body)(deferred)
    }
}

/// An ordered collection of named cases sharing one unit count.
pub struct Suite {
    count: usize,
    cases: Vec<Case>,
}

impl Suite {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            cases: Vec::new(),
        }
    }

    /// Register a case. Cases run (and report) in registration order until
    /// the leaderboard re-ranks them by speed.
    pub fn add(&mut self, case: Case) {
        #[cfg(feature = "tracing")]
        debug!(case = case.name(), count = self.count, "registering case");

        self.cases.push(case);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub(crate) fn cases_mut(&mut self) -> &mut [Case] {
        &mut self.cases
    }

    pub fn case_names(&self) -> Vec<&str> {
        self.cases.iter().map(Case::name).collect()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// The fixed list of unit counts the sweep exercises, in run order.
pub const SWEEP_SIZES: [usize; 7] = [10, 100, 250, 500, 1000, 5000, 10000];

/// Build one suite from a pattern mapping: one case per entry, all sharing
/// `count`, registered in the mapping's key order.
pub fn build_suite(patterns: &PatternMap, count: usize, mode: SetupMode) -> Suite {
    let mut suite = Suite::new(count);
    for (name, factory) in patterns {
        suite.add(Case::new(*name, factory(count, mode)));
    }
    suite
}

/// The full collection of suites across all benchmarked sizes, keyed by a
/// display label and kept in run order.
pub struct SuiteSet {
    entries: Vec<(String, Suite)>,
}

impl SuiteSet {
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Suite)> {
        self.entries.iter().map(|(label, suite)| (label.as_str(), suite))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Suite)> {
        self.entries
            .iter_mut()
            .map(|(label, suite)| (label.as_str(), suite))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build one suite per sweep size, labeled `"{n} items"`, in size order.
pub fn build_suite_set(patterns: &PatternMap, mode: SetupMode) -> SuiteSet {
    let entries = SWEEP_SIZES
        .iter()
        .map(|&count| (format!("{count} items"), build_suite(patterns, count, mode)))
        .collect();
    SuiteSet { entries }
}

/// Setup mode selected at build time: `Reuse` under the `reuse-setup`
/// feature, `Rebuild` otherwise.
pub fn default_mode() -> SetupMode {
    if cfg!(feature = "reuse-setup") {
        SetupMode::Reuse
    } else {
        SetupMode::Rebuild
    }
}

/// The pre-built sweep: the standard patterns at every sweep size, with the
/// build-time-selected setup mode.
pub fn default_suite_set() -> SuiteSet {
    build_suite_set(&patterns(), default_mode())
}
