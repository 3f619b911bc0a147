//! Fan-out/join microbenchmark harness
//!
//! Compares several strategies for fanning out N independent asynchronous
//! units of work and joining on their completion: linked-chain traversal
//! with inline resolution, the same traversal through a resolver object,
//! array iteration, delegation to a parallel task set, and native future
//! aggregation. The harness exists to produce timing comparisons; none of
//! the patterns has production responsibility and all units of work succeed
//! unconditionally.
//!
//! # Quick Start
//!
//! ```no_run
//! use joinmark::{default_suite_set, Engine, Sweep};
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .build()
//!     .unwrap();
//!
//! let mut suites = default_suite_set();
//! let sweep = Sweep::new(Engine::default());
//!
//! let stdout = std::io::stdout();
//! runtime
//!     .block_on(sweep.run(&mut suites, &mut stdout.lock()))
//!     .unwrap();
//! ```
//!
//! Output arrives suite by suite: the size label, then a fastest-first
//! leaderboard once every case of that size has been sampled.
//!
//! # Core Concepts
//!
//! ## Case
//!
//! A [`Case`] is one named, timed implementation of a scheduling pattern
//! for a fixed N. Invoking it with a [`Deferred`] drives N units of work to
//! completion; the handle resolves exactly once, ending the timed interval.
//!
//! ## Suite and SuiteSet
//!
//! A [`Suite`] collects one case per pattern, all sharing one N, built from
//! a key-ordered [`PatternMap`] so construction is deterministic. A
//! [`SuiteSet`] holds one suite per sweep size ([`SWEEP_SIZES`]), labeled
//! `"10 items"` through `"10000 items"`, in run order.
//!
//! ## Engine and Sweep
//!
//! The [`Engine`] does the repeated invocation and statistical sampling of
//! each case; the [`Sweep`] processes suites strictly one at a time (never
//! concurrently, to keep suites from skewing each other's timings) and
//! prints each leaderboard as its suite completes.
//!
//! # Setup Modes
//!
//! [`SetupMode`] selects what a measurement includes:
//!
//! - [`SetupMode::Rebuild`] — the work sequence is rebuilt inside every
//!   timed invocation, so setup cost is part of the measurement.
//! - [`SetupMode::Reuse`] — the work sequence is built once per case and
//!   reused, so the measurement covers dispatch alone.
//!
//! The binary picks `Rebuild`; building with the `reuse-setup` cargo
//! feature switches it to `Reuse`.
//!
//! # Concurrency Model
//!
//! Everything runs on a single cooperative execution context. The
//! "parallel" pattern names describe logical concurrency of independent
//! work items, not threads, and the binary uses a current-thread runtime
//! for exactly that reason.
//!
//! # Optional Tracing Support
//!
//! The `tracing` cargo feature compiles in structured logging for suite
//! registration, sampling, and sweep progress. Call sites are gated with
//! `#[cfg(feature = "tracing")]`, so the default build carries no
//! instrumentation that could skew a measurement. Control verbosity with
//! `RUST_LOG` (e.g. `RUST_LOG=joinmark=debug`).

mod engine;
mod error;
mod patterns;
mod report;
mod suite;
mod sweep;
mod work;

pub use engine::{CaseStats, Engine};
pub use error::{BenchError, BenchResult};
pub use patterns::{
    array_scan, chain_callback, chain_resolver, patterns, ready_join, task_set, CaseFn,
    CaseFuture, PatternFactory, PatternMap, SetupMode,
};
pub use report::{format_ops, leaderboard};
pub use suite::{
    build_suite, build_suite_set, default_mode, default_suite_set, Case, Suite, SuiteSet,
    SWEEP_SIZES,
};
pub use sweep::Sweep;
pub use work::{
    CallbackUnit, Chain, ChainNode, CompletionSignal, Deferred, JoinCounter, Resolver,
    ResolverUnit,
};
