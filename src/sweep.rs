//! Sequential sweep runner and reporter.

use std::io::Write;

#[cfg(feature = "tracing")]
use tracing::info;

use crate::engine::Engine;
use crate::error::BenchResult;
use crate::report::leaderboard;
use crate::suite::SuiteSet;

/// Runs every suite of a set strictly in order, emitting each report as the
/// suite completes.
///
/// Suites never overlap: one suite's load would skew another's timings.
/// Each step writes the size label, runs the suite to completion, then
/// writes its leaderboard before the next suite starts — so output arrives
/// size by size rather than buffered until the end of the sweep.
pub struct Sweep {
    engine: Engine,
}

impl Default for Sweep {
    fn default() -> Self {
        Self::new(Engine::default())
    }
}

impl Sweep {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Run the full sweep, writing labels and leaderboards to `out`.
    pub async fn run<W: Write>(&self, set: &mut SuiteSet, out: &mut W) -> BenchResult<()> {
        for (label, suite) in set.iter_mut() {
            #[cfg(feature = "tracing")]
            info!(suite = label, cases = suite.len(), "running suite");

            writeln!(out, "{label}")?;
            let stats = self.engine.run_suite(suite).await?;

            #[cfg(feature = "tracing")]
            info!(suite = label, "suite complete, reporting");

            out.write_all(leaderboard(&stats).as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
