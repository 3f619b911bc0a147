//! Sampling engine: repeated invocation and statistical sampling of cases.
//!
//! One timed invocation spans from calling the case body to the completion
//! handle resolving. A sample accumulates invocations until a minimum
//! sample time has elapsed; the per-invocation mean of each sample feeds
//! the reported statistics.

use std::time::{Duration, Instant};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::error::{BenchError, BenchResult};
use crate::suite::{Case, Suite};
use crate::work::Deferred;

/// Timing statistics for one case within one suite run.
#[derive(Debug, Clone)]
pub struct CaseStats {
    pub name: String,
    pub ops_per_sec: f64,
    pub mean_ns: f64,
    /// Relative margin of error across samples, in percent (95% confidence).
    pub rme_percent: f64,
    pub samples: usize,
}

/// Repeatedly invokes cases and gathers per-sample timing statistics.
///
/// Cases within a suite run strictly one at a time; overlapping them would
/// let one case's load skew another's timings.
#[derive(Debug, Clone)]
pub struct Engine {
    warmup: Duration,
    sample_time: Duration,
    samples: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            warmup: Duration::from_millis(50),
            sample_time: Duration::from_millis(25),
            samples: 20,
        }
    }

    pub fn with_warmup(mut self, warmup: Duration) -> Self {
        self.warmup = warmup;
        self
    }

    pub fn with_sample_time(mut self, sample_time: Duration) -> Self {
        self.sample_time = sample_time;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples.max(1);
        self
    }

    /// One timed invocation: clock starts at the call, stops when the
    /// completion handle resolves.
    async fn time_one(case: &mut Case) -> BenchResult<Duration> {
        let (deferred, signal) = Deferred::new();
        let start = Instant::now();
        case.run(deferred).await;
        signal.await.map_err(|_| BenchError::CaseAbandoned {
            case: case.name().to_string(),
        })?;
        Ok(start.elapsed())
    }

    /// Warm a case up, then collect the configured number of samples.
    pub async fn run_case(&self, case: &mut Case) -> BenchResult<CaseStats> {
        #[cfg(feature = "tracing")]
        debug!(case = case.name(), "sampling case");

        let warmup_deadline = Instant::now() + self.warmup;
        while Instant::now() < warmup_deadline {
            Self::time_one(case).await?;
        }

        let mut sample_means = Vec::with_capacity(self.samples);
        for _sample in 0..self.samples {
            let mut spent = Duration::ZERO;
            let mut invocations: u32 = 0;
            // At least one invocation per sample, even under a zero sample
            // time (as tests configure).
            while spent < self.sample_time || invocations == 0 {
                spent += Self::time_one(case).await?;
                invocations += 1;
            }
            let mean = spent.as_secs_f64() / f64::from(invocations);
            sample_means.push(mean);

            #[cfg(feature = "tracing")]
            trace!(
                case = case.name(),
                sample = _sample,
                invocations,
                mean_secs = mean,
                "sample collected"
            );
        }

        Ok(stats_from(case.name(), &sample_means))
    }

    /// Run every case of a suite in registration order.
    pub async fn run_suite(&self, suite: &mut Suite) -> BenchResult<Vec<CaseStats>> {
        let mut stats = Vec::with_capacity(suite.len());
        for case in suite.cases_mut() {
            stats.push(self.run_case(case).await?);
        }
        Ok(stats)
    }
}

fn stats_from(name: &str, sample_means: &[f64]) -> CaseStats {
    let n = sample_means.len() as f64;
    let mean = sample_means.iter().sum::<f64>() / n;
    let variance = if sample_means.len() > 1 {
        sample_means.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / (n - 1.0)
    } else {
        0.0
    };
    let sem = (variance / n).sqrt();
    CaseStats {
        name: name.to_string(),
        ops_per_sec: if mean > 0.0 { mean.recip() } else { 0.0 },
        mean_ns: mean * 1e9,
        rme_percent: if mean > 0.0 {
            1.96 * sem / mean * 100.0
        } else {
            0.0
        },
        samples: sample_means.len(),
    }
}
