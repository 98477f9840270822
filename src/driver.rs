//! Local benchmark driver
//!
//! Runs the harness in-process: `warm_up_count` discarded invocations, then
//! `average` measured invocations whose latencies are summarized.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::bench::{self, BenchError, BenchmarkRequest};
use crate::perf::PerfMetrics;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub warm_up_count: usize,
    pub average: usize,
}

impl DriverConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.average >= 1, "average must be at least 1, got {}", self.average);
        Ok(())
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            warm_up_count: 3,
            average: 3,
        }
    }
}

/// Summary of the measured invocations (milliseconds)
#[derive(Debug, Clone, Serialize)]
pub struct DriverReport {
    pub request: BenchmarkRequest,
    pub runs: usize,
    pub avg_latency_ms: f64,
    pub avg_e2e_latency_ms: f64,
    pub min_latency_ms: f64,
    pub max_latency_ms: f64,
    pub p50_latency_ms: f64,
    pub p99_latency_ms: f64,
    /// Plaintext recovered by the last measured invocation
    pub last_data: String,
}

fn ns_to_ms(ns: Option<u64>) -> f64 {
    ns.map(|v| v as f64 / 1_000_000.0).unwrap_or(0.0)
}

pub fn run(req: &BenchmarkRequest, config: &DriverConfig) -> Result<DriverReport, BenchError> {
    for i in 0..config.warm_up_count {
        bench::run(req)?;
        tracing::debug!("[DRIVER] warm-up {}/{} done", i + 1, config.warm_up_count);
    }

    let mut perf = PerfMetrics::with_capacity(config.average);
    let mut last_data = String::new();
    for _ in 0..config.average {
        let start = Instant::now();
        let res = bench::run(req)?;
        let e2e_ns = start.elapsed().as_nanos() as u64;
        perf.record((res.latency * 1e9) as u64, e2e_ns);
        last_data = res.data;
    }

    let (inside_pct, outside_pct) = perf.breakdown_pct();
    tracing::info!(
        "[DRIVER] {} runs: harness {:.1}% / overhead {:.1}%",
        perf.runs(),
        inside_pct,
        outside_pct
    );

    Ok(DriverReport {
        request: *req,
        runs: perf.runs(),
        avg_latency_ms: ns_to_ms(perf.avg_latency()),
        avg_e2e_latency_ms: ns_to_ms(perf.avg_e2e_latency()),
        min_latency_ms: ns_to_ms(perf.min_latency()),
        max_latency_ms: ns_to_ms(perf.max_latency()),
        p50_latency_ms: ns_to_ms(perf.percentile(50.0)),
        p99_latency_ms: ns_to_ms(perf.percentile(99.0)),
        last_data,
    })
}
