//! Performance Metrics - Latency sampling for repeated invocations
//!
//! Collects harness-reported and end-to-end latencies for percentile analysis.

/// Latency samples for a series of invocations (nanoseconds)
#[derive(Default)]
pub struct PerfMetrics {
    // Latency reported by the harness itself
    pub latency_samples: Vec<u64>,
    // Latency measured around the whole invocation (parse + harness + encode)
    pub e2e_samples: Vec<u64>,
}

impl PerfMetrics {
    pub fn with_capacity(runs: usize) -> Self {
        PerfMetrics {
            latency_samples: Vec::with_capacity(runs),
            e2e_samples: Vec::with_capacity(runs),
        }
    }

    /// Record one invocation
    #[inline]
    pub fn record(&mut self, latency_ns: u64, e2e_ns: u64) {
        self.latency_samples.push(latency_ns);
        self.e2e_samples.push(e2e_ns);
    }

    pub fn runs(&self) -> usize {
        self.latency_samples.len()
    }

    /// Calculate percentile from harness latency samples
    ///
    /// # Arguments
    /// * `p` - Percentile (0-100), e.g., 50.0 for median, 99.0 for P99
    pub fn percentile(&self, p: f64) -> Option<u64> {
        if self.latency_samples.is_empty() {
            return None;
        }
        let mut sorted = self.latency_samples.clone();
        sorted.sort_unstable();
        let idx = ((p / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        Some(sorted[idx.min(sorted.len() - 1)])
    }

    pub fn min_latency(&self) -> Option<u64> {
        self.latency_samples.iter().copied().min()
    }

    pub fn max_latency(&self) -> Option<u64> {
        self.latency_samples.iter().copied().max()
    }

    pub fn avg_latency(&self) -> Option<u64> {
        avg(&self.latency_samples)
    }

    pub fn avg_e2e_latency(&self) -> Option<u64> {
        avg(&self.e2e_samples)
    }

    /// Share of end-to-end time spent inside the harness vs. around it (percent)
    pub fn breakdown_pct(&self) -> (f64, f64) {
        let total: u64 = self.e2e_samples.iter().sum();
        if total == 0 {
            return (0.0, 0.0);
        }
        let inside: u64 = self.latency_samples.iter().sum();
        let inside_pct = (inside as f64 / total as f64 * 100.0).min(100.0);
        (inside_pct, 100.0 - inside_pct)
    }
}

fn avg(samples: &[u64]) -> Option<u64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<u64>() / samples.len() as u64)
}
