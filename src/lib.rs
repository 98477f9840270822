//! crypto_bench - Serverless encryption round trip benchmark
//!
//! Measures the latency of generating a random `[a-z0-9]` plaintext and
//! running it through an AES-128-CTR encrypt/decrypt cycle a requested number
//! of times under a fixed key and all-zero IV.
//!
//! # Modules
//!
//! - [`bench`] - Request parsing, message generator, cipher loop, timing
//! - [`gateway`] - HTTP invocation endpoint (axum)
//! - [`driver`] - Local warm-up + averaged runs
//! - [`perf`] - Latency sampling and percentiles
//! - [`config`] - YAML application config
//! - [`logging`] - tracing subscriber setup

pub mod bench;
pub mod config;
pub mod driver;
pub mod gateway;
pub mod logging;
pub mod perf;

// Convenient re-exports at crate root
pub use bench::{BenchError, BenchmarkRequest, BenchmarkResult, CipherContext};
pub use config::AppConfig;
