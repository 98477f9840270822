//! Benchmark Harness Module
//!
//! AES-128-CTR encrypt/decrypt round trip with wall-clock timing.
//!
//! # Components
//!
//! - [`request`] - Inbound payload parsing and validation
//! - [`message`] - Random `[a-z0-9]` plaintext generator
//! - [`cipher`] - Fixed key/IV context and the round trip loop
//! - [`harness`] - Timed invocation producing [`BenchmarkResult`]
//! - [`error`] - [`BenchError`] taxonomy

pub mod cipher;
pub mod error;
pub mod harness;
pub mod message;
pub mod request;

pub use cipher::CipherContext;
pub use error::BenchError;
pub use harness::{BenchmarkResult, run};
pub use request::BenchmarkRequest;
