//! Gateway request handlers
//!
//! - `invoke` - Benchmark invocation
//! - `health` - Health check

pub mod health;
pub mod invoke;

pub use health::{HealthResponse, health_check};
pub use invoke::invoke;
