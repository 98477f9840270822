//! Timed invocation: generate the message, run the round trip loop, report
//! elapsed wall-clock seconds.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::cipher::CipherContext;
use super::error::BenchError;
use super::message;
use super::request::BenchmarkRequest;

/// Logging target for per-invocation events (silenced unless `enable_tracing`).
pub const TARGET_INVOKE: &str = "INVOKE";

/// Benchmark result returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BenchmarkResult {
    /// Elapsed seconds covering message generation and every round trip
    #[schema(example = 0.0123)]
    pub latency: f64,
    /// Plaintext recovered by the final round trip (empty when no iteration ran)
    #[schema(example = "k3v9q0x1a7m2b8c4")]
    pub data: String,
}

/// Run one invocation with the process-wide key and IV.
pub fn run(req: &BenchmarkRequest) -> Result<BenchmarkResult, BenchError> {
    run_with(&CipherContext::FIXED, req)
}

/// Run one invocation under `ctx`.
pub fn run_with(
    ctx: &CipherContext,
    req: &BenchmarkRequest,
) -> Result<BenchmarkResult, BenchError> {
    run_with_rng(ctx, &mut SmallRng::from_entropy(), req)
}

/// Run one invocation under `ctx`, drawing the message from `rng`.
///
/// Rejects out-of-bounds requests before anything is allocated.
pub fn run_with_rng<R: Rng>(
    ctx: &CipherContext,
    rng: &mut R,
    req: &BenchmarkRequest,
) -> Result<BenchmarkResult, BenchError> {
    req.validate()?;

    let start = Instant::now();
    let message = message::generate_with(rng, req.length_of_message);
    let data = ctx.round_trip(&message, req.num_of_iterations)?;
    let latency = start.elapsed().as_secs_f64();

    tracing::debug!(
        target: TARGET_INVOKE,
        length_of_message = req.length_of_message,
        num_of_iterations = req.num_of_iterations,
        latency,
        "round trip complete"
    );

    Ok(BenchmarkResult { latency, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::request::MAX_LENGTH_OF_MESSAGE;
    use aes::cipher::{KeyIvInit, StreamCipher};

    /// Returned data is the generated message itself, and the loop's last
    /// ciphertext (deterministic under fixed key/IV) decrypts to it with an
    /// independently built cipher.
    #[test]
    fn test_data_is_generated_message() {
        for seed in [1u64, 42, 9001] {
            let req = BenchmarkRequest::new(16, 100);
            let ctx = CipherContext::FIXED;
            let res = run_with_rng(&ctx, &mut SmallRng::seed_from_u64(seed), &req).unwrap();

            let expected = message::generate_with(&mut SmallRng::seed_from_u64(seed), 16);
            assert_eq!(res.data, expected);

            let mut buf = hex::decode(ctx.encrypt_hex(&expected)).unwrap();
            let mut external =
                ctr::Ctr128BE::<aes::Aes128>::new((&REFERENCE_KEY).into(), (&[0u8; 16]).into());
            external.apply_keystream(&mut buf);
            assert_eq!(String::from_utf8(buf).unwrap(), res.data);
        }
    }

    const REFERENCE_KEY: [u8; 16] = [
        0xa1, 0xf6, 0x25, 0x8c, 0x87, 0x7d, 0x5f, 0xcd, 0x89, 0x64, 0x48, 0x45, 0x38, 0xbf, 0xc9,
        0x2c,
    ];

    #[test]
    fn test_oversized_request_rejected_before_allocation() {
        let req = BenchmarkRequest::new(usize::MAX, 1);
        assert!(matches!(run(&req), Err(BenchError::InvalidRequest(_))));

        let req = BenchmarkRequest::new(MAX_LENGTH_OF_MESSAGE + 1, 0);
        assert!(matches!(run(&req), Err(BenchError::InvalidRequest(_))));
    }

    #[test]
    fn test_scenario_16_by_100() {
        let res = run(&BenchmarkRequest::new(16, 100)).unwrap();
        assert_eq!(res.data.len(), 16);
        assert!(
            res.data
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
        assert!(res.latency >= 0.0);

        // Same key and zero IV give the same ciphertext the loop produced last.
        let ctx = CipherContext::FIXED;
        let last_ciphertext = ctx.encrypt_hex(&res.data);
        assert_eq!(ctx.decrypt_hex(&last_ciphertext).unwrap(), res.data);
    }

    #[test]
    fn test_zero_iterations_returns_empty_data() {
        let res = run(&BenchmarkRequest::new(64, 0)).unwrap();
        assert_eq!(res.data, "");
        assert!(res.latency >= 0.0);
    }

    #[test]
    fn test_zero_length() {
        let res = run(&BenchmarkRequest::new(0, 5)).unwrap();
        assert_eq!(res.data, "");
    }

    #[test]
    fn test_latency_grows_with_iterations() {
        // Medians over a few runs to damp scheduler noise.
        fn median_latency(iterations: u64) -> f64 {
            let mut samples: Vec<f64> = (0..5)
                .map(|_| run(&BenchmarkRequest::new(1024, iterations)).unwrap().latency)
                .collect();
            samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
            samples[2]
        }
        assert!(median_latency(2000) >= median_latency(1));
    }

    #[test]
    fn test_result_serializes_to_contract_shape() {
        let res = BenchmarkResult {
            latency: 0.5,
            data: "abc".into(),
        };
        let v = serde_json::to_value(&res).unwrap();
        assert_eq!(v, serde_json::json!({"latency": 0.5, "data": "abc"}));
    }
}
