//! Benchmark payload generator
//!
//! Produces the plaintext that the cipher loop works on. The content is not a
//! secret, so a fast non-cryptographic PRNG is used, freshly seeded from OS
//! entropy on every call (no state survives between invocations).
//!
//! # Example
//!
//! ```rust
//! use crypto_bench::bench::message::{ALPHABET, generate};
//!
//! let msg = generate(16);
//! assert_eq!(msg.len(), 16);
//! assert!(msg.bytes().all(|b| ALPHABET.contains(&b)));
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Lowercase ASCII letters followed by decimal digits.
pub const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a message of exactly `length` characters from [`ALPHABET`].
pub fn generate(length: usize) -> String {
    let mut rng = SmallRng::from_entropy();
    generate_with(&mut rng, length)
}

/// Same as [`generate`] but draws from a caller-supplied generator.
///
/// Each character is sampled independently and uniformly, with replacement.
pub fn generate_with<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
