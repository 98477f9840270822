//! AES-128-CTR round trip
//!
//! Every encryption and decryption uses the same compiled-in key and an
//! all-zero IV. Keystream reuse is unsound for confidentiality but keeps runs
//! comparable, which is all a latency benchmark needs.

use aes::cipher::{KeyIvInit, StreamCipher};

use super::error::BenchError;

type Aes128Ctr = ctr::Ctr128BE<aes::Aes128>;

/// 128-bit benchmark key.
pub const KEY: [u8; 16] = [
    0xa1, 0xf6, 0x25, 0x8c, 0x87, 0x7d, 0x5f, 0xcd, 0x89, 0x64, 0x48, 0x45, 0x38, 0xbf, 0xc9, 0x2c,
];

/// All-zero initial counter block.
pub const IV: [u8; 16] = [0u8; 16];

/// Key and IV pair shared by every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherContext {
    key: [u8; 16],
    iv: [u8; 16],
}

impl CipherContext {
    /// The process-wide benchmark context.
    pub const FIXED: CipherContext = CipherContext { key: KEY, iv: IV };

    pub fn key(&self) -> &[u8; 16] {
        &self.key
    }

    pub fn iv(&self) -> &[u8; 16] {
        &self.iv
    }

    /// Fresh cipher positioned at the start of the keystream.
    #[inline]
    fn cipher(&self) -> Aes128Ctr {
        Aes128Ctr::new((&self.key).into(), (&self.iv).into())
    }

    /// Encrypt UTF-8 text, returning lowercase hex ciphertext.
    pub fn encrypt_hex(&self, plaintext: &str) -> String {
        let mut buf = plaintext.as_bytes().to_vec();
        self.cipher().apply_keystream(&mut buf);
        hex::encode(buf)
    }

    /// Decrypt hex ciphertext back into UTF-8 text.
    pub fn decrypt_hex(&self, ciphertext: &str) -> Result<String, BenchError> {
        let mut buf = hex::decode(ciphertext)?;
        self.cipher().apply_keystream(&mut buf);
        Ok(String::from_utf8(buf)?)
    }

    /// Run `iterations` encrypt-then-decrypt cycles over `message`.
    ///
    /// Only the last recovered plaintext is kept. Zero iterations performs no
    /// round trip and yields the empty string.
    pub fn round_trip(&self, message: &str, iterations: u64) -> Result<String, BenchError> {
        let mut plaintext = String::new();
        for _ in 0..iterations {
            let ciphertext = self.encrypt_hex(message);
            plaintext = self.decrypt_hex(&ciphertext)?;
        }
        Ok(plaintext)
    }
}

impl Default for CipherContext {
    fn default() -> Self {
        Self::FIXED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::message;

    #[test]
    fn test_fixed_context_constants() {
        let ctx = CipherContext::default();
        assert_eq!(ctx, CipherContext::FIXED);
        assert_eq!(ctx.key()[0], 0xa1);
        assert_eq!(ctx.key()[15], 0x2c);
        assert!(ctx.iv().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let ctx = CipherContext::FIXED;
        assert_eq!(ctx.encrypt_hex("hello world"), ctx.encrypt_hex("hello world"));
    }

    #[test]
    fn test_ciphertext_shape() {
        let ctx = CipherContext::FIXED;
        let ct = ctx.encrypt_hex("abc123");
        assert_eq!(ct.len(), 12);
        assert!(ct.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(ct, hex::encode("abc123"));
    }

    #[test]
    fn test_empty_plaintext() {
        let ctx = CipherContext::FIXED;
        assert_eq!(ctx.encrypt_hex(""), "");
        assert_eq!(ctx.decrypt_hex("").unwrap(), "");
    }

    /// CTR mode: a prefix of the plaintext encrypts to a prefix of the ciphertext.
    #[test]
    fn test_keystream_prefix_property() {
        let ctx = CipherContext::FIXED;
        let long = ctx.encrypt_hex("abcdefghijklmnopqrstuvwxyz0123456789");
        let short = ctx.encrypt_hex("abcdefghij");
        assert!(long.starts_with(&short));
    }

    #[test]
    fn test_round_trip_recovers_message() {
        let ctx = CipherContext::FIXED;
        for len in [0usize, 1, 15, 16, 17, 255, 4096, 10_000] {
            let msg = message::generate(len);
            for iterations in [1u64, 2, 7] {
                assert_eq!(ctx.round_trip(&msg, iterations).unwrap(), msg);
            }
        }
    }

    #[test]
    fn test_round_trip_zero_iterations_is_empty() {
        let ctx = CipherContext::FIXED;
        assert_eq!(ctx.round_trip("nonempty", 0).unwrap(), "");
    }

    #[test]
    fn test_decrypt_rejects_bad_hex() {
        let ctx = CipherContext::FIXED;
        let err = ctx.decrypt_hex("not-hex").unwrap_err();
        assert!(matches!(err, BenchError::EncryptionFailure(_)));
    }

    #[test]
    fn test_decrypt_rejects_non_utf8() {
        let ctx = CipherContext::FIXED;
        // Encrypt an invalid UTF-8 byte by XORing with the first keystream byte.
        let mut buf = vec![0xffu8];
        ctx.cipher().apply_keystream(&mut buf);
        let err = ctx.decrypt_hex(&hex::encode(buf)).unwrap_err();
        assert!(matches!(err, BenchError::EncryptionFailure(_)));
    }
}
