//! Short-code candidate generation for the shortcut URL shortener.
//!
//! Implementations are pure candidate producers that don't interact
//! with storage. The existence-checked retry loop lives in the service
//! crate, next to the store handle.

pub mod base62;

use rand::Rng;
use shortcut_core::ShortCode;

/// Trait for producing short-code candidates.
pub trait Generator: Send + Sync + 'static {
    /// Produces the next candidate code.
    ///
    /// Candidates are not guaranteed to be free in the store; callers
    /// must check before persisting.
    fn generate(&self) -> ShortCode;
}

/// Produces candidates by drawing uniform random bytes and encoding
/// them in base-62, truncated to a fixed length.
///
/// Statistical uniformity is all that is required of the byte source;
/// the codes carry no secrets. Configuration constraint: `length` must
/// not exceed [`base62::max_encoded_len`] of `random_bytes`, otherwise
/// truncation silently shortens every candidate. With `random_bytes >=
/// length` the encoded string is always at least `length` characters,
/// so candidates come out at exactly `length`.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    random_bytes: usize,
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(random_bytes: usize, length: usize) -> Self {
        Self {
            random_bytes,
            length,
        }
    }
}

impl Generator for RandomCodeGenerator {
    fn generate(&self) -> ShortCode {
        let mut bytes = vec![0u8; self.random_bytes];
        rand::rng().fill(&mut bytes[..]);

        let mut encoded = base62::encode(&bytes);
        encoded.truncate(self.length);
        ShortCode::new_unchecked(encoded)
    }
}
