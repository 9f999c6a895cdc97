//! OTP generation from an injected random source

use rand::{rngs::OsRng, RngCore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::entities::OTP_LENGTH;

/// Number of distinct codes (000000-999999)
const CODE_SPACE: u32 = 1_000_000;

/// Draws at or above this value are rejected so every code is equally likely
const ACCEPT_BELOW: u32 = (u32::MAX / CODE_SPACE) * CODE_SPACE;

/// Random-bytes capability
pub trait RandomSource: Send + Sync {
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// Operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

/// Deterministic source yielding a fixed sequence of `u32` values, cycling at the end
///
/// Each value is emitted as 4 little-endian bytes, so an `OtpGenerator` over
/// `FixedRandomSource::new([7])` produces `"000007"`.
#[derive(Debug, Default)]
pub struct FixedRandomSource {
    values: Vec<u32>,
    cursor: AtomicUsize,
}

impl FixedRandomSource {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    fn next_value(&self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let index = self.cursor.fetch_add(1, Ordering::SeqCst) % self.values.len();
        self.values[index]
    }
}

impl RandomSource for FixedRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_value().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Generator of zero-padded 6-digit codes
#[derive(Clone)]
pub struct OtpGenerator {
    random: Arc<dyn RandomSource>,
}

impl OtpGenerator {
    /// Create a generator over the given random source
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Generate a code uniformly distributed over 000000-999999
    pub fn generate(&self) -> String {
        loop {
            let mut bytes = [0u8; 4];
            self.random.fill_bytes(&mut bytes);
            let value = u32::from_le_bytes(bytes);
            if value < ACCEPT_BELOW {
                return format!("{:0width$}", value % CODE_SPACE, width = OTP_LENGTH);
            }
        }
    }
}

impl Default for OtpGenerator {
    fn default() -> Self {
        Self::new(Arc::new(OsRandomSource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn generator(values: &[u32]) -> OtpGenerator {
        OtpGenerator::new(Arc::new(FixedRandomSource::new(values.to_vec())))
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(generator(&[7]).generate(), "000007");
        assert_eq!(generator(&[0]).generate(), "000000");
        assert_eq!(generator(&[999_999]).generate(), "999999");
    }

    #[test]
    fn test_value_reduced_into_code_space() {
        assert_eq!(generator(&[1_000_007]).generate(), "000007");
        assert_eq!(generator(&[ACCEPT_BELOW - 1]).generate(), "999999");
    }

    #[test]
    fn test_biased_tail_is_redrawn() {
        let generator = generator(&[ACCEPT_BELOW, u32::MAX, 42]);
        assert_eq!(generator.generate(), "000042");
    }

    #[test]
    fn test_os_random_format() {
        let generator = OtpGenerator::default();
        for _ in 0..100 {
            let code = generator.generate();
            assert_eq!(code.len(), OTP_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_os_random_codes_vary() {
        let generator = OtpGenerator::default();
        let codes: HashSet<String> = (0..100).map(|_| generator.generate()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_fixed_source_cycles() {
        let source = FixedRandomSource::new(vec![1, 2]);
        let mut bytes = [0u8; 12];
        source.fill_bytes(&mut bytes);

        assert_eq!(&bytes[0..4], &1u32.to_le_bytes());
        assert_eq!(&bytes[4..8], &2u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &1u32.to_le_bytes());
    }
}
