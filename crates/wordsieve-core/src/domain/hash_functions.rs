//! Probe position derivation for the membership filter
//!
//! One SHA-256 digest per (word, probe index) pair: the salt is the decimal
//! string of the probe index appended to the word, and the full 256-bit
//! digest is reduced modulo the bit-array size. Deriving all k probes from
//! a single digest function this way keeps results reproducible for a
//! given (word, index) pair across runs.

use sha2::{Digest, Sha256};

/// Compute the bit position for the `probe`-th hash of `word`.
///
/// `capacity_bits` must be non-zero; callers guard this before probing.
pub fn probe_position(word: &str, probe: usize, capacity_bits: usize) -> usize {
    let mut hasher = Sha256::new();
    hasher.update(word.as_bytes());
    hasher.update(probe.to_string().as_bytes());
    let digest = hasher.finalize();

    reduce_digest(digest.as_slice(), capacity_bits)
}

/// Reduce a big-endian digest modulo `modulus`.
///
/// Horner evaluation in u128 keeps every intermediate below 2^72 for any
/// `usize` modulus, so the result equals the full 256-bit integer value of
/// the digest taken mod `modulus`.
fn reduce_digest(digest: &[u8], modulus: usize) -> usize {
    let m = modulus as u128;
    let mut acc: u128 = 0;
    for &byte in digest {
        acc = ((acc << 8) | u128::from(byte)) % m;
    }
    acc as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_digest_matches_direct_value() {
        // 0x0102 = 258
        assert_eq!(reduce_digest(&[0x01, 0x02], 100), 58);
        // 0xFF = 255
        assert_eq!(reduce_digest(&[0xFF], 256), 255);
        assert_eq!(reduce_digest(&[0x00, 0x00, 0x07], 1000), 7);
    }

    #[test]
    fn test_reduce_digest_modulus_one_is_zero() {
        assert_eq!(reduce_digest(&[0xAB, 0xCD, 0xEF], 1), 0);
    }

    #[test]
    fn test_probe_position_deterministic() {
        let pos1 = probe_position("raven", 3, 10_000);
        let pos2 = probe_position("raven", 3, 10_000);

        assert_eq!(
            pos1, pos2,
            "Same word and probe index must produce the same position"
        );
    }

    #[test]
    fn test_probe_position_in_bounds() {
        for probe in 0..16 {
            let pos = probe_position("boundary", probe, 97);
            assert!(pos < 97, "Position {} should be < 97", pos);
        }
    }

    #[test]
    fn test_probe_index_varies_position() {
        let m = 10_000;
        let positions: Vec<usize> = (0..7).map(|i| probe_position("raven", i, m)).collect();

        let unique: std::collections::HashSet<_> = positions.iter().collect();
        assert!(
            unique.len() >= 3,
            "Distinct probe indices should spread across the array"
        );
    }

    #[test]
    fn test_probe_positions_roughly_uniform() {
        // Bucket 7 probes each of 1000 words into 10 ranges of the array
        let m = 1000;
        let mut counts = vec![0usize; 10];

        for i in 0..1000 {
            let word = format!("word_{}", i);
            for probe in 0..7 {
                let pos = probe_position(&word, probe, m);
                counts[pos / 100] += 1;
            }
        }

        // Each bucket expects ~700 hits; allow 50% variance
        for (i, count) in counts.iter().enumerate() {
            assert!(
                *count >= 350 && *count <= 1050,
                "Bucket {} has {} hits, expected ~700",
                i,
                count
            );
        }
    }
}
