//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Every random draw in the backend goes through a `Pcg32` handle passed in
//! by the caller; nothing reads global random state. Equal seeds therefore
//! render byte-identical audio.

use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The seed is expanded to 64 bits by duplicating it into both halves.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed for a named component from a base seed.
///
/// Hashes the little-endian base seed followed by the UTF-8 key with BLAKE3
/// and keeps the first four bytes.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates an RNG for a named component.
pub fn create_component_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}

/// Draws one standard normal sample.
#[inline]
pub fn gaussian(rng: &mut Pcg32) -> f64 {
    StandardNormal.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);

        let values1: Vec<f64> = (0..100).map(|_| rng1.gen()).collect();
        let values2: Vec<f64> = (0..100).map(|_| rng2.gen()).collect();

        assert_eq!(values1, values2);
    }

    #[test]
    fn test_different_seeds_produce_different_sequences() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(43);

        let values1: Vec<f64> = (0..10).map(|_| gaussian(&mut rng1)).collect();
        let values2: Vec<f64> = (0..10).map(|_| gaussian(&mut rng2)).collect();

        assert_ne!(values1, values2);
    }

    #[test]
    fn test_component_seed_derivation() {
        let seed_a = derive_component_seed(42, "attempt_01");
        let seed_b = derive_component_seed(42, "attempt_02");
        assert_ne!(seed_a, seed_b);
        assert_eq!(seed_a, derive_component_seed(42, "attempt_01"));
        assert_ne!(seed_a, derive_component_seed(43, "attempt_01"));
    }

    #[test]
    fn test_gaussian_moments() {
        let mut rng = create_rng(7);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| gaussian(&mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean {}", mean);
        assert!((var - 1.0).abs() < 0.05, "variance {}", var);
    }
}
