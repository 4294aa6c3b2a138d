//! Random prime generation by rejection sampling.

use log::debug;
use rand::Rng;

use crate::error::{Error, Result};
use crate::math::primality::is_prime;

/// Draw a uniform random prime of `bit_length` bits.
///
/// Candidates come uniformly from `[2^(bit_length-1) + 1, 2^bit_length]`
/// and are redrawn until one passes [`is_prime`]. Rejection is not an
/// error path and has no retry bound; by the prime number theorem a draw
/// succeeds with probability about `1 / ln(2^bit_length)`, so the expected
/// draw count grows linearly with the bit length.
///
/// Bit lengths outside `[2, 31]` are invalid arguments: below 2 the range
/// holds no prime, and a 32-bit candidate could not be told apart from the
/// overflow-checked arithmetic's output domain.
pub fn generate_prime<R: Rng>(bit_length: u8, rng: &mut R) -> Result<u32> {
    if !(2..=31).contains(&bit_length) {
        return Err(Error::InvalidBitLength(bit_length));
    }

    let low = (1u32 << (bit_length - 1)) + 1;
    let high = 1u32 << bit_length;

    let mut draws = 0u32;
    loop {
        draws += 1;
        let candidate = rng.gen_range(low..=high);
        if is_prime(candidate) {
            debug!(
                "found {}-bit prime {} after {} draws",
                bit_length, candidate, draws
            );
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_out_of_range_bit_lengths() {
        let mut rng = StdRng::seed_from_u64(1);
        for bits in [0u8, 1, 32, 64, 255] {
            assert_eq!(
                generate_prime(bits, &mut rng).unwrap_err(),
                Error::InvalidBitLength(bits)
            );
        }
    }

    #[test]
    fn test_generated_primes_have_the_requested_bit_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for bits in 2u8..=16 {
            let p = generate_prime(bits, &mut rng).unwrap();
            let low = (1u32 << (bits - 1)) + 1;
            let high = 1u32 << bits;
            assert!(p >= low && p <= high, "{} outside {}-bit range", p, bits);
            assert!(is_prime(p));
        }
    }

    #[test]
    fn test_wide_bit_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        for &bits in &[24u8, 31] {
            let p = generate_prime(bits, &mut rng).unwrap();
            assert!(p > 1 << (bits - 1));
            assert!(is_prime(p));
        }
    }

    #[test]
    fn test_same_seed_same_prime() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(
            generate_prime(20, &mut a).unwrap(),
            generate_prime(20, &mut b).unwrap()
        );
    }
}
