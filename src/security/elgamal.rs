//! DISCLAIMER: This module is a toy example of ElGamal encryption over a
//! 31-bit prime field, in pure Rust. It is *EXCLUSIVELY* for demonstration
//! and educational purposes. Absolutely DO NOT use it for real
//! cryptographic or security-sensitive operations: the primes are tiny,
//! there is no padding, and nothing here is constant-time.
//!
//! If you need ElGamal or any cryptographic operations in production,
//! please use a vetted, well-reviewed cryptography library.

use std::fmt;

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::math::modular::{mod_exp, mod_inverse};
use crate::math::primality::is_prime;
use crate::math::prime::generate_prime;
use crate::math::primitive_root::find_primitive_root;

/// ElGamal domain parameters: a prime `p` and a generator `g` of the
/// multiplicative group modulo `p`.
///
/// `g` is always the *smallest* primitive root of `p`, found by exhaustive
/// ascending search against the factorization of `p - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElGamalParams {
    /// Prime modulus, at most 31 bits.
    pub p: u32,
    /// Smallest generator of the multiplicative group modulo `p`.
    pub g: u32,
}

/// The ElGamal public key: the domain parameters plus `y = g^x mod p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElGamalPublicKey {
    pub p: u32,
    pub g: u32,
    pub y: u32,
}

/// The ElGamal private key: the domain parameters plus the secret
/// exponent `x`.
///
/// `x` is not a public field and the `Debug` output redacts it; a party
/// that really wants the raw exponent (the demo does, to display it) must
/// ask for it explicitly via [`ElGamalPrivateKey::secret_exponent`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ElGamalPrivateKey {
    pub p: u32,
    pub g: u32,
    x: u32,
}

/// Combined keypair, storing both halves together. Split as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElGamalKeyPair {
    pub public: ElGamalPublicKey,
    pub private: ElGamalPrivateKey,
}

/// A ciphertext: `c1 = g^k mod p` and one masked residue per plaintext
/// symbol, `c2[i] = (m[i] * y^k) mod p`.
///
/// Only meaningful together with the prime it was produced under and the
/// recipient's private exponent (or an already-derived shared secret); it
/// carries no state back into the keypair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalCiphertext {
    pub c1: u32,
    pub c2: Vec<u32>,
}

/// Configuration for key generation.
pub struct ElGamalKeyGenConfig {
    /// Bit length of the prime modulus, in `[2, 31]`.
    pub bit_length: u8,
    /// Optional RNG seed for reproducible runs; `None` seeds from system
    /// entropy.
    pub seed: Option<u64>,
}

/// Configuration for encryption (the ephemeral exponent draw).
pub struct ElGamalEncryptConfig {
    /// Optional RNG seed for reproducible runs; `None` seeds from system
    /// entropy.
    pub seed: Option<u64>,
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Uniform draw from `[2, p - 2]`. For `p <= 4` that interval is empty or
/// a point and the draw collapses to the only usable exponent, 2.
fn random_exponent<R: Rng>(prime: u32, rng: &mut R) -> u32 {
    let upper = prime.saturating_sub(2).max(2);
    rng.gen_range(2..=upper)
}

impl ElGamalParams {
    /// Generate fresh domain parameters: a random prime of `bit_length`
    /// bits and its smallest primitive root.
    ///
    /// The primitive-root search needs the prime factors of `p - 1`, and
    /// the factor search can fail for some primes (see
    /// [`crate::math::factor::pollard_rho_prime_factor`]); that error
    /// propagates and the caller decides whether to draw a fresh prime.
    pub fn generate<R: Rng>(bit_length: u8, rng: &mut R) -> Result<Self> {
        let p = generate_prime(bit_length, rng)?;
        let g = find_primitive_root(p)?;
        debug!("generated ElGamal parameters p = {}, g = {}", p, g);
        Ok(ElGamalParams { p, g })
    }

    /// Pick a private exponent in `[2, p - 2]` and derive the public key.
    pub fn generate_keypair<R: Rng>(&self, rng: &mut R) -> Result<ElGamalKeyPair> {
        let x = random_exponent(self.p, rng);
        ElGamalKeyPair::from_components(self.p, self.g, x)
    }
}

impl ElGamalKeyPair {
    /// Generate a keypair from scratch: fresh prime, smallest primitive
    /// root, random private exponent, `y = g^x mod p`.
    pub fn generate(config: &ElGamalKeyGenConfig) -> Result<Self> {
        let mut rng = rng_from_seed(config.seed);
        let params = ElGamalParams::generate(config.bit_length, &mut rng)?;
        params.generate_keypair(&mut rng)
    }

    /// Build a keypair from fixed components.
    ///
    /// The public key component is always recomputed from `(g, x, p)`,
    /// never accepted from outside, so the `y = g^x mod p` invariant holds
    /// by construction.
    pub fn from_components(p: u32, g: u32, x: u32) -> Result<Self> {
        if !is_prime(p) {
            return Err(Error::NotPrime(p));
        }
        if g < 2 || g > p - 1 {
            return Err(Error::InvalidGenerator { generator: g, prime: p });
        }
        let upper = (p - 2).max(2);
        if x < 2 || x > upper {
            return Err(Error::ExponentOutOfRange { exponent: x, prime: p });
        }
        let y = mod_exp(u64::from(g), u64::from(x), p)?;
        Ok(ElGamalKeyPair {
            public: ElGamalPublicKey { p, g, y },
            private: ElGamalPrivateKey { p, g, x },
        })
    }

    /// Decrypt a ciphertext addressed to this keypair: derive the shared
    /// secret from `c1` and the private exponent, then unmask.
    pub fn decrypt(&self, ciphertext: &ElGamalCiphertext) -> Result<Vec<u32>> {
        let secret = self.private.shared_secret(ciphertext.c1)?;
        elgamal_decrypt(ciphertext, self.public.p, secret)
    }
}

impl ElGamalPrivateKey {
    /// The receiver-side shared-secret derivation: `c1^x mod p`.
    pub fn shared_secret(&self, c1: u32) -> Result<u32> {
        mod_exp(u64::from(c1), u64::from(self.x), self.p)
    }

    /// The raw secret exponent. Deliberate escape hatch for display in
    /// the demo; nothing else should need it.
    pub fn secret_exponent(&self) -> u32 {
        self.x
    }
}

impl fmt::Debug for ElGamalPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElGamalPrivateKey")
            .field("p", &self.p)
            .field("g", &self.g)
            .field("x", &"<redacted>")
            .finish()
    }
}

/// Encrypt a sequence of symbols under `public_key`.
///
/// A fresh ephemeral exponent `k` is drawn on every call; it must never be
/// reused across messages, since two ciphertexts sharing a `k` let an
/// observer cancel the shared secret between them. From `k`:
/// `c1 = g^k mod p`, `shared_secret = y^k mod p`, and each symbol is
/// masked as `c2[i] = (m[i] * shared_secret) mod p` with a 64-bit
/// intermediate product.
///
/// Every symbol must be strictly below the prime, or the mask/unmask
/// round trip could not recover it.
pub fn elgamal_encrypt(
    public_key: &ElGamalPublicKey,
    message: &[u32],
    config: &ElGamalEncryptConfig,
) -> Result<ElGamalCiphertext> {
    let p = public_key.p;
    for &symbol in message {
        if symbol >= p {
            return Err(Error::SymbolOutOfRange { symbol, prime: p });
        }
    }

    let mut rng = rng_from_seed(config.seed);
    let k = random_exponent(p, &mut rng);

    let c1 = mod_exp(u64::from(public_key.g), u64::from(k), p)?;
    let shared_secret = mod_exp(u64::from(public_key.y), u64::from(k), p)?;
    let c2 = message
        .iter()
        .map(|&m| (u64::from(m) * u64::from(shared_secret) % u64::from(p)) as u32)
        .collect();

    Ok(ElGamalCiphertext { c1, c2 })
}

/// Recover the plaintext symbols from a ciphertext, given the prime and
/// the shared secret (derived on the receiver side via
/// [`ElGamalPrivateKey::shared_secret`]).
///
/// Unmasking multiplies each residue by the inverse of the shared secret,
/// `shared_secret^(p-2) mod p` by Fermat's little theorem.
pub fn elgamal_decrypt(
    ciphertext: &ElGamalCiphertext,
    prime: u32,
    shared_secret: u32,
) -> Result<Vec<u32>> {
    let inv = mod_inverse(shared_secret, prime)?;
    Ok(ciphertext
        .c2
        .iter()
        .map(|&c| (u64::from(c) * u64::from(inv) % u64::from(prime)) as u32)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // "Hey" as byte values
    const MESSAGE: [u32; 3] = [72, 101, 121];

    fn fixed_keypair() -> ElGamalKeyPair {
        // 239 is prime, 7 is its smallest primitive root
        ElGamalKeyPair::from_components(239, 7, 88).unwrap()
    }

    #[test]
    fn test_from_components_recomputes_the_public_key() {
        let keypair = fixed_keypair();
        assert_eq!(keypair.public.y, mod_exp(7, 88, 239).unwrap());
        assert_eq!(keypair.public.y, 155);
    }

    #[test]
    fn test_from_components_validation() {
        assert_eq!(
            ElGamalKeyPair::from_components(100, 2, 3).unwrap_err(),
            Error::NotPrime(100)
        );
        assert_eq!(
            ElGamalKeyPair::from_components(239, 1, 3).unwrap_err(),
            Error::InvalidGenerator { generator: 1, prime: 239 }
        );
        assert_eq!(
            ElGamalKeyPair::from_components(239, 239, 3).unwrap_err(),
            Error::InvalidGenerator { generator: 239, prime: 239 }
        );
        assert_eq!(
            ElGamalKeyPair::from_components(239, 7, 1).unwrap_err(),
            Error::ExponentOutOfRange { exponent: 1, prime: 239 }
        );
        assert_eq!(
            ElGamalKeyPair::from_components(239, 7, 238).unwrap_err(),
            Error::ExponentOutOfRange { exponent: 238, prime: 239 }
        );
    }

    #[test]
    fn test_roundtrip_with_fixed_keypair() {
        let keypair = fixed_keypair();
        let ciphertext = elgamal_encrypt(
            &keypair.public,
            &MESSAGE,
            &ElGamalEncryptConfig { seed: Some(7) },
        )
        .unwrap();
        assert_eq!(keypair.decrypt(&ciphertext).unwrap(), MESSAGE.to_vec());
    }

    #[test]
    fn test_decrypt_via_explicit_shared_secret() {
        let keypair = fixed_keypair();
        let ciphertext = elgamal_encrypt(
            &keypair.public,
            &MESSAGE,
            &ElGamalEncryptConfig { seed: Some(11) },
        )
        .unwrap();
        let secret = keypair.private.shared_secret(ciphertext.c1).unwrap();
        assert_eq!(
            elgamal_decrypt(&ciphertext, keypair.public.p, secret).unwrap(),
            MESSAGE.to_vec()
        );
    }

    #[test]
    fn test_symbols_must_be_below_the_prime() {
        // 131 is prime with smallest primitive root 2
        let keypair = ElGamalKeyPair::from_components(131, 2, 5).unwrap();
        let err = elgamal_encrypt(
            &keypair.public,
            &[130, 131],
            &ElGamalEncryptConfig { seed: Some(1) },
        )
        .unwrap_err();
        assert_eq!(err, Error::SymbolOutOfRange { symbol: 131, prime: 131 });
    }

    #[test]
    fn test_same_seed_same_ciphertext() {
        let keypair = fixed_keypair();
        let config = ElGamalEncryptConfig { seed: Some(3) };
        let a = elgamal_encrypt(&keypair.public, &MESSAGE, &config).unwrap();
        let b = elgamal_encrypt(&keypair.public, &MESSAGE, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fresh_ephemeral_keys_give_distinct_ciphertexts() {
        let keypair = fixed_keypair();
        let config = ElGamalEncryptConfig { seed: None };
        let first = elgamal_encrypt(&keypair.public, &MESSAGE, &config).unwrap();
        let mut ciphertexts = vec![first];
        for _ in 0..4 {
            ciphertexts.push(elgamal_encrypt(&keypair.public, &MESSAGE, &config).unwrap());
        }
        // every encryption still decrypts to the plaintext...
        for ct in &ciphertexts {
            assert_eq!(keypair.decrypt(ct).unwrap(), MESSAGE.to_vec());
        }
        // ...but the ephemeral draws keep them from all colliding
        assert!(
            ciphertexts.iter().any(|ct| *ct != ciphertexts[0]),
            "five entropy-seeded encryptions produced identical ciphertexts"
        );
    }

    #[test]
    fn test_generated_keypair_roundtrip_at_8_bits() {
        // 2 of the 23 primes in (128, 256] make the factor search on p - 1
        // exhaust; retry with fresh seeds until the draw avoids them
        let mut generated = None;
        for seed in 0..200u64 {
            match ElGamalKeyPair::generate(&ElGamalKeyGenConfig {
                bit_length: 8,
                seed: Some(seed),
            }) {
                Ok(kp) => {
                    generated = Some(kp);
                    break;
                }
                Err(Error::FactorSearchExhausted(_)) => continue,
                Err(e) => panic!("unexpected key generation failure: {}", e),
            }
        }
        let keypair = generated.expect("no 8-bit keypair in 200 seeds");

        let p = keypair.public.p;
        assert!(p > 128 && p <= 256);
        assert!(is_prime(p));

        // full-enumeration check of the generator
        let g = keypair.public.g;
        let mut seen = vec![false; p as usize];
        let mut value = 1u64;
        for _ in 1..p {
            value = value * u64::from(g) % u64::from(p);
            seen[value as usize] = true;
        }
        assert!((1..p).all(|r| seen[r as usize]), "{} does not generate Z_{}*", g, p);

        let ciphertext = elgamal_encrypt(
            &keypair.public,
            &MESSAGE,
            &ElGamalEncryptConfig { seed: None },
        )
        .unwrap();
        assert_eq!(keypair.decrypt(&ciphertext).unwrap(), MESSAGE.to_vec());
    }

    #[test]
    fn test_same_seed_same_keypair() {
        let config = ElGamalKeyGenConfig { bit_length: 10, seed: Some(5) };
        match (ElGamalKeyPair::generate(&config), ElGamalKeyPair::generate(&config)) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a, b),
            (a, b) => panic!("seeded generation diverged: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn test_smallest_prime_degenerates_but_roundtrips() {
        // bit length 2 can only draw p = 3; the exponent range collapses
        // and the public key becomes 1, yet masking stays invertible
        let keypair = ElGamalKeyPair::generate(&ElGamalKeyGenConfig {
            bit_length: 2,
            seed: Some(1),
        })
        .unwrap();
        assert_eq!(keypair.public.p, 3);
        assert_eq!(keypair.public.g, 2);
        let message = [0u32, 1, 2];
        let ciphertext = elgamal_encrypt(
            &keypair.public,
            &message,
            &ElGamalEncryptConfig { seed: None },
        )
        .unwrap();
        assert_eq!(keypair.decrypt(&ciphertext).unwrap(), message.to_vec());
    }

    #[test]
    fn test_private_key_debug_is_redacted() {
        let keypair = fixed_keypair();
        let rendered = format!("{:?}", keypair.private);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("88"));
    }
}
