//! # elgamal32
//!
//! Textbook ElGamal public-key encryption over a 31-bit prime field, with
//! every number-theoretic ingredient built from first principles:
//!
//! - overflow-guarded modular arithmetic (gcd, square-and-multiply
//!   exponentiation, Fermat inverse)
//! - a Miller-Rabin primality test that is deterministic for the crate's
//!   whole input domain
//! - random prime generation of a requested bit length
//! - Pollard's rho factorization with composite-factor refinement
//! - smallest-primitive-root search over the factorization of `p - 1`
//!
//! This is an educational crate. The primes are tiny, nothing is
//! constant-time, and there is no padding; do not use it to protect real
//! data.
//!
//! ## Example
//!
//! ```rust
//! use elgamal32::{elgamal_encrypt, ElGamalEncryptConfig, ElGamalKeyPair};
//!
//! # fn main() -> elgamal32::Result<()> {
//! // deterministic keypair: p = 239, generator 7, secret exponent 88
//! let keypair = ElGamalKeyPair::from_components(239, 7, 88)?;
//!
//! let message = [72, 101, 121]; // "Hey"
//! let ciphertext = elgamal_encrypt(
//!     &keypair.public,
//!     &message,
//!     &ElGamalEncryptConfig { seed: None },
//! )?;
//! assert_eq!(keypair.decrypt(&ciphertext)?, message);
//! # Ok(())
//! # }
//! ```
//!
//! Fresh keys come from [`ElGamalKeyPair::generate`], which draws a prime
//! of the requested bit length and finds its smallest primitive root.

pub mod error;
pub mod math;
pub mod security;

pub use error::{Error, Result};
pub use math::{
    find_primitive_root, gcd, generate_prime, is_prime, mod_exp, mod_inverse,
    unique_prime_factors,
};
pub use security::{
    elgamal_decrypt, elgamal_encrypt, ElGamalCiphertext, ElGamalEncryptConfig,
    ElGamalKeyGenConfig, ElGamalKeyPair, ElGamalParams, ElGamalPrivateKey, ElGamalPublicKey,
};
