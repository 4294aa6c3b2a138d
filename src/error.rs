//! Error types shared across the crate.

use thiserror::Error;

/// Result alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the number-theory primitives and the ElGamal layer.
///
/// Three classes: invalid arguments (rejected up front, never silently
/// corrected), overflow (an intermediate value left the 32-bit output
/// domain instead of wrapping), and logic errors (a search that is
/// mathematically expected to succeed came up empty; these indicate a
/// violated precondition upstream and are never masked with a default).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Prime generation supports bit lengths in `[2, 31]` only; a 32-bit
    /// candidate could not be told apart from the overflow-checked
    /// arithmetic's output domain.
    #[error("bit length {0} is outside the supported range [2, 31]")]
    InvalidBitLength(u8),

    /// Modular arithmetic with a zero modulus.
    #[error("modulus must be non-zero")]
    ZeroModulus,

    /// An operand entering a square or multiply no longer fits the 32-bit
    /// output domain, so the product could wrap the 64-bit intermediate.
    #[error("overflow during modular exponentiation: operand {operand} exceeds the 32-bit domain")]
    Overflow { operand: u64 },

    /// The value shares a factor with the modulus and has no inverse.
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NoInverse { value: u32, modulus: u32 },

    /// An operation that is only defined over a prime field was handed a
    /// composite (or 0/1).
    #[error("{0} is not prime")]
    NotPrime(u32),

    /// Only integers >= 2 have prime factorizations.
    #[error("cannot factor {0}: only integers >= 2 have prime factorizations")]
    FactorDomain(u32),

    /// Pollard's rho ran out of starting seeds without separating a
    /// non-trivial factor of the given target.
    #[error("factor search exhausted every starting seed for {0}")]
    FactorSearchExhausted(u32),

    /// No generator was found below the prime. Unreachable for a genuine
    /// prime > 2; replaces the legacy "return 0" sentinel.
    #[error("no primitive root exists below {0}")]
    NoPrimitiveRoot(u32),

    /// A generator must lie in `[2, prime - 1]`.
    #[error("generator {generator} is outside [2, {prime} - 1]")]
    InvalidGenerator { generator: u32, prime: u32 },

    /// A private or ephemeral exponent must lie in `[2, prime - 2]`.
    #[error("exponent {exponent} is outside [2, {prime} - 2]")]
    ExponentOutOfRange { exponent: u32, prime: u32 },

    /// Every plaintext symbol must be reducible modulo the prime without
    /// loss, i.e. strictly below it.
    #[error("message symbol {symbol} is not below the prime modulus {prime}")]
    SymbolOutOfRange { symbol: u32, prime: u32 },
}
