use thiserror::Error;

/// Errors raised by the checked accumulator operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccumulatorError {
    /// The prime bound does not leave two primes in the upper half of the sieve
    #[error(
        "insufficient randomness domain: bound {bound} yields {available} usable primes, need 2"
    )]
    InsufficientPrimes {
        /// The requested sieve bound
        bound: usize,
        /// Primes available in the upper half
        available: usize,
    },

    /// The modulus has no invertible residues to draw a generator from
    #[error("insufficient randomness domain: modulus {0} has no invertible residues")]
    EmptyInvertibleGroup(String),

    /// The generator does not lie in `[1, key)`
    #[error("generator {generator} is outside [1, {key})")]
    GeneratorOutOfRange {
        /// The rejected generator
        generator: String,
        /// The modulus
        key: String,
    },

    /// The element shares a nontrivial factor with the key
    #[error("element {0} is not coprime to the modulus")]
    NotCoprime(String),

    /// The element is not a member of the set
    #[error("element {0} is absent from the membership set")]
    ElementAbsent(String),
}

/// Result alias for accumulator operations
pub type AccumulatorResult<T> = Result<T, AccumulatorError>;
