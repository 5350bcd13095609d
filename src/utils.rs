use serde::{Deserialize, Serialize};

/// The sieve bound used when none is given
pub const DEFAULT_PRIME_BOUND: usize = 1000;

/// Accumulator parameters
#[derive(Copy, Clone, Debug, Deserialize, Serialize, Eq, PartialEq, Hash)]
pub struct AccParams {
    pub(crate) prime_bound: usize,
}

impl Default for AccParams {
    fn default() -> AccParams {
        AccParams {
            prime_bound: DEFAULT_PRIME_BOUND,
        }
    }
}

impl AccParams {
    /// Create parameters that draw key factors from the primes below `prime_bound`
    pub fn new(prime_bound: usize) -> Self {
        Self { prime_bound }
    }

    // read-only
    /// Get the sieve bound
    pub fn get_prime_bound(&self) -> usize {
        self.prime_bound
    }
}
