use super::{
    key::{select_initial_generator_with_rng, PublicKey, SecretKey},
    primes::is_prime,
    utils::{accumulate, is_invertible},
};
use crate::error::{AccumulatorError, AccumulatorResult};
use crate::utils::AccParams;
use core::fmt::{self, Display, Formatter};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const HASH_TO_PRIME_SALT: &[u8] = b"RSA-ACC-HASH-TO-PRIME-";

/// An element in the accumulator
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Element(pub BigUint);

/// The accumulated elements, in insertion order. Repeats are allowed.
pub type MembershipSet = Vec<Element>;

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Element {{ {} }}", self.0)
    }
}

impl From<u64> for Element {
    fn from(v: u64) -> Self {
        Self(BigUint::from(v))
    }
}

impl Element {
    /// Construct an element by hashing the specified bytes to a 32-bit prime.
    ///
    /// The top bit is set, so the prime exceeds every factor a key drawn from
    /// a bound below `2^31` can have.
    pub fn hash(d: &[u8]) -> Self {
        let mut counter = 0u32;
        loop {
            let mut hasher = Sha256::new();
            hasher.update(HASH_TO_PRIME_SALT);
            hasher.update(d);
            hasher.update(counter.to_be_bytes());
            let digest = hasher.finalize();
            let mut buf = [0u8; 4];
            buf.copy_from_slice(&digest[..4]);
            let candidate = u64::from(u32::from_be_bytes(buf) | 0x8000_0001);
            if is_prime(candidate) {
                return Self::from(candidate);
            }
            counter = counter.wrapping_add(1);
        }
    }
}

/// An RSA-style accumulator over a [`MembershipSet`].
///
/// `key` and `initial_generator` are fixed at construction; `value` always
/// equals `initial_generator` raised in turn to every member, mod `key`.
/// Deserialization applies the same key and generator checks as
/// [`Accumulator::with_generator`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AccumulatorState")]
pub struct Accumulator {
    key: PublicKey,
    initial_generator: BigUint,
    value: BigUint,
}

// Unchecked wire form of an accumulator
#[derive(Deserialize)]
struct AccumulatorState {
    key: PublicKey,
    initial_generator: BigUint,
    value: BigUint,
}

impl TryFrom<AccumulatorState> for Accumulator {
    type Error = AccumulatorError;

    fn try_from(state: AccumulatorState) -> Result<Self, Self::Error> {
        check_generator(&state.key.0, &state.initial_generator)?;
        Ok(Self {
            key: state.key,
            initial_generator: state.initial_generator,
            value: state.value,
        })
    }
}

// key >= 2 and the generator is a unit in [1, key)
fn check_generator(key: &BigUint, initial_generator: &BigUint) -> AccumulatorResult<()> {
    if key <= &BigUint::one() {
        return Err(AccumulatorError::EmptyInvertibleGroup(key.to_string()));
    }
    if initial_generator.is_zero() || initial_generator >= key {
        return Err(AccumulatorError::GeneratorOutOfRange {
            generator: initial_generator.to_string(),
            key: key.to_string(),
        });
    }
    if !is_invertible(initial_generator, key) {
        return Err(AccumulatorError::NotCoprime(initial_generator.to_string()));
    }
    Ok(())
}

impl Display for Accumulator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Accumulator {{ key: {}, initial_generator: {}, value: {} }}",
            self.key.0, self.initial_generator, self.value
        )
    }
}

impl Accumulator {
    /// Create an accumulator over `set` with a fresh key from the default
    /// parameters and the OS RNG
    pub fn new(set: &[Element]) -> AccumulatorResult<Self> {
        Self::with_params(&AccParams::default(), set, rand::rngs::OsRng)
    }

    /// Create an accumulator over `set`, generating the key from `params`.
    /// The key factors are discarded.
    pub fn with_params(
        params: &AccParams,
        set: &[Element],
        mut rng: impl RngCore + CryptoRng,
    ) -> AccumulatorResult<Self> {
        let sk = SecretKey::generate(params, &mut rng)?;
        Self::with_public_key(PublicKey::from(&sk), set, rng)
    }

    /// Create an accumulator over `set` for an existing modulus
    pub fn with_public_key(
        key: PublicKey,
        set: &[Element],
        rng: impl RngCore + CryptoRng,
    ) -> AccumulatorResult<Self> {
        let initial_generator = select_initial_generator_with_rng(&key.0, rng)?;
        let value = accumulate(&initial_generator, set, &key.0);
        debug!("created accumulator over {} elements, key {}", set.len(), key.0);
        Ok(Self {
            key,
            initial_generator,
            value,
        })
    }

    /// Rebuild an accumulator over `set` from a published key and generator.
    ///
    /// Fails unless `key >= 2` and the generator is a unit in `[1, key)`.
    pub fn with_generator(
        key: PublicKey,
        initial_generator: BigUint,
        set: &[Element],
    ) -> AccumulatorResult<Self> {
        check_generator(&key.0, &initial_generator)?;
        let value = accumulate(&initial_generator, set, &key.0);
        Ok(Self {
            key,
            initial_generator,
            value,
        })
    }

    /// The modulus
    pub fn key(&self) -> &BigUint {
        &self.key.0
    }

    /// The modulus as a public key
    pub fn public_key(&self) -> &PublicKey {
        &self.key
    }

    /// The fixed exponentiation base
    pub fn initial_generator(&self) -> &BigUint {
        &self.initial_generator
    }

    /// The current digest
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Recompute the value from the entire current membership set
    pub fn refresh(&mut self, set: &[Element]) {
        self.value = self.generate_value(set);
        trace!("refreshed accumulator over {} elements", set.len());
    }

    /// The value this accumulator would have over `set`, without storing it
    pub fn generate_value<'a, I>(&self, set: I) -> BigUint
    where
        I: IntoIterator<Item = &'a Element>,
    {
        accumulate(&self.initial_generator, set, &self.key.0)
    }
}

/// Create an accumulator over `set` with default parameters
pub fn create_accumulator(set: &[Element]) -> AccumulatorResult<Accumulator> {
    Accumulator::new(set)
}
