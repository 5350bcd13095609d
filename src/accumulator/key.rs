use super::{primes::primes_below, utils::is_invertible};
use crate::error::{AccumulatorError, AccumulatorResult};
use crate::utils::{AccParams, DEFAULT_PRIME_BOUND};
use core::fmt::{self, Display, Formatter};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{seq::index, CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::DefaultIsZeroes;

/// The two prime factors of the modulus
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct SecretKey {
    p: u64,
    q: u64,
}

impl DefaultIsZeroes for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey { .. }")
    }
}

impl SecretKey {
    /// Draw two distinct primes from the upper half of the primes below
    /// `params.prime_bound`
    pub fn generate(
        params: &AccParams,
        mut rng: impl RngCore + CryptoRng,
    ) -> AccumulatorResult<Self> {
        let bound = params.get_prime_bound();
        let primes = primes_below(bound);
        let half = primes.len() >> 1;
        let available = primes.len() - half;
        if available < 2 {
            return Err(AccumulatorError::InsufficientPrimes { bound, available });
        }
        let picked = index::sample(&mut rng, available, 2);
        let key = Self {
            p: primes[half + picked.index(0)],
            q: primes[half + picked.index(1)],
        };
        debug!("generated key factors from {} candidate primes", available);
        Ok(key)
    }

    /// Return the factors
    pub fn factors(&self) -> (u64, u64) {
        (self.p, self.q)
    }

    /// Euler's totient of the modulus, `(p - 1)(q - 1)`. Zero for an unset key.
    pub fn totient(&self) -> BigUint {
        BigUint::from(self.p.saturating_sub(1)) * BigUint::from(self.q.saturating_sub(1))
    }
}

/// The public modulus, the product of the two secret primes
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub BigUint);

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey {{ {} }}", self.0)
    }
}

impl From<&SecretKey> for PublicKey {
    fn from(sk: &SecretKey) -> Self {
        Self(BigUint::from(sk.p) * BigUint::from(sk.q))
    }
}

impl From<PublicKey> for BigUint {
    fn from(pk: PublicKey) -> Self {
        pk.0
    }
}

impl PublicKey {
    /// Select a generator uniformly from the units modulo this key
    pub fn select_initial_generator(
        &self,
        rng: impl RngCore + CryptoRng,
    ) -> AccumulatorResult<BigUint> {
        select_initial_generator_with_rng(&self.0, rng)
    }
}

/// Generate a modulus from the primes below `bound` using the OS RNG
pub fn generate_key(bound: usize) -> AccumulatorResult<BigUint> {
    let sk = SecretKey::generate(&AccParams::new(bound), rand::rngs::OsRng)?;
    Ok(PublicKey::from(&sk).0)
}

/// Generate a modulus from the default bound
pub fn generate_default_key() -> AccumulatorResult<BigUint> {
    generate_key(DEFAULT_PRIME_BOUND)
}

/// All `x` in `[1, modulus)` with `gcd(x, modulus) = 1`, ascending.
///
/// Linear in the modulus, only usable for the small demonstration keys.
pub fn generate_invertible_group(modulus: &BigUint) -> Vec<BigUint> {
    let mut group = Vec::new();
    let mut number = BigUint::one();
    while &number < modulus {
        if is_invertible(&number, modulus) {
            group.push(number.clone());
        }
        number += 1u32;
    }
    group
}

/// Uniform random unit modulo `modulus`, using the OS RNG
pub fn select_initial_generator(modulus: &BigUint) -> AccumulatorResult<BigUint> {
    select_initial_generator_with_rng(modulus, rand::rngs::OsRng)
}

/// Uniform random unit modulo `modulus`.
///
/// Rejection samples `[1, modulus)` rather than materializing the group;
/// the accepted draw is uniform over the units all the same.
pub fn select_initial_generator_with_rng(
    modulus: &BigUint,
    mut rng: impl RngCore + CryptoRng,
) -> AccumulatorResult<BigUint> {
    if modulus <= &BigUint::one() {
        return Err(AccumulatorError::EmptyInvertibleGroup(modulus.to_string()));
    }
    loop {
        let candidate = rng.gen_biguint_range(&BigUint::one(), modulus);
        if is_invertible(&candidate, modulus) {
            trace!("selected initial generator {}", candidate);
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn key_is_product_of_upper_half_primes() {
        let params = AccParams::default();
        let primes = primes_below(params.get_prime_bound());
        let floor = primes[primes.len() / 2];
        for _ in 0..20 {
            let sk = SecretKey::generate(&params, rand::rngs::OsRng).unwrap();
            let (p, q) = sk.factors();
            assert_ne!(p, q);
            assert!(p >= floor && q >= floor);
            assert!(primes.binary_search(&p).is_ok());
            assert!(primes.binary_search(&q).is_ok());
            assert_eq!(PublicKey::from(&sk).0, BigUint::from(p * q));
        }
    }

    #[test]
    fn bound_too_small() {
        // primes below 5 are [2, 3], the upper half holds one
        let err = generate_key(5).unwrap_err();
        assert_eq!(
            err,
            AccumulatorError::InsufficientPrimes {
                bound: 5,
                available: 1
            }
        );
        assert!(generate_key(0).is_err());
        // [2, 3, 5] leaves [3, 5]
        assert_eq!(generate_key(6).unwrap(), BigUint::from(15u32));
    }

    #[test]
    fn default_key() {
        let key = generate_default_key().unwrap();
        let primes = primes_below(DEFAULT_PRIME_BOUND);
        let floor = BigUint::from(primes[primes.len() / 2]);
        assert!(key > &floor * &floor);
        assert!(key < BigUint::from(1000u32 * 1000));
    }

    #[test]
    fn invertible_group_of_fifteen() {
        let group = generate_invertible_group(&BigUint::from(15u32));
        let expected = [1u32, 2, 4, 7, 8, 11, 13, 14]
            .iter()
            .map(|&v| BigUint::from(v))
            .collect::<Vec<_>>();
        assert_eq!(group, expected);
        assert!(generate_invertible_group(&BigUint::one()).is_empty());
    }

    #[test]
    fn generator_is_unit() {
        let modulus = BigUint::from(3233u32);
        for _ in 0..50 {
            let g = select_initial_generator(&modulus).unwrap();
            assert!(g >= BigUint::one() && g < modulus);
            assert!(g.gcd(&modulus).is_one());
        }
        assert!(select_initial_generator(&BigUint::one()).is_err());
    }

    #[test]
    fn totient() {
        let sk = SecretKey { p: 61, q: 53 };
        assert_eq!(sk.totient(), BigUint::from(3120u32));
        let g = BigUint::from(7u32);
        let n = PublicKey::from(&sk).0;
        assert_eq!(g.modpow(&sk.totient(), &n), BigUint::one());
    }

    #[test]
    fn totient_of_unset_key() {
        let sk = SecretKey::default();
        assert_eq!(sk.factors(), (0, 0));
        assert_eq!(sk.totient(), BigUint::from(0u32));
        assert_eq!(SecretKey { p: 1, q: 7 }.totient(), BigUint::from(0u32));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let params = AccParams::default();
        let a = SecretKey::generate(&params, StdRng::seed_from_u64(42)).unwrap();
        let b = SecretKey::generate(&params, StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
        let pk = PublicKey::from(&a);
        let g1 = pk.select_initial_generator(StdRng::seed_from_u64(7)).unwrap();
        let g2 = pk.select_initial_generator(StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(g1, g2);
    }
}
