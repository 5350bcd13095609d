//! Modular arithmetic shared by the accumulator and its witnesses

use super::Element;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// `exponent = 0` yields `1 mod modulus`. Panics if `modulus` is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    assert!(!modulus.is_zero(), "modulus must be at least 1");
    let mut res = BigUint::one() % modulus;
    let mut base = base % modulus;
    let bits = exponent.bits();
    for i in 0..bits {
        if exponent.bit(i) {
            res = (res * &base) % modulus;
        }
        if i + 1 < bits {
            base = (&base * &base) % modulus;
        }
    }
    res
}

/// True when `number` is a unit modulo `modulus`
pub fn is_invertible(number: &BigUint, modulus: &BigUint) -> bool {
    number.gcd(modulus).is_one()
}

/// Fold `base` through `mod_pow` once per element, in sequence order
pub fn accumulate<'a, I>(base: &BigUint, elements: I, modulus: &BigUint) -> BigUint
where
    I: IntoIterator<Item = &'a Element>,
{
    elements
        .into_iter()
        .fold(base.clone(), |acc, e| mod_pow(&acc, &e.0, modulus))
}
