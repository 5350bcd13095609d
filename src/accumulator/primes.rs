use std::collections::HashMap;
use std::sync::{Arc, Mutex};

lazy_static! {
    // Each distinct bound is sieved once and shared afterwards.
    static ref PRIME_CACHE: Mutex<HashMap<usize, Arc<Vec<u64>>>> = Mutex::new(HashMap::new());
}

/// Every prime strictly below `bound`, ascending.
///
/// Results are memoized per bound in a process-wide cache, so asking for a
/// larger bound later never returns a stale shorter list.
pub fn primes_below(bound: usize) -> Arc<Vec<u64>> {
    let mut cache = PRIME_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    cache
        .entry(bound)
        .or_insert_with(|| {
            let primes = sieve(bound);
            debug!("sieved {} primes below {}", primes.len(), bound);
            Arc::new(primes)
        })
        .clone()
}

/// Sieve of Eratosthenes over `[2, bound)`
fn sieve(bound: usize) -> Vec<u64> {
    if bound <= 2 {
        return Vec::new();
    }
    let mut is_prime = vec![true; bound];
    let mut primes = Vec::new();
    for number in 2..bound {
        if !is_prime[number] {
            continue;
        }
        primes.push(number as u64);
        let mut multiple = number * 2;
        while multiple < bound {
            is_prime[multiple] = false;
            multiple += number;
        }
    }
    primes
}

/// Trial division, only meant for the small candidates hashed into elements
pub(crate) fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
