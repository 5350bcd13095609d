//! Key generation, the accumulator value and membership witnesses
mod acc;
mod key;
mod primes;
pub mod utils;
mod witness;

pub use acc::*;
pub use key::*;
pub use primes::primes_below;
pub use utils::*;
pub use witness::*;
