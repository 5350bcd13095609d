/*
    Copyright Hyperledger Foundation. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
//! An RSA-style cryptographic accumulator.
//!
//! The accumulator value is an initial generator raised to every element of
//! the membership set modulo a two-prime key. A member's witness is the same
//! value computed without that member, so `witness^element mod key` recovers
//! the accumulator value.
#![deny(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_parens,
    unused_lifetimes,
    unconditional_recursion,
    unused_extern_crates,
    trivial_casts,
    trivial_numeric_casts
)]
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod error;
mod update;
mod utils;


pub mod accumulator;
pub use error::*;
pub use update::*;
pub use utils::*;
