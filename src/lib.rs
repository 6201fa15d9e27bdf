//! # Rabin public-key cryptosystem
//!
//! `rabin_cryptosystem` is a working demonstration of the Rabin public-key
//! scheme over small Blum moduli: key generation from two primes congruent
//! to 3 mod 4, encryption by modular squaring, decryption by square-root
//! extraction modulo each prime combined through the Chinese remainder
//! theorem, and a trial-division factorizer that shows how quickly small
//! moduli fall.
//!
//! This is a teaching implementation, not a hardened cryptographic library.
//! Arithmetic is not constant-time, the primality test is a plain Fermat
//! test, and the supported bit lengths are demonstration-sized.

#[macro_use]
extern crate failure;
extern crate log;
extern crate num_bigint;
extern crate num_integer;
extern crate num_traits;
extern crate rand;
extern crate serde;

#[cfg(test)]
extern crate primal;
#[cfg(test)]
extern crate proptest;
#[cfg(test)]
extern crate rand_chacha;
#[cfg(test)]
extern crate serde_json;

/// Plain-data request/response layer for embedding applications.
pub mod api;
/// Bit-doubling codec between characters and integers.
pub mod codec;
/// Errors during key generation and input validation.
pub mod errors;
/// Brute-force factorization of small moduli.
pub mod factor;
/// Generic traits for operations on keys.
pub mod key;
/// Number theoric functions.
pub mod number;
/// Prime generation and primality testing functions.
pub mod prime;
/// Rabin public-key scheme.
pub mod rabin;
