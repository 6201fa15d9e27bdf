use crate::errors::Error;

use log::debug;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::Rng;

/// Returns `true` if the input unsigned integer is probably prime.
///
/// The test runs `3 × (decimal digit count)` Fermat trials, each with a
/// uniformly random witness `a` in `[2, candidate − 1]`, and checks
/// `a^(candidate − 1) ≡ 1 (mod candidate)`. A single failing witness proves
/// compositeness and short-circuits to `Ok(false)`.
///
/// This is a plain Fermat test, not a strong pseudoprime test: Carmichael
/// numbers fool every witness coprime to them and can be reported as prime.
/// That behavior is part of what this crate demonstrates and is deliberately
/// left in place.
///
/// # Arguments
///
/// * `candidate` - number to test for primality; must be odd and greater
///   than 2, otherwise `Error::InvalidPrimalityCandidate` is returned.
/// * `rng` - randomness source for witness selection.
///
/// # Reference
///
/// See algorithm 4.9 in "Handbook of Applied Cryptography" by Alfred J.
/// Menezes et al.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use rabin_cryptosystem::prime;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// assert!(prime::is_probably_prime(&BigUint::from(2969usize), &mut rng).unwrap());
/// assert!(!prime::is_probably_prime(&BigUint::from(2967usize), &mut rng).unwrap());
/// ```
pub fn is_probably_prime<R: Rng + ?Sized>(
    candidate: &BigUint,
    rng: &mut R,
) -> Result<bool, Error> {
    let two = BigUint::from(2usize);
    if candidate <= &two || candidate.is_even() {
        return Err(Error::InvalidPrimalityCandidate);
    }

    let trials = 3 * candidate.to_str_radix(10).len();
    let exponent = candidate - BigUint::one();

    for _ in 0..trials {
        let witness = rng.gen_biguint_range(&two, candidate);
        if !witness.modpow(&exponent, candidate).is_one() {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Generates two distinct probable primes of the given bit length, both
/// congruent to 3 mod 4.
///
/// Candidates are drawn uniformly from `[2^(bit_length − 1), 2^bit_length)`
/// with the low bit forced to 1, tested with [`is_probably_prime`], and
/// accumulated until two distinct primes are held. If the two do not both
/// satisfy the Blum condition the pair is discarded and the whole
/// draw-and-test process restarts. The search is a single iterative loop and
/// never recurses.
///
/// `max_attempts` bounds the total number of candidate draws across all
/// restarts; exceeding it returns `Error::GenerationExhausted`. `None` lets
/// the search run unbounded, which terminates with probability 1 whenever
/// two distinct primes congruent to 3 mod 4 exist in range. Callers asking
/// for very small bit lengths (where they may not) should pass a ceiling.
///
/// # Arguments
///
/// * `bit_length` - number of bits of each generated prime; must be at
///   least 2.
/// * `max_attempts` - optional ceiling on candidate draws.
/// * `rng` - randomness source for candidate and witness selection.
pub fn generate_blum_prime_pair<R: Rng + ?Sized>(
    bit_length: u64,
    max_attempts: Option<usize>,
    rng: &mut R,
) -> Result<(BigUint, BigUint), Error> {
    if bit_length < 2 {
        return Err(Error::BitLengthTooSmall);
    }

    let three = BigUint::from(3usize);
    let four = BigUint::from(4usize);
    let lower = BigUint::one() << (bit_length - 1);
    let upper = BigUint::one() << bit_length;

    let mut attempts = 0usize;
    loop {
        let mut pair: Vec<BigUint> = Vec::with_capacity(2);
        while pair.len() < 2 {
            if let Some(limit) = max_attempts {
                if attempts >= limit {
                    return Err(Error::GenerationExhausted { attempts: limit });
                }
            }
            attempts += 1;

            let candidate = rng.gen_biguint_range(&lower, &upper) | BigUint::one();
            if is_probably_prime(&candidate, rng)? && !pair.contains(&candidate) {
                pair.push(candidate);
            }
        }

        if pair.iter().all(|prime| prime.mod_floor(&four) == three) {
            let q = pair.pop().unwrap();
            let p = pair.pop().unwrap();
            return Ok((p, q));
        }
        debug!(
            "prime pair failed the Blum condition after {} draws, restarting",
            attempts
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_traits::ToPrimitive;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn small_primes_are_accepted() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for prime in [3usize, 5, 7, 11, 19, 101, 1009, 2969, 32_771, 32_779] {
            assert!(
                is_probably_prime(&BigUint::from(prime), &mut rng).unwrap(),
                "{} should test prime",
                prime
            );
        }
    }

    #[test]
    fn composites_are_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        // 2967 = 3 * 23 * 43, 9409 = 97^2, 10403 = 101 * 103
        for composite in [2967usize, 9409, 10_403] {
            assert!(
                !is_probably_prime(&BigUint::from(composite), &mut rng).unwrap(),
                "{} should test composite",
                composite
            );
        }
    }

    #[test]
    fn out_of_domain_candidates_are_refused() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for candidate in [0usize, 1, 2, 4, 100] {
            assert_eq!(
                is_probably_prime(&BigUint::from(candidate), &mut rng),
                Err(Error::InvalidPrimalityCandidate),
                "candidate {}",
                candidate
            );
        }
    }

    #[test_log::test]
    fn generation_is_deterministic_under_a_fixed_seed() {
        let mut first = ChaCha20Rng::seed_from_u64(42);
        let mut second = ChaCha20Rng::seed_from_u64(42);
        let a = generate_blum_prime_pair(16, None, &mut first).unwrap();
        let b = generate_blum_prime_pair(16, None, &mut second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generated_primes_survive_an_independent_check() {
        for seed in [7u64, 99, 2024] {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let (p, q) = generate_blum_prime_pair(16, None, &mut rng).unwrap();
            assert!(primal::is_prime(p.to_u64().unwrap()));
            assert!(primal::is_prime(q.to_u64().unwrap()));
            assert_ne!(p, q);
        }
    }

    #[test]
    fn five_bits_is_the_smallest_workable_length() {
        // [16, 31] holds three primes congruent to 3 mod 4 (19, 23, 31),
        // the first range where a distinct Blum pair exists at all.
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let (p, q) = generate_blum_prime_pair(5, None, &mut rng).unwrap();
        assert_ne!(p, q);
        assert_eq!(p.bits(), 5);
        assert_eq!(q.bits(), 5);
        assert!(primal::is_prime(p.to_u64().unwrap()));
        assert!(primal::is_prime(q.to_u64().unwrap()));
    }

    #[test]
    fn degenerate_bit_lengths_exhaust_the_draw_ceiling() {
        // At 2 bits the only odd candidate is 3, so a distinct pair can
        // never be collected; at 3 bits the only primes are 5 and 7 and
        // 5 ≢ 3 (mod 4), so the Blum condition fails on every restart.
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        assert_eq!(
            generate_blum_prime_pair(2, Some(50), &mut rng),
            Err(Error::GenerationExhausted { attempts: 50 })
        );
        assert_eq!(
            generate_blum_prime_pair(3, Some(200), &mut rng),
            Err(Error::GenerationExhausted { attempts: 200 })
        );
    }

    #[test]
    fn tiny_bit_lengths_are_refused() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        assert_eq!(
            generate_blum_prime_pair(1, None, &mut rng),
            Err(Error::BitLengthTooSmall)
        );
        assert_eq!(
            generate_blum_prime_pair(0, None, &mut rng),
            Err(Error::BitLengthTooSmall)
        );
    }

    proptest! {
        #[test]
        fn generated_pairs_are_blum_pairs(
            bit_length in prop_oneof![12u64..=13, 15u64..=16],
            seed in any::<u64>(),
        ) {
            let three = BigUint::from(3usize);
            let four = BigUint::from(4usize);

            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let (p, q) = generate_blum_prime_pair(bit_length, None, &mut rng).unwrap();

            prop_assert_ne!(&p, &q);
            prop_assert_eq!(p.bits(), bit_length);
            prop_assert_eq!(q.bits(), bit_length);
            prop_assert_eq!(p.mod_floor(&four) == three, true);
            prop_assert_eq!(q.mod_floor(&four) == three, true);
            prop_assert!(primal::is_prime(p.to_u64().unwrap()));
            prop_assert!(primal::is_prime(q.to_u64().unwrap()));
        }
    }
}
