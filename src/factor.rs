use num_bigint::BigUint;
use num_integer::{Integer, Roots};

/// Factors a modulus by trial division, returning the first divisor found
/// and its cofactor.
///
/// Odd candidates 3, 5, 7, … are tried up to `⌊√n⌋`; `None` means no odd
/// divisor exists in that range, i.e. `n` is prime, 1, 2, or a power of 2
/// (Rabin moduli are odd, so even inputs are not probed further). The point
/// of this function is the O(√n) running time itself: any modulus small
/// enough for this demonstration is also small enough to break this way.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use rabin_cryptosystem::factor;
///
/// let factors = factor::factor(&BigUint::from(209usize));
/// assert_eq!(factors, Some((BigUint::from(11usize), BigUint::from(19usize))));
/// assert_eq!(factor::factor(&BigUint::from(11usize)), None);
/// ```
pub fn factor(n: &BigUint) -> Option<(BigUint, BigUint)> {
    let limit = n.sqrt();
    let two = BigUint::from(2usize);
    let mut divisor = BigUint::from(3usize);

    while divisor <= limit {
        if n.is_multiple_of(&divisor) {
            let cofactor = n / &divisor;
            return Some((divisor, cofactor));
        }
        divisor += &two;
    }

    None
}
