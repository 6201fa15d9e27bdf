use num_bigint::{BigInt, BigUint, ToBigInt};
use num_traits::{One, Zero};

/// Calculates integers `x` and `y` such that `ax + by = d`, where
/// `d = gcd(a, b)`.
///
/// # Reference
///
/// See algorithm 2.107 in "Handbook of Applied Cryptography" by Alfred J.
/// Menezes et al.
///
/// # Examples
///
/// ```
/// use num_bigint::{BigUint, BigInt};
/// use rabin_cryptosystem::number;
///
/// let a = BigUint::from(73usize);
/// let b = BigUint::from(56usize);
/// let x = BigInt::from(-23isize);
/// let y = BigInt::from(30isize);
///
/// assert_eq!(number::extended_euclidean_algorithm(&a, &b), Some((x, y)));
/// ```
pub fn extended_euclidean_algorithm(a: &BigUint, b: &BigUint) -> Option<(BigInt, BigInt)> {
    let mut r0 = a.to_bigint()?;
    let mut r1 = b.to_bigint()?;
    let mut x0 = BigInt::one();
    let mut x1 = BigInt::zero();
    let mut y0 = BigInt::zero();
    let mut y1 = BigInt::one();

    while !r1.is_zero() {
        let quotient = &r0 / &r1;
        let r2 = &r0 - &quotient * &r1;
        let x2 = &x0 - &quotient * &x1;
        let y2 = &y0 - &quotient * &y1;

        r0 = std::mem::replace(&mut r1, r2);
        x0 = std::mem::replace(&mut x1, x2);
        y0 = std::mem::replace(&mut y1, y2);
    }

    Some((x0, y0))
}
