use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// Encodes a character by concatenating the unpadded binary representation
/// of its code point with itself and reading the result back as an integer.
///
/// `'A'` (code point 65, binary `1000001`) becomes `10000011000001`, that
/// is 8385. Encryption relies on the encoded value and its square being
/// small relative to the modulus in use; a codeword at or above the modulus
/// is folded by the reduction and the character cannot be recovered.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use rabin_cryptosystem::codec;
///
/// assert_eq!(codec::encode('A'), BigUint::from(8385usize));
/// assert_eq!(codec::decode(&BigUint::from(8385usize)), Some('A'));
/// ```
pub fn encode(symbol: char) -> BigUint {
    let codepoint = BigUint::from(symbol as u32);
    (&codepoint << codepoint.bits()) | &codepoint
}

/// Recovers a character from a doubled codeword.
///
/// The binary representation (without leading zeros) must have even length
/// and split into two bit-identical halves; the first half, read as an
/// integer, is the code point. Anything else (odd length, mismatched
/// halves, or a half that is not a valid Unicode scalar value) is rejected
/// with `None`. Decryption leans on exactly this rejection to pick the true
/// plaintext out of the four candidate square roots.
pub fn decode(value: &BigUint) -> Option<char> {
    let length = value.bits();
    if length == 0 || length % 2 != 0 {
        return None;
    }

    let half = length / 2;
    let high = value >> half;
    let low = value & ((BigUint::one() << half) - BigUint::one());
    if high != low {
        return None;
    }

    low.to_u32().and_then(char::from_u32)
}
