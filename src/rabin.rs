use crate::codec;
use crate::errors::Error;
use crate::key::{PrivateKey, PublicKey};
use crate::number;
use crate::prime;

use log::debug;
use num_bigint::{BigInt, BigUint, ToBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

/// One character's passage through the cipher: the character itself, its
/// doubled codeword `m`, and the ciphertext `c = m² mod n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedSymbol {
    pub symbol: char,
    pub codeword: BigUint,
    pub ciphertext: BigUint,
}

/// Represents the public key of the Rabin scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RabinPublicKey {
    n: BigUint,
}

/// Represents the private key of the Rabin scheme.
///
/// Holds the prime pair, the modulus as supplied by the caller, and the
/// Bézout coefficients `a`, `b` with `a·p + b·q = 1`, computed once at
/// construction and reused for every ciphertext element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RabinPrivateKey {
    p: BigUint,
    q: BigUint,
    n: BigUint,
    a: BigInt,
    b: BigInt,
}

impl RabinPublicKey {
    pub fn new(n: BigUint) -> Self {
        RabinPublicKey { n }
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

impl PublicKey for RabinPublicKey {
    /// Encryption algorithm: each character is encoded into its doubled
    /// codeword `m` and squared modulo `n`. Pure and order-preserving.
    ///
    /// # Arguments
    ///
    /// * `message` - Plaintext to encrypt.
    ///
    /// # Reference
    ///
    /// See algorithm 8.11 in "Handbook of Applied Cryptography" by Alfred J.
    /// Menezes et al.
    fn encrypt(&self, message: &str) -> Vec<EncryptedSymbol> {
        let two = BigUint::from(2usize);

        message
            .chars()
            .map(|symbol| {
                let codeword = codec::encode(symbol);
                let ciphertext = codeword.modpow(&two, &self.n);
                EncryptedSymbol {
                    symbol,
                    codeword,
                    ciphertext,
                }
            })
            .collect()
    }
}

impl RabinPrivateKey {
    /// Builds a private key from a prime pair and modulus, deriving the
    /// Bézout coefficients of `(p, q)`.
    ///
    /// The components are taken at face value apart from a zero check: a
    /// triple that is not a matching Rabin key (composite `p`, `n ≠ p·q`,
    /// primes not congruent to 3 mod 4) is accepted and simply produces
    /// garbage candidates at decryption time, which the codec filter then
    /// discards. See [`PrivateKey::decrypt`] for that policy.
    pub fn new(p: BigUint, q: BigUint, n: BigUint) -> Result<Self, Error> {
        if p.is_zero() || q.is_zero() || n.is_zero() {
            return Err(Error::InvalidInput(
                "p, q and n must be positive integers".to_string(),
            ));
        }
        match number::extended_euclidean_algorithm(&p, &q) {
            None => Err(Error::CouldNotGenerateKeys),
            Some((a, b)) => Ok(RabinPrivateKey { p, q, n, a, b }),
        }
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn q(&self) -> &BigUint {
        &self.q
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Computes the four square-root candidates of one ciphertext element.
    ///
    /// Because `p ≡ q ≡ 3 (mod 4)`, `c^((p+1)/4) mod p` and
    /// `c^((q+1)/4) mod q` are square roots of `c` modulo each prime; the
    /// Chinese remainder theorem combines them into the four roots modulo
    /// `n`, returned in the order `[r, s, −r mod n, −s mod n]`.
    ///
    /// # Reference
    ///
    /// See algorithms 8.11 and 3.44 in "Handbook of Applied Cryptography"
    /// by Alfred J. Menezes et al.
    pub fn candidate_roots(&self, ciphertext: &BigUint) -> [BigUint; 4] {
        let one = BigUint::one();
        let four = BigUint::from(4usize);

        let exp_p = (&self.p + &one).div_floor(&four);
        let exp_q = (&self.q + &one).div_floor(&four);
        let root_p = ciphertext.modpow(&exp_p, &self.p).to_bigint().unwrap();
        let root_q = ciphertext.modpow(&exp_q, &self.q).to_bigint().unwrap();

        let p = self.p.to_bigint().unwrap();
        let q = self.q.to_bigint().unwrap();
        let n = self.n.to_bigint().unwrap();

        let ap_rq = &self.a * &p * &root_q;
        let bq_rp = &self.b * &q * &root_p;

        let r = (&ap_rq + &bq_rp).mod_floor(&n);
        let s = (&ap_rq - &bq_rp).mod_floor(&n);
        let t = (-&r).mod_floor(&n);
        let u = (-&s).mod_floor(&n);

        [r, s, t, u].map(|root| root.to_biguint().unwrap())
    }
}

impl PrivateKey for RabinPrivateKey {
    /// Decryption algorithm: for each ciphertext element the four candidate
    /// roots are computed, each is offered to the codec in order, and every
    /// candidate that decodes contributes one character to the output.
    ///
    /// For a well-formed ciphertext under a matching key exactly one
    /// candidate per element is expected to satisfy the doubling invariant,
    /// but nothing enforces that. An element with zero valid candidates
    /// contributes nothing and an element with several (for instance when
    /// `c` shares a factor with `n` and the roots collapse into duplicates)
    /// contributes several characters, so a mismatched key or an
    /// out-of-range codeword shortens or garbles the output instead of
    /// raising an error. This is a known weakness of the construction and
    /// is left intact rather than patched over.
    ///
    /// # Arguments
    ///
    /// * `ciphertext` - Ciphertext elements to decrypt.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_bigint::BigUint;
    /// use rabin_cryptosystem::key::{PrivateKey, PublicKey};
    /// use rabin_cryptosystem::rabin::{RabinPrivateKey, RabinPublicKey};
    ///
    /// let p = BigUint::from(32_771usize);
    /// let q = BigUint::from(32_779usize);
    /// let n = &p * &q;
    ///
    /// let public_key = RabinPublicKey::new(n.clone());
    /// let private_key = RabinPrivateKey::new(p, q, n).unwrap();
    ///
    /// let ciphertext: Vec<BigUint> = public_key
    ///     .encrypt("hello world")
    ///     .into_iter()
    ///     .map(|symbol| symbol.ciphertext)
    ///     .collect();
    /// assert_eq!(private_key.decrypt(&ciphertext), "hello world");
    /// ```
    fn decrypt(&self, ciphertext: &[BigUint]) -> String {
        let mut message = String::new();
        for element in ciphertext {
            for candidate in self.candidate_roots(element) {
                if let Some(symbol) = codec::decode(&candidate) {
                    message.push(symbol);
                }
            }
        }
        message
    }
}

/// Generates public and private keys.
///
/// # Arguments
///
/// * `bit_length` - Number of bits of each prime; must be at least 2.
/// * `max_attempts` - Optional ceiling on prime candidate draws, see
///   [`prime::generate_blum_prime_pair`].
/// * `rng` - Randomness source for prime generation.
///
/// # Reference
///
/// See algorithm 8.10 in "Handbook of Applied Cryptography" by Alfred J.
/// Menezes et al.
pub fn generate_keys<R: Rng + ?Sized>(
    bit_length: u64,
    max_attempts: Option<usize>,
    rng: &mut R,
) -> Result<(RabinPublicKey, RabinPrivateKey), Error> {
    let (p, q) = prime::generate_blum_prime_pair(bit_length, max_attempts, rng)?;
    let n = &p * &q;
    debug!("generated a {}-bit Blum modulus", n.bits());

    let public_key = RabinPublicKey::new(n.clone());
    let private_key = RabinPrivateKey::new(p, q, n)?;
    Ok((public_key, private_key))
}
