//! Plain-data boundary for embedding applications.
//!
//! A host (web front end, CLI, notebook) hands over the fields it collected
//! (bit lengths, message text, and big integers as base-10 strings) and
//! gets back serializable response structs shaped like the JSON the
//! demonstration serves. Big integers stay strings on the way out as well,
//! since JSON numbers cannot carry arbitrary precision. No I/O happens
//! here, and any caching of past responses is the host's business.

use crate::errors::Error;
use crate::factor;
use crate::key::{PrivateKey, PublicKey};
use crate::prime;
use crate::rabin::{self, RabinPrivateKey};

use num_bigint::BigUint;
use num_traits::Num;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ceiling on prime candidate draws per generation request, so a request
/// for a degenerate bit length (2, 3, 4 admit no Blum pair at all) returns
/// `GenerationExhausted` instead of spinning forever.
pub const MAX_GENERATION_ATTEMPTS: usize = 100_000;

/// Longest accepted plaintext, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGenerationResponse {
    pub p: String,
    pub q: String,
    pub n: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKeyResponse {
    pub p: String,
    pub q: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyResponse {
    pub n: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedSymbolResponse {
    pub character: char,
    pub m: String,
    pub ciphertext: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionResponse {
    pub private_key: PrivateKeyResponse,
    pub public_key: PublicKeyResponse,
    pub encrypted_message: Vec<EncryptedSymbolResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptionResponse {
    pub original_message: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorizationResponse {
    pub p: String,
    pub q: String,
}

/// Serves a key-generation request: a Blum prime pair of the requested bit
/// length and their product.
pub fn generate<R: Rng + ?Sized>(
    bit_length: u64,
    rng: &mut R,
) -> Result<KeyGenerationResponse, Error> {
    let (p, q) =
        prime::generate_blum_prime_pair(bit_length, Some(MAX_GENERATION_ATTEMPTS), rng)?;
    let n = &p * &q;
    Ok(KeyGenerationResponse {
        p: p.to_string(),
        q: q.to_string(),
        n: n.to_string(),
    })
}

/// Serves a combined generate-and-encrypt request: fresh keys of the
/// requested bit length plus the per-character encryption of `message`
/// under the new modulus.
pub fn encrypt<R: Rng + ?Sized>(
    bit_length: u64,
    message: &str,
    rng: &mut R,
) -> Result<EncryptionResponse, Error> {
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(Error::InvalidInput(format!(
            "message is limited to {} characters",
            MAX_MESSAGE_LENGTH
        )));
    }

    let (public_key, private_key) =
        rabin::generate_keys(bit_length, Some(MAX_GENERATION_ATTEMPTS), rng)?;

    let encrypted_message = public_key
        .encrypt(message)
        .into_iter()
        .map(|entry| EncryptedSymbolResponse {
            character: entry.symbol,
            m: entry.codeword.to_string(),
            ciphertext: entry.ciphertext.to_string(),
        })
        .collect();

    Ok(EncryptionResponse {
        private_key: PrivateKeyResponse {
            p: private_key.p().to_string(),
            q: private_key.q().to_string(),
        },
        public_key: PublicKeyResponse {
            n: public_key.n().to_string(),
        },
        encrypted_message,
    })
}

/// Serves a decryption request from the caller's `(p, q, n)` fields and a
/// comma- or whitespace-delimited list of ciphertext elements.
///
/// `details` carries the four square-root candidates per element, in the
/// order the algorithm produced them; `original_message` is whatever the
/// codec filter accepted. Malformed numeric fields are the only error;
/// a key triple that does not match the ciphertext degrades the message
/// silently, exactly as direct use of [`crate::rabin`] would.
pub fn decrypt(p: &str, q: &str, n: &str, ciphertexts: &str) -> Result<DecryptionResponse, Error> {
    let p = parse_integer("p", p)?;
    let q = parse_integer("q", q)?;
    let n = parse_integer("n", n)?;
    let ciphertexts = parse_integer_list(ciphertexts)?;

    let private_key = RabinPrivateKey::new(p, q, n)?;

    let details = ciphertexts
        .iter()
        .flat_map(|element| private_key.candidate_roots(element))
        .map(|root| root.to_string())
        .collect();
    let original_message = private_key.decrypt(&ciphertexts);

    Ok(DecryptionResponse {
        original_message,
        details,
    })
}

/// Serves a factorization request for a modulus given as a base-10 string.
///
/// `Ok(None)` means no factor was found, the normal outcome for a prime,
/// and is the host's cue to report "no factors found".
pub fn factorize(n: &str) -> Result<Option<FactorizationResponse>, Error> {
    let n = parse_integer("n", n)?;
    if n < BigUint::from(2usize) {
        return Err(Error::InvalidInput(
            "n must be at least 2".to_string(),
        ));
    }

    Ok(factor::factor(&n).map(|(p, q)| FactorizationResponse {
        p: p.to_string(),
        q: q.to_string(),
    }))
}

fn parse_integer(field: &str, input: &str) -> Result<BigUint, Error> {
    let token = input.trim();
    BigUint::from_str_radix(token, 10).map_err(|_| {
        Error::InvalidInput(format!("field `{}` is not a base-10 integer: `{}`", field, token))
    })
}

/// Splits a delimited ciphertext list into integers, accepting commas and
/// any whitespace as separators.
pub fn parse_integer_list(input: &str) -> Result<Vec<BigUint>, Error> {
    input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| parse_integer("ciphertext", token))
        .collect()
}
