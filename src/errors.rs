/// Error type for key generation, primality testing, and caller input
/// validation.
///
/// Decryption deliberately has no error channel: a mismatched key triple or
/// a ciphertext with zero or several plausible roots degrades the recovered
/// message instead of failing (see [`crate::rabin`]).
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum Error {
    #[fail(display = "bit length of the generated primes should be greater than 1")]
    BitLengthTooSmall,
    #[fail(display = "primality candidate must be odd and greater than 2")]
    InvalidPrimalityCandidate,
    #[fail(display = "could not generate a Blum prime pair within {} candidate draws", attempts)]
    GenerationExhausted { attempts: usize },
    #[fail(display = "could not generate private/public keys")]
    CouldNotGenerateKeys,
    #[fail(display = "invalid input: {}", _0)]
    InvalidInput(String),
}
