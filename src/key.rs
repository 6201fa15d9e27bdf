use num_bigint::BigUint;

use crate::rabin::EncryptedSymbol;

/// Generic trait for operations on a public key.
pub trait PublicKey {
    fn encrypt(&self, message: &str) -> Vec<EncryptedSymbol>;
}

/// Generic trait for operations on a private key.
pub trait PrivateKey {
    fn decrypt(&self, ciphertext: &[BigUint]) -> String;
}
